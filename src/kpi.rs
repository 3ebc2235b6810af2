//! Headline KPIs with optional season-over-season comparison.

use ordinalizer::Ordinal;
use serde::Serialize;
use strum::EnumCount;
use strum_macros::{Display, EnumCount, EnumIter};

use crate::aggregate::{Delta, Tally};
use crate::domain::PerspectiveRow;

/// Shown in place of a rate or average that has no matches behind it.
pub const PLACEHOLDER: &str = "—";

#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, Ordinal, EnumCount, EnumIter, Display, Serialize,
)]
pub enum Kpi {
    #[strum(serialize = "Total Matches")]
    TotalMatches,
    #[strum(serialize = "Win Rate")]
    WinRate,
    #[strum(serialize = "Avg Goals For")]
    AvgGoalsFor,
    #[strum(serialize = "Avg Goals Against")]
    AvgGoalsAgainst,
}
impl Kpi {
    /// The metric over the tallied rows; zero for an empty tally.
    fn read(&self, tally: &Tally) -> f64 {
        match self {
            Kpi::TotalMatches => tally.n as f64,
            Kpi::WinRate => tally.win_rate(),
            Kpi::AvgGoalsFor => tally.avg_goals_for(),
            Kpi::AvgGoalsAgainst => tally.avg_goals_against(),
        }
    }

    pub fn is_count(&self) -> bool {
        matches!(self, Kpi::TotalMatches)
    }

    pub fn format_value(&self, value: f64) -> String {
        match self {
            Kpi::TotalMatches => format!("{value:.0}"),
            Kpi::WinRate => format!("{value:.1}%"),
            Kpi::AvgGoalsFor | Kpi::AvgGoalsAgainst => format!("{value:.2}"),
        }
    }

    pub fn format_delta(&self, delta: &Delta) -> String {
        if self.is_count() {
            format!("{:+.0} ({:+.1}%)", delta.absolute, delta.percent)
        } else {
            format!("{:+.1} ({:+.1}%)", delta.absolute, delta.percent)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub season: String,
    pub previous: f64,
    pub delta: Delta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub kpi: Kpi,
    pub value: f64,
    /// Matches behind `value`.
    pub n: usize,
    pub comparison: Option<Comparison>,
}
impl KpiCard {
    pub fn display_value(&self) -> String {
        if self.n == 0 && !self.kpi.is_count() {
            PLACEHOLDER.to_string()
        } else {
            self.kpi.format_value(self.value)
        }
    }

    pub fn display_comparison(&self) -> Option<String> {
        self.comparison.as_ref().map(|comparison| {
            format!(
                "{} vs {}",
                self.kpi.format_delta(&comparison.delta),
                comparison.season
            )
        })
    }
}

/// The preceding season's rows, under the same filters as the current ones.
#[derive(Debug)]
pub struct Baseline<'a> {
    pub season: &'a str,
    pub rows: &'a [PerspectiveRow],
}

/// Computes every KPI over `current`, comparing against `baseline` where it has matches. Rates and
/// averages of an empty selection are not compared.
pub fn cards(current: &[PerspectiveRow], baseline: Option<Baseline>) -> [KpiCard; Kpi::COUNT] {
    let tally = Tally::over(current);
    let baseline = baseline
        .filter(|baseline| !baseline.rows.is_empty())
        .map(|baseline| (baseline.season, Tally::over(baseline.rows)));
    [
        Kpi::TotalMatches,
        Kpi::WinRate,
        Kpi::AvgGoalsFor,
        Kpi::AvgGoalsAgainst,
    ]
    .map(|kpi| {
        let value = kpi.read(&tally);
        let comparable = !current.is_empty() || kpi.is_count();
        let comparison = baseline.as_ref().filter(|_| comparable).and_then(|(season, prior)| {
            let previous = kpi.read(prior);
            Delta::between(value, Some(previous)).map(|delta| Comparison {
                season: season.to_string(),
                previous,
                delta,
            })
        });
        KpiCard {
            kpi,
            value,
            n: current.len(),
            comparison,
        }
    })
}
