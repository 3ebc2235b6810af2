//! The query pipeline: expand, filter, label and aggregate one team's season.
//!
//! A [Dashboard] holds the loaded [MatchTable] behind an [Arc] and derives a fresh
//! [DashboardView] on every query. Nothing is cached between queries and nothing in the table is
//! ever mutated, so a dashboard may be cloned and queried from any number of threads.

use std::sync::Arc;

use serde::Serialize;
use strum::EnumCount;
use thiserror::Error;
use tracing::debug;

use crate::aggregate::{PeriodSummary, VenueSummary};
use crate::data::MatchTable;
use crate::domain::{Period, ResultFilter, Venue};
use crate::kpi::{Baseline, Kpi, KpiCard};
use crate::period::LabelledRow;
use crate::{aggregate, kpi, period};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub team: String,
    pub season: String,
    pub result: ResultFilter,
}
impl Query {
    pub fn new(team: impl Into<String>, season: impl Into<String>, result: ResultFilter) -> Self {
        Self {
            team: team.into(),
            season: season.into(),
            result,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown team '{0}'")]
    UnknownTeam(String),

    #[error("unknown season '{0}'")]
    UnknownSeason(String),
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    table: Arc<MatchTable>,
}
impl Dashboard {
    pub fn new(table: Arc<MatchTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &MatchTable {
        &self.table
    }

    pub fn query(&self, query: &Query) -> Result<DashboardView, QueryError> {
        if !self.table.contains_team(&query.team) {
            return Err(QueryError::UnknownTeam(query.team.clone()));
        }
        if !self.table.contains_season(&query.season) {
            return Err(QueryError::UnknownSeason(query.season.clone()));
        }

        let rows = query
            .result
            .apply(self.table.perspective(&query.team, &query.season));
        let preceding = self.table.preceding_season(&query.season).map(|season| {
            let rows = query.result.apply(self.table.perspective(&query.team, season));
            (season, rows)
        });
        debug!(
            "{query:?}: {} rows, {} rows in preceding season {:?}",
            rows.len(),
            preceding.as_ref().map_or(0, |(_, rows)| rows.len()),
            preceding.as_ref().map(|(season, _)| season)
        );

        let kpis = kpi::cards(
            &rows,
            preceding
                .as_ref()
                .map(|(season, rows)| Baseline { season, rows }),
        );
        let by_venue = aggregate::by_venue(&rows);
        let matches = period::assign(rows);
        let by_period = aggregate::by_period(&matches);

        Ok(DashboardView {
            query: query.clone(),
            kpis,
            by_venue,
            by_period,
            matches,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub query: Query,
    pub kpis: [KpiCard; Kpi::COUNT],
    pub by_venue: [VenueSummary; Venue::COUNT],
    pub by_period: [PeriodSummary; Period::COUNT],
    /// Filtered rows in date order, labelled by period.
    pub matches: Vec<LabelledRow>,
}
impl DashboardView {
    pub fn kpi(&self, kpi: Kpi) -> &KpiCard {
        &self.kpis[kpi.ordinal()]
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn win_rate_by_venue(&self) -> Chart {
        Chart {
            title: "Win Rate by Venue".into(),
            categories: self.venue_categories(),
            series: vec![Series {
                name: "Win Rate (%)".into(),
                values: self.by_venue.iter().map(|summary| summary.win_rate).collect(),
            }],
        }
    }

    pub fn goals_by_venue(&self) -> Chart {
        Chart {
            title: "Goals by Venue".into(),
            categories: self.venue_categories(),
            series: vec![
                Series {
                    name: "Avg Goals For".into(),
                    values: self.by_venue.iter().map(|summary| summary.avg_goals_for).collect(),
                },
                Series {
                    name: "Avg Goals Against".into(),
                    values: self
                        .by_venue
                        .iter()
                        .map(|summary| summary.avg_goals_against)
                        .collect(),
                },
            ],
        }
    }

    pub fn goals_by_period(&self) -> Chart {
        Chart {
            title: "Goals Scored by Period".into(),
            categories: self
                .by_period
                .iter()
                .map(|summary| summary.period.to_string())
                .collect(),
            series: vec![Series {
                name: "Avg Goals".into(),
                values: self.by_period.iter().map(|summary| summary.avg_goals).collect(),
            }],
        }
    }

    fn venue_categories(&self) -> Vec<String> {
        self.by_venue
            .iter()
            .map(|summary| summary.venue.to_string())
            .collect()
    }
}

/// Categorical series ready for a bar or line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}
