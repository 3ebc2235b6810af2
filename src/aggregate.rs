//! Grouped summaries over perspective rows, and season-over-season deltas.
//!
//! Every bucket is always present. A bucket with no rows reports `n = 0` and zero for every
//! metric, never NaN.

use serde::Serialize;
use strum::EnumCount;

use crate::domain::{Period, PerspectiveRow, Venue};
use crate::period::LabelledRow;

/// Running counts behind every rate and average. Means over an empty tally are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Tally {
    pub(crate) n: usize,
    wins: usize,
    goals_for: u32,
    goals_against: u32,
}
impl Tally {
    pub(crate) fn over<'a>(rows: impl IntoIterator<Item = &'a PerspectiveRow>) -> Self {
        let mut tally = Self::default();
        for row in rows {
            tally.add(row);
        }
        tally
    }

    fn add(&mut self, row: &PerspectiveRow) {
        self.n += 1;
        if row.win {
            self.wins += 1;
        }
        self.goals_for += u32::from(row.goals_for);
        self.goals_against += u32::from(row.goals_against);
    }

    fn mean(&self, total: f64) -> f64 {
        if self.n == 0 {
            0.0
        } else {
            total / self.n as f64
        }
    }

    pub(crate) fn win_rate(&self) -> f64 {
        self.mean(self.wins as f64) * 100.0
    }

    pub(crate) fn avg_goals_for(&self) -> f64 {
        self.mean(self.goals_for as f64)
    }

    pub(crate) fn avg_goals_against(&self) -> f64 {
        self.mean(self.goals_against as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueSummary {
    pub venue: Venue,
    pub n: usize,
    pub wins: usize,
    pub win_rate: f64,
    pub avg_goals_for: f64,
    pub avg_goals_against: f64,
}
impl VenueSummary {
    fn from_tally(venue: Venue, tally: &Tally) -> Self {
        Self {
            venue,
            n: tally.n,
            wins: tally.wins,
            win_rate: tally.win_rate(),
            avg_goals_for: tally.avg_goals_for(),
            avg_goals_against: tally.avg_goals_against(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub period: Period,
    pub n: usize,
    /// Mean goals scored.
    pub avg_goals: f64,
    pub avg_goals_against: f64,
    pub win_rate: f64,
}
impl PeriodSummary {
    fn from_tally(period: Period, tally: &Tally) -> Self {
        Self {
            period,
            n: tally.n,
            avg_goals: tally.avg_goals_for(),
            avg_goals_against: tally.avg_goals_against(),
            win_rate: tally.win_rate(),
        }
    }
}

/// Summarises `rows` into a Home and an Away bucket, in that order.
pub fn by_venue<'a>(
    rows: impl IntoIterator<Item = &'a PerspectiveRow>,
) -> [VenueSummary; Venue::COUNT] {
    let mut tallies = [Tally::default(); Venue::COUNT];
    for row in rows {
        tallies[row.venue.ordinal()].add(row);
    }
    [Venue::Home, Venue::Away]
        .map(|venue| VenueSummary::from_tally(venue, &tallies[venue.ordinal()]))
}

/// Summarises period-labelled rows into Early, Mid and Late buckets, in that order.
pub fn by_period(rows: &[LabelledRow]) -> [PeriodSummary; Period::COUNT] {
    let mut tallies = [Tally::default(); Period::COUNT];
    for labelled in rows {
        tallies[labelled.period.ordinal()].add(&labelled.row);
    }
    [Period::Early, Period::Mid, Period::Late]
        .map(|period| PeriodSummary::from_tally(period, &tallies[period.ordinal()]))
}

/// Change of a metric relative to its value in the preceding season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Delta {
    pub absolute: f64,
    pub percent: f64,
}
impl Delta {
    /// `None` when there is nothing to compare against: no preceding value, or a preceding value
    /// of zero.
    pub fn between(current: f64, previous: Option<f64>) -> Option<Self> {
        let previous = previous?;
        if previous == 0.0 {
            return None;
        }
        let absolute = current - previous;
        Some(Self {
            absolute,
            percent: absolute / previous * 100.0,
        })
    }
}
