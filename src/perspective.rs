//! Expansion of home/away match records into team-centric [PerspectiveRow]s.

use crate::data::MatchTable;
use crate::domain::{FullTimeResult, MatchRecord, PerspectiveRow, Venue};

impl PerspectiveRow {
    /// Views `record` from `team`'s side of the fixture, or `None` if `team` did not take part.
    pub fn from_match(record: &MatchRecord, team: &str) -> Option<Self> {
        let (venue, opponent, goals_for, goals_against, winning_result) =
            if record.home_team == team {
                (
                    Venue::Home,
                    &record.away_team,
                    record.home_goals,
                    record.away_goals,
                    FullTimeResult::Home,
                )
            } else if record.away_team == team {
                (
                    Venue::Away,
                    &record.home_team,
                    record.away_goals,
                    record.home_goals,
                    FullTimeResult::Away,
                )
            } else {
                return None;
            };

        Some(Self {
            date: record.date,
            season: record.season.clone(),
            team: team.to_string(),
            opponent: opponent.clone(),
            venue,
            goals_for,
            goals_against,
            win: record.result == winning_result,
            result: record.result,
        })
    }
}

/// Expands every match `team` played among `records` into a perspective row, ordered by date.
/// Matches on the same date keep their input order.
pub fn expand<'a>(
    records: impl IntoIterator<Item = &'a MatchRecord>,
    team: &str,
) -> Vec<PerspectiveRow> {
    let mut rows = records
        .into_iter()
        .filter_map(|record| PerspectiveRow::from_match(record, team))
        .collect::<Vec<_>>();
    rows.sort_by_key(|row| row.date);
    rows
}

impl MatchTable {
    /// The perspective rows of `team` in `season`. Empty when the team did not play that season.
    pub fn perspective(&self, team: &str, season: &str) -> Vec<PerspectiveRow> {
        expand(self.season(season), team)
    }
}
