//! Loading of match records from a flat CSV file, and the read-only [MatchTable] they are
//! served from.
//!
//! The table is built once and never mutated; queries borrow from it, so a single instance
//! may be shared (typically behind an [Arc](std::sync::Arc)) by any number of readers.

use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, Trim};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{FullTimeResult, InvalidResultCode, MatchRecord};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: unparseable match date '{value}'")]
    Date { row: usize, value: String },

    #[error("row {row}: {source}")]
    Result {
        row: usize,
        source: InvalidResultCode,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawMatch {
    season: String,
    home_team: String,
    away_team: String,
    full_time_result: String,
    match_date: String,
    full_time_home_goals: u8,
    full_time_away_goals: u8,
}
impl RawMatch {
    fn into_record(self, row: usize) -> Result<MatchRecord, LoadError> {
        let date = parse_match_date(&self.match_date).ok_or(LoadError::Date {
            row,
            value: self.match_date,
        })?;
        let result = self
            .full_time_result
            .parse::<FullTimeResult>()
            .map_err(|source| LoadError::Result { row, source })?;
        Ok(MatchRecord {
            season: self.season,
            date,
            home_team: self.home_team,
            away_team: self.away_team,
            home_goals: self.full_time_home_goals,
            away_goals: self.full_time_away_goals,
            result,
        })
    }
}

/// Parses a match date in any of the layouts seen across historical result files:
/// `2000-08-19`, `2000-08-19 15:00:00`, `19/08/2000` and `19/08/00`.
pub fn parse_match_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(datetime.date());
    }
    let year_digits = value.rsplit('/').next().map(str::len)?;
    let format = if year_digits == 2 { "%d/%m/%y" } else { "%d/%m/%Y" };
    NaiveDate::parse_from_str(value, format).ok()
}

#[derive(Debug, Default)]
pub struct MatchTable {
    matches: Vec<MatchRecord>,
    by_season: FxHashMap<String, Vec<usize>>,
    seasons: Vec<String>,
    teams: Vec<String>,
}
impl MatchTable {
    pub fn new(matches: Vec<MatchRecord>) -> Self {
        let mut by_season: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        let mut teams = Vec::with_capacity(64);
        for (index, record) in matches.iter().enumerate() {
            by_season
                .entry(record.season.clone())
                .or_default()
                .push(index);
            teams.push(record.home_team.clone());
            teams.push(record.away_team.clone());
        }
        teams.sort();
        teams.dedup();
        let mut seasons = by_season.keys().cloned().collect::<Vec<_>>();
        seasons.sort();

        Self {
            matches,
            by_season,
            seasons,
            teams,
        }
    }

    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let start_time = Instant::now();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::read_from(file)?;
        info!(
            "loaded {} matches across {} seasons from {} in {:.3}s",
            table.len(),
            table.seasons.len(),
            path.display(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(table)
    }

    pub fn read_from(reader: impl Read) -> Result<Self, LoadError> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let mut matches = vec![];
        for (index, raw) in reader.deserialize::<RawMatch>().enumerate() {
            matches.push(raw?.into_record(index + 1)?);
        }
        debug!("parsed {} match records", matches.len());
        Ok(Self::new(matches))
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Matches of the given season, in load order. Empty for an unknown season.
    pub fn season<'a>(&'a self, season: &str) -> impl Iterator<Item = &'a MatchRecord> + 'a {
        self.by_season
            .get(season)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&index| &self.matches[index])
    }

    /// All season labels, sorted. Lexical order is chronological for `YYYY/YY` labels.
    pub fn seasons(&self) -> &[String] {
        &self.seasons
    }

    /// All team names, sorted.
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn teams_in(&self, season: &str) -> Vec<&str> {
        let mut teams = self
            .season(season)
            .flat_map(|record| [record.home_team.as_str(), record.away_team.as_str()])
            .collect::<Vec<_>>();
        teams.sort_unstable();
        teams.dedup();
        teams
    }

    pub fn contains_team(&self, team: &str) -> bool {
        self.teams
            .binary_search_by(|known| known.as_str().cmp(team))
            .is_ok()
    }

    pub fn contains_season(&self, season: &str) -> bool {
        self.by_season.contains_key(season)
    }

    /// The season immediately before `season` in sorted order, if any.
    pub fn preceding_season(&self, season: &str) -> Option<&str> {
        match self
            .seasons
            .binary_search_by(|known| known.as_str().cmp(season))
        {
            Ok(index) if index > 0 => Some(&self.seasons[index - 1]),
            _ => None,
        }
    }
}
