//! Match records and the team-centric rows derived from them.

use std::str::FromStr;

use chrono::NaiveDate;
use ordinalizer::Ordinal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};
use thiserror::Error;

/// Full-time result code of a match, from the home side's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum FullTimeResult {
    #[serde(rename = "H")]
    Home,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "A")]
    Away,
}
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported result code '{0}'")]
pub struct InvalidResultCode(pub String);

impl FromStr for FullTimeResult {
    type Err = InvalidResultCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(FullTimeResult::Home),
            "D" => Ok(FullTimeResult::Draw),
            "A" => Ok(FullTimeResult::Away),
            other => Err(InvalidResultCode(other.to_string())),
        }
    }
}

/// A single fixture, as loaded from the dataset. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub season: String,
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u8,
    pub away_goals: u8,
    pub result: FullTimeResult,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    Ordinal,
    EnumCount,
    EnumIter,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Venue {
    Home,
    Away,
}

/// Thirds of a team's chronologically ordered matches.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Ordinal,
    EnumCount,
    EnumIter,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Period {
    Early,
    Mid,
    Late,
}

/// How a match ended for the team of interest.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Hash,
    PartialEq,
    Eq,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum ResultFilter {
    #[default]
    All,
    Win,
    Draw,
    Loss,
}

/// A match re-expressed from one participant's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerspectiveRow {
    pub date: NaiveDate,
    pub season: String,
    pub team: String,
    pub opponent: String,
    pub venue: Venue,
    pub goals_for: u8,
    pub goals_against: u8,
    pub win: bool,
    pub result: FullTimeResult,
}
impl PerspectiveRow {
    pub fn is_draw(&self) -> bool {
        self.result == FullTimeResult::Draw
    }

    pub fn outcome(&self) -> Outcome {
        if self.win {
            Outcome::Win
        } else if self.is_draw() {
            Outcome::Draw
        } else {
            Outcome::Loss
        }
    }
}
