//! Testing helpers.

use assert_float_eq::*;
use chrono::{Days, NaiveDate};
use tinyrand::{Rand, StdRand};

use crate::data::{parse_match_date, MatchTable};
use crate::domain::{FullTimeResult, MatchRecord, PerspectiveRow, Venue};

const SEASON_1999: [&str; 20] = [
    "Arsenal", "Aston Villa", "Bradford", "Chelsea", "Coventry", "Derby", "Everton", "Leeds",
    "Leicester", "Liverpool", "Man United", "Middlesbrough", "Newcastle", "Sheffield Weds",
    "Southampton", "Sunderland", "Tottenham", "Watford", "West Ham", "Wimbledon",
];

const SEASON_2000: [&str; 20] = [
    "Arsenal", "Aston Villa", "Bradford", "Charlton", "Chelsea", "Coventry", "Derby", "Everton",
    "Ipswich", "Leeds", "Leicester", "Liverpool", "Man City", "Man United", "Middlesbrough",
    "Newcastle", "Southampton", "Sunderland", "Tottenham", "West Ham",
];

const SEASON_2001: [&str; 20] = [
    "Arsenal", "Aston Villa", "Blackburn", "Bolton", "Charlton", "Chelsea", "Derby", "Everton",
    "Fulham", "Ipswich", "Leeds", "Leicester", "Liverpool", "Man United", "Middlesbrough",
    "Newcastle", "Southampton", "Sunderland", "Tottenham", "West Ham",
];

pub fn record(
    season: &str,
    date: &str,
    home_team: &str,
    away_team: &str,
    home_goals: u8,
    away_goals: u8,
) -> MatchRecord {
    let result = match home_goals.cmp(&away_goals) {
        std::cmp::Ordering::Greater => FullTimeResult::Home,
        std::cmp::Ordering::Equal => FullTimeResult::Draw,
        std::cmp::Ordering::Less => FullTimeResult::Away,
    };
    MatchRecord {
        season: season.into(),
        date: parse_match_date(date).unwrap_or_else(|| panic!("bad fixture date {date}")),
        home_team: home_team.into(),
        away_team: away_team.into(),
        home_goals,
        away_goals,
        result,
    }
}

/// A row for `team` dated `day` days into the 2000/01 season.
pub fn row(day: u64, venue: Venue, goals_for: u8, goals_against: u8) -> PerspectiveRow {
    let result = match (venue, goals_for.cmp(&goals_against)) {
        (_, std::cmp::Ordering::Equal) => FullTimeResult::Draw,
        (Venue::Home, std::cmp::Ordering::Greater) | (Venue::Away, std::cmp::Ordering::Less) => {
            FullTimeResult::Home
        }
        _ => FullTimeResult::Away,
    };
    PerspectiveRow {
        date: season_start(2000).checked_add_days(Days::new(day)).unwrap(),
        season: "2000/01".into(),
        team: "Arsenal".into(),
        opponent: "Opponent".into(),
        venue,
        goals_for,
        goals_against,
        win: goals_for > goals_against,
        result,
    }
}

/// `len` rows on consecutive days, alternating venues, scoring the row's index.
pub fn rows(len: usize) -> Vec<PerspectiveRow> {
    (0..len)
        .map(|index| {
            let venue = if index % 2 == 0 { Venue::Home } else { Venue::Away };
            row(index as u64, venue, index as u8, 1)
        })
        .collect()
}

fn season_start(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 8, 19).unwrap()
}

/// A double round-robin season: every team hosts every other team exactly once, one round per week.
pub fn round_robin(
    season: &str,
    start: NaiveDate,
    teams: &[&str],
    rand: &mut impl Rand,
) -> Vec<MatchRecord> {
    assert!(teams.len() % 2 == 0, "an even number of teams is required");
    let n = teams.len();
    let rounds = n - 1;
    let mut order = (0..n).collect::<Vec<_>>();
    let mut legs = Vec::with_capacity(n / 2 * rounds);
    for round in 0..rounds {
        for k in 0..n / 2 {
            let (a, b) = (order[k], order[n - 1 - k]);
            let (home, away) = if round % 2 == 0 { (a, b) } else { (b, a) };
            legs.push((round, home, away));
        }
        order[1..].rotate_right(1);
    }

    let mut goals = || (rand.next_u64() % 4) as u8;
    let mut matches = Vec::with_capacity(legs.len() * 2);
    for (leg, swap) in [(0, false), (rounds, true)] {
        for &(round, home, away) in &legs {
            let (home, away) = if swap { (away, home) } else { (home, away) };
            let date = start
                .checked_add_days(Days::new(7 * (leg + round) as u64))
                .unwrap();
            let (home_goals, away_goals) = (goals(), goals());
            matches.push(record(
                season,
                &date.format("%Y-%m-%d").to_string(),
                teams[home],
                teams[away],
                home_goals,
                away_goals,
            ));
        }
    }
    matches
}

/// Three seasons of 20 teams each; Arsenal plays 38 matches (19 home, 19 away) in every season.
pub fn fixture() -> MatchTable {
    let mut rand = StdRand::default();
    let mut matches = round_robin("1999/00", season_start(1999), &SEASON_1999, &mut rand);
    matches.extend(round_robin("2000/01", season_start(2000), &SEASON_2000, &mut rand));
    matches.extend(round_robin("2001/02", season_start(2001), &SEASON_2001, &mut rand));
    MatchTable::new(matches)
}

pub fn assert_f64_near(expected: f64, actual: f64) {
    assert_float_absolute_eq!(expected, actual, 1e-9);
}

#[test]
fn round_robin_is_balanced() {
    let table = fixture();
    assert_eq!(3 * 380, table.len());
    for season in table.seasons() {
        for team in table.teams_in(season) {
            let home = table.season(season).filter(|r| r.home_team == team).count();
            let away = table.season(season).filter(|r| r.away_team == team).count();
            assert_eq!((19, 19), (home, away), "{team} in {season}");
        }
    }
}
