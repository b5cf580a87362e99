//! Utility functions for the pairing service

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique round ID
pub fn generate_round_id() -> Uuid {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Round to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Absolute difference between two levels
pub fn level_difference(level1: f64, level2: f64) -> f64 {
    (level1 - level2).abs()
}

/// Order-independent key for two players
///
/// Keys hold the ids themselves rather than a joined string, so ids may
/// contain any characters without two different pairs colliding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey(String, String);

/// Sorted member ids of a team
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamKey(Vec<String>);

/// Order-independent key for two teams facing each other
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchupKey(TeamKey, TeamKey);

pub fn pair_key(a: &str, b: &str) -> PairKey {
    if a <= b {
        PairKey(a.to_string(), b.to_string())
    } else {
        PairKey(b.to_string(), a.to_string())
    }
}

pub fn team_key<'a>(ids: impl IntoIterator<Item = &'a str>) -> TeamKey {
    let mut ids: Vec<String> = ids.into_iter().map(str::to_string).collect();
    ids.sort_unstable();
    TeamKey(ids)
}

pub fn matchup_key(team_a: &TeamKey, team_b: &TeamKey) -> MatchupKey {
    if team_a <= team_b {
        MatchupKey(team_a.clone(), team_b.clone())
    } else {
        MatchupKey(team_b.clone(), team_a.clone())
    }
}
