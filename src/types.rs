//! Common types used throughout the pairing service

use crate::utils::round_to_tenth;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for players
pub type PlayerId = String;

/// Unique identifier for published rounds
pub type RoundId = Uuid;

/// Self-reported gender, used only for the mixed-doubles preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "U")]
    Unknown,
}

impl Gender {
    /// Whether this gender can take part in the mixed-doubles preference
    pub fn is_known(&self) -> bool {
        !matches!(self, Gender::Unknown)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "M"),
            Gender::Female => write!(f, "F"),
            Gender::Unknown => write!(f, "U"),
        }
    }
}

/// A person who can be placed on a court
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level: None,
            gender: None,
        }
    }

    pub fn with_level(mut self, level: f64) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Level if it is a usable number
    pub fn known_level(&self) -> Option<f64> {
        self.level.filter(|level| level.is_finite())
    }

    /// Level used for difference computations; missing levels count as 0
    pub fn level_or_zero(&self) -> f64 {
        self.known_level().unwrap_or(0.0)
    }

    /// Gender if it is known and not `U`
    pub fn known_gender(&self) -> Option<Gender> {
        self.gender.filter(Gender::is_known)
    }
}

/// A roster entry for the current session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    #[serde(flatten)]
    pub player: Player,
    /// Check-in flag; carried through but not consulted by pairing
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Attendee {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            active: true,
        }
    }
}

impl From<Player> for Attendee {
    fn from(player: Player) -> Self {
        Self::new(player)
    }
}

/// One side of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub players: Vec<Player>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_level: Option<f64>,
}

impl Team {
    /// Build a doubles team; the average covers members with a known level
    pub fn from_pair(first: Player, second: Player) -> Self {
        let levels: Vec<f64> = [&first, &second]
            .iter()
            .filter_map(|p| p.known_level())
            .collect();

        let avg_level = if levels.is_empty() {
            None
        } else {
            Some(round_to_tenth(
                levels.iter().sum::<f64>() / levels.len() as f64,
            ))
        };

        Self {
            players: vec![first, second],
            avg_level,
        }
    }

    /// Build a singles "team" of one player
    pub fn solo(player: Player) -> Self {
        Self {
            players: vec![player],
            avg_level: None,
        }
    }

    pub fn player_ids(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.id.as_str()).collect()
    }
}

/// A single court assignment in a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub court_no: u32,
    pub team_a: Team,
    pub team_b: Team,
}

impl Match {
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.team_a.players.iter().chain(self.team_b.players.iter())
    }
}

/// Output of one pairing request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairingResult {
    pub matches: Vec<Match>,
    pub waiting: Vec<Player>,
}

impl PairingResult {
    /// Every player placed on a court, in match order
    pub fn playing(&self) -> impl Iterator<Item = &Player> {
        self.matches.iter().flat_map(Match::players)
    }
}

/// A match as recorded by the round history store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundMatch {
    pub team_a: Vec<Player>,
    pub team_b: Vec<Player>,
}

/// A previously played round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    pub round_index: u32,
    pub matches: Vec<RoundMatch>,
}

/// A pairing result committed as a new round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedRound {
    pub id: RoundId,
    pub round_index: u32,
    pub matches: Vec<Match>,
    pub waiting: Vec<Player>,
    pub created_at: DateTime<Utc>,
}

impl From<&PublishedRound> for RoundRecord {
    fn from(round: &PublishedRound) -> Self {
        Self {
            round_index: round.round_index,
            matches: round
                .matches
                .iter()
                .map(|m| RoundMatch {
                    team_a: m.team_a.players.clone(),
                    team_b: m.team_b.players.clone(),
                })
                .collect(),
        }
    }
}
