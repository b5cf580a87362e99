//! Pairing constraints supplied by the session organiser

use crate::error::{PairingError, Result};
use serde::{Deserialize, Serialize};

/// Number of players per side of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TeamSize {
    Singles,
    Doubles,
}

impl TeamSize {
    pub fn players(&self) -> usize {
        match self {
            TeamSize::Singles => 1,
            TeamSize::Doubles => 2,
        }
    }
}

impl TryFrom<u8> for TeamSize {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(TeamSize::Singles),
            2 => Ok(TeamSize::Doubles),
            other => Err(format!("team size must be 1 or 2, got {other}")),
        }
    }
}

impl From<TeamSize> for u8 {
    fn from(size: TeamSize) -> Self {
        match size {
            TeamSize::Singles => 1,
            TeamSize::Doubles => 2,
        }
    }
}

impl std::fmt::Display for TeamSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamSize::Singles => write!(f, "singles"),
            TeamSize::Doubles => write!(f, "doubles"),
        }
    }
}

/// Rules for building one round
///
/// Serialized in camelCase to match session JSON; the snake_case aliases
/// let TOML config files use the same casing in every section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Constraints {
    /// Courts available this round; caps the number of matches
    pub courts: u32,
    #[serde(alias = "team_size")]
    pub team_size: TeamSize,
    /// Rounds during which a repeated partnership is heavily penalised
    #[serde(alias = "partner_cooldown")]
    pub partner_cooldown: u32,
    /// Rounds during which a repeated team matchup is penalised
    #[serde(alias = "opponent_window")]
    pub opponent_window: u32,
    /// Hard cap on the level gap between doubles partners; 0 disables it
    #[serde(alias = "max_level_diff_per_pair")]
    pub max_level_diff_per_pair: f64,
    #[serde(alias = "prefer_mixed_gender")]
    pub prefer_mixed_gender: bool,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            courts: 2,
            team_size: TeamSize::Doubles,
            partner_cooldown: 2,
            opponent_window: 2,
            max_level_diff_per_pair: 0.0,
            prefer_mixed_gender: false,
        }
    }
}

impl Constraints {
    pub fn doubles(courts: u32) -> Self {
        Self {
            courts,
            ..Self::default()
        }
    }

    pub fn singles(courts: u32) -> Self {
        Self {
            courts,
            team_size: TeamSize::Singles,
            ..Self::default()
        }
    }

    pub fn is_doubles(&self) -> bool {
        self.team_size == TeamSize::Doubles
    }

    /// Rounds of history consulted for partner and opponent recency
    pub fn recency_window(&self) -> u32 {
        self.partner_cooldown.max(self.opponent_window).max(3)
    }

    /// Reject values that the engine would silently misinterpret
    pub fn validate(&self) -> Result<()> {
        if !self.max_level_diff_per_pair.is_finite() {
            return Err(PairingError::InvalidConstraints {
                reason: "maxLevelDiffPerPair must be a finite number".to_string(),
            }
            .into());
        }

        if self.max_level_diff_per_pair < 0.0 {
            return Err(PairingError::InvalidConstraints {
                reason: "maxLevelDiffPerPair cannot be negative".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
