//! Desirability of two players becoming doubles partners

use crate::config::Constraints;
use crate::pairing::history::History;
use crate::types::Player;
use crate::utils::level_difference;

const BASE_SCORE: f64 = 100.0;
const LEVEL_GAP_WEIGHT: f64 = 5.0;
const COOLDOWN_PENALTY: f64 = 80.0;
const STALE_PARTNER_PENALTY: f64 = 30.0;
const STALE_PARTNER_DECAY: f64 = 5.0;
const MIXED_GENDER_BONUS: f64 = 8.0;
const SAME_GENDER_PENALTY: f64 = 6.0;

/// Score a candidate partnership (higher is better).
///
/// Returns `f64::NEG_INFINITY` when the level gap breaks the doubles hard
/// limit. Partnerships inside the cooldown are penalised heavily but stay
/// legal, so a roster with no alternative can still be paired.
pub fn score(a: &Player, b: &Player, constraints: &Constraints, history: &History) -> f64 {
    let level_gap = level_difference(a.level_or_zero(), b.level_or_zero());

    if constraints.is_doubles()
        && constraints.max_level_diff_per_pair > 0.0
        && level_gap > constraints.max_level_diff_per_pair
    {
        return f64::NEG_INFINITY;
    }

    let mut score = BASE_SCORE;
    score -= LEVEL_GAP_WEIGHT * level_gap;

    if let Some(distance) = history.partner_distance(&a.id, &b.id) {
        if distance <= constraints.partner_cooldown {
            score -= COOLDOWN_PENALTY;
        } else {
            score -= (STALE_PARTNER_PENALTY - STALE_PARTNER_DECAY * distance as f64).max(0.0);
        }
    }

    if constraints.prefer_mixed_gender {
        if let (Some(gender_a), Some(gender_b)) = (a.known_gender(), b.known_gender()) {
            if gender_a != gender_b {
                score += MIXED_GENDER_BONUS;
            } else {
                score -= SAME_GENDER_PENALTY;
            }
        }
    }

    score
}
