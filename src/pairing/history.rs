//! Recency lookups derived from previously played rounds
//!
//! Distances count back from the latest supplied round: 1 is the most
//! recent round, 2 the one before it, and so on. Partner and opponent
//! recency only covers rounds inside the look-back window, while the
//! last-played index covers every supplied round.

use crate::types::{PlayerId, RoundRecord};
use crate::utils::{matchup_key, pair_key, team_key, MatchupKey, PairKey, TeamKey};
use std::collections::HashMap;
use tracing::trace;

/// Immutable snapshot of who recently played with and against whom
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    recent_pairs: HashMap<PairKey, u32>,
    recent_opponents: HashMap<MatchupKey, u32>,
    last_played_round: HashMap<PlayerId, u32>,
}

impl History {
    /// Rounds since two players were partners, if inside the window
    pub fn partner_distance(&self, a: &str, b: &str) -> Option<u32> {
        self.recent_pairs.get(&pair_key(a, b)).copied()
    }

    /// Rounds since two teams faced each other, if inside the window
    pub fn opponent_distance(&self, team_a: &TeamKey, team_b: &TeamKey) -> Option<u32> {
        self.recent_opponents
            .get(&matchup_key(team_a, team_b))
            .copied()
    }

    /// Most recent round index a player appeared in
    pub fn last_played_round(&self, player_id: &str) -> Option<u32> {
        self.last_played_round.get(player_id).copied()
    }
}

fn record_min<K: std::hash::Hash + Eq>(map: &mut HashMap<K, u32>, key: K, distance: u32) {
    map.entry(key)
        .and_modify(|existing| *existing = (*existing).min(distance))
        .or_insert(distance);
}

/// Build recency lookups from prior rounds given in any order
pub fn build_history(prior_rounds: &[RoundRecord], recency_window: u32) -> History {
    let last_index = prior_rounds
        .iter()
        .map(|round| round.round_index)
        .max()
        .unwrap_or(0);
    // Widened so the largest round index still has a successor
    let start_index = (u64::from(last_index) + 1).saturating_sub(u64::from(recency_window));

    let mut history = History::default();

    for round in prior_rounds {
        let distance = (last_index - round.round_index).saturating_add(1);
        let in_window = u64::from(round.round_index) >= start_index;

        for round_match in &round.matches {
            for player in round_match.team_a.iter().chain(round_match.team_b.iter()) {
                history
                    .last_played_round
                    .entry(player.id.clone())
                    .and_modify(|last| *last = (*last).max(round.round_index))
                    .or_insert(round.round_index);
            }

            if !in_window {
                continue;
            }

            for team in [&round_match.team_a, &round_match.team_b] {
                for (i, first) in team.iter().enumerate() {
                    for second in &team[i + 1..] {
                        record_min(
                            &mut history.recent_pairs,
                            pair_key(&first.id, &second.id),
                            distance,
                        );
                    }
                }
            }

            if !round_match.team_a.is_empty() && !round_match.team_b.is_empty() {
                let key_a = team_key(round_match.team_a.iter().map(|p| p.id.as_str()));
                let key_b = team_key(round_match.team_b.iter().map(|p| p.id.as_str()));
                record_min(
                    &mut history.recent_opponents,
                    matchup_key(&key_a, &key_b),
                    distance,
                );
            }
        }
    }

    trace!(
        "Built history from {} rounds (last index {}, window start {}): {} partner pairs, {} matchups",
        prior_rounds.len(),
        last_index,
        start_index,
        history.recent_pairs.len(),
        history.recent_opponents.len()
    );

    history
}
