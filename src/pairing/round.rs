//! Single entry point that turns a roster into the next round
//!
//! The pairer never fails: infeasible constraints simply produce fewer
//! matches and a longer waiting list.

use crate::config::{Constraints, TeamSize};
use crate::pairing::assembler::assemble;
use crate::pairing::history::build_history;
use crate::pairing::matcher::{assemble_matches, Matchup};
use crate::types::{Attendee, Match, PairingResult, Player, RoundRecord, Team};
use tracing::debug;

/// Build one round of matches for `attendees`.
///
/// Every attendee ends up either on a court or in `waiting`, exactly once.
/// Identical inputs always produce identical output.
pub fn pair_round(
    attendees: &[Attendee],
    constraints: &Constraints,
    prior_rounds: &[RoundRecord],
) -> PairingResult {
    let history = build_history(prior_rounds, constraints.recency_window());
    let candidates: Vec<Player> = attendees.iter().map(|a| a.player.clone()).collect();
    let assembly = assemble(&candidates, constraints, &history);
    let courts = constraints.courts as usize;

    debug!(
        "Assembled {} {} pairs from {} attendees ({} waiting)",
        assembly.pairs.len(),
        constraints.team_size,
        candidates.len(),
        assembly.waiting.len()
    );

    let (matchups, waiting) = match constraints.team_size {
        TeamSize::Singles => {
            let mut matchups = Vec::new();
            let mut waiting = Vec::new();

            for (first, second) in assembly.pairs {
                if matchups.len() < courts {
                    matchups.push(Matchup {
                        team_a: Team::solo(first),
                        team_b: Team::solo(second),
                    });
                } else {
                    waiting.push(first);
                    waiting.push(second);
                }
            }

            waiting.extend(assembly.waiting);
            (matchups, waiting)
        }
        TeamSize::Doubles => {
            let mut assignment = assemble_matches(&assembly.pairs, constraints, &history);
            assignment.matches.truncate(courts);

            let mut waiting = assembly.waiting;
            for (first, second) in assignment.waiting_pairs {
                waiting.push(first);
                waiting.push(second);
            }
            (assignment.matches, waiting)
        }
    };

    let matches: Vec<Match> = matchups
        .into_iter()
        .zip(1..)
        .map(|(matchup, court_no)| Match {
            court_no,
            team_a: matchup.team_a,
            team_b: matchup.team_b,
        })
        .collect();

    debug!(
        "Paired round: {} matches on {} courts, {} waiting",
        matches.len(),
        constraints.courts,
        waiting.len()
    );

    PairingResult { matches, waiting }
}
