//! Greedy partner selection
//!
//! Doubles pairs are chosen by scoring every candidate pair, sorting by
//! score and accepting pairs whose members are both still free. Equal
//! scores keep their `(i < j)` enumeration order, which makes the result
//! reproducible for a given roster order. This is deliberately not an
//! optimal matching.

use crate::config::{Constraints, TeamSize};
use crate::pairing::history::History;
use crate::pairing::scorer::score;
use crate::types::Player;
use std::collections::HashSet;
use tracing::trace;

/// Pairs formed from the candidate pool plus everyone left over.
///
/// In doubles a pair is two partners; in singles it is two opponents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assembly {
    pub pairs: Vec<(Player, Player)>,
    pub waiting: Vec<Player>,
}

#[derive(Debug)]
struct ScoredPair {
    first: usize,
    second: usize,
    score: f64,
}

/// Form pairs from `candidates`
pub fn assemble(candidates: &[Player], constraints: &Constraints, history: &History) -> Assembly {
    match constraints.team_size {
        TeamSize::Singles => assemble_singles(candidates),
        TeamSize::Doubles => assemble_doubles(candidates, constraints, history),
    }
}

fn assemble_singles(candidates: &[Player]) -> Assembly {
    let mut chunks = candidates.chunks_exact(2);
    let pairs = chunks
        .by_ref()
        .map(|chunk| (chunk[0].clone(), chunk[1].clone()))
        .collect();

    Assembly {
        pairs,
        waiting: chunks.remainder().to_vec(),
    }
}

fn assemble_doubles(
    candidates: &[Player],
    constraints: &Constraints,
    history: &History,
) -> Assembly {
    let mut scored = Vec::new();
    for (i, a) in candidates.iter().enumerate() {
        for (j, b) in candidates.iter().enumerate().skip(i + 1) {
            let score = score(a, b, constraints, history);
            if score > f64::NEG_INFINITY {
                scored.push(ScoredPair {
                    first: i,
                    second: j,
                    score,
                });
            }
        }
    }

    // Stable sort keeps enumeration order for equal scores
    scored.sort_by(|x, y| y.score.total_cmp(&x.score));

    let mut used: HashSet<&str> = HashSet::new();
    let mut assembly = Assembly::default();

    for pair in &scored {
        let a = &candidates[pair.first];
        let b = &candidates[pair.second];
        if used.contains(a.id.as_str()) || used.contains(b.id.as_str()) {
            continue;
        }

        trace!("Partnering {} with {} (score {:.1})", a.id, b.id, pair.score);
        used.insert(a.id.as_str());
        used.insert(b.id.as_str());
        assembly.pairs.push((a.clone(), b.clone()));
    }

    assembly.waiting = candidates
        .iter()
        .filter(|p| !used.contains(p.id.as_str()))
        .cloned()
        .collect();

    assembly
}
