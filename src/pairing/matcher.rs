//! Greedy matching of doubles teams onto courts

use crate::config::Constraints;
use crate::pairing::history::History;
use crate::types::{Player, Team};
use crate::utils::{level_difference, team_key};
use std::collections::HashSet;
use tracing::trace;

const REPEAT_MATCHUP_WEIGHT: f64 = 10.0;

/// Two teams facing each other, before a court is assigned
#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    pub team_a: Team,
    pub team_b: Team,
}

/// Matchups that fit on the available courts plus unmatched pairs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamAssignment {
    pub matches: Vec<Matchup>,
    pub waiting_pairs: Vec<(Player, Player)>,
}

#[derive(Debug)]
struct Edge {
    first: usize,
    second: usize,
    cost: f64,
}

/// Penalty for a matchup that was played within the opponent window
fn opponent_penalty(
    team_a: &Team,
    team_b: &Team,
    constraints: &Constraints,
    history: &History,
) -> f64 {
    let key_a = team_key(team_a.player_ids());
    let key_b = team_key(team_b.player_ids());

    match history.opponent_distance(&key_a, &key_b) {
        Some(distance) if distance <= constraints.opponent_window => {
            REPEAT_MATCHUP_WEIGHT * f64::from(constraints.opponent_window - distance + 1)
        }
        _ => 0.0,
    }
}

/// Cost of putting two teams on the same court (lower is better)
pub fn matchup_cost(
    team_a: &Team,
    team_b: &Team,
    constraints: &Constraints,
    history: &History,
) -> f64 {
    let level_gap = level_difference(
        team_a.avg_level.unwrap_or(0.0),
        team_b.avg_level.unwrap_or(0.0),
    );
    level_gap + opponent_penalty(team_a, team_b, constraints, history)
}

/// Match partner pairs against each other, at most one match per court
pub fn assemble_matches(
    pairs: &[(Player, Player)],
    constraints: &Constraints,
    history: &History,
) -> TeamAssignment {
    let teams: Vec<Team> = pairs
        .iter()
        .map(|(a, b)| Team::from_pair(a.clone(), b.clone()))
        .collect();

    let mut edges = Vec::new();
    for i in 0..teams.len() {
        for j in i + 1..teams.len() {
            edges.push(Edge {
                first: i,
                second: j,
                cost: matchup_cost(&teams[i], &teams[j], constraints, history),
            });
        }
    }

    // Stable sort keeps enumeration order for equal costs
    edges.sort_by(|x, y| x.cost.total_cmp(&y.cost));

    let courts = constraints.courts as usize;
    let mut used: HashSet<usize> = HashSet::new();
    let mut assignment = TeamAssignment::default();

    for edge in &edges {
        if assignment.matches.len() >= courts {
            break;
        }
        if used.contains(&edge.first) || used.contains(&edge.second) {
            continue;
        }

        trace!(
            "Matching team {} against team {} (cost {:.1})",
            edge.first,
            edge.second,
            edge.cost
        );
        used.insert(edge.first);
        used.insert(edge.second);
        assignment.matches.push(Matchup {
            team_a: teams[edge.first].clone(),
            team_b: teams[edge.second].clone(),
        });
    }

    assignment.waiting_pairs = pairs
        .iter()
        .enumerate()
        .filter(|(index, _)| !used.contains(index))
        .map(|(_, pair)| pair.clone())
        .collect();

    assignment
}
