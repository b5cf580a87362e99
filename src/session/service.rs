//! Pairing service tying the engine to its collaborators
//!
//! The service reads a snapshot of roster and history, runs the pairing
//! engine and, on request, hands the result to a publisher. The engine
//! itself never touches storage.

use crate::config::Constraints;
use crate::error::{PairingError, Result};
use crate::pairing::pair_round;
use crate::session::publisher::RoundPublisher;
use crate::session::roster::RosterProvider;
use crate::session::store::RoundHistoryStore;
use crate::types::{Attendee, PairingResult, PublishedRound};
use crate::utils::{current_timestamp, generate_round_id};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

/// Drop repeated attendee ids, keeping the first occurrence
pub fn dedup_attendees(attendees: Vec<Attendee>) -> Vec<Attendee> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(attendees.len());

    for attendee in attendees {
        if seen.insert(attendee.player.id.clone()) {
            unique.push(attendee);
        } else {
            warn!(
                "Dropping duplicate roster entry for player '{}'",
                attendee.player.id
            );
        }
    }

    unique
}

/// Orchestrates preview and publish of the next round
pub struct PairingService {
    roster: Arc<dyn RosterProvider>,
    history: Arc<dyn RoundHistoryStore>,
    publisher: Arc<dyn RoundPublisher>,
    constraints: Constraints,
}

impl PairingService {
    pub fn new(
        roster: Arc<dyn RosterProvider>,
        history: Arc<dyn RoundHistoryStore>,
        publisher: Arc<dyn RoundPublisher>,
        constraints: Constraints,
    ) -> Self {
        Self {
            roster,
            history,
            publisher,
            constraints,
        }
    }

    /// Compute the next round without committing it
    pub fn preview(&self) -> Result<PairingResult> {
        let attendees = dedup_attendees(self.roster.attendees()?);
        let prior_rounds = self.history.prior_rounds()?;

        let result = pair_round(&attendees, &self.constraints, &prior_rounds);

        info!(
            "Previewed round for {} attendees: {} matches, {} waiting",
            attendees.len(),
            result.matches.len(),
            result.waiting.len()
        );

        Ok(result)
    }

    /// Compute the next round and hand it to the publisher
    pub async fn publish_next_round(&self) -> Result<PublishedRound> {
        let result = self.preview()?;
        let round_index = match self.history.last_round_index()? {
            Some(last) => last.checked_add(1).ok_or_else(|| PairingError::InternalError {
                message: format!("Round index {} has no successor", last),
            })?,
            None => 1,
        };

        let round = PublishedRound {
            id: generate_round_id(),
            round_index,
            matches: result.matches,
            waiting: result.waiting,
            created_at: current_timestamp(),
        };

        self.publisher.publish_round(&round).await?;

        info!("Published round {} ({})", round.round_index, round.id);
        Ok(round)
    }
}
