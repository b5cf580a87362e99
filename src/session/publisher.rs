//! Round publishers for committing a chosen pairing

use crate::error::Result;
use crate::session::store::InMemoryRoundHistory;
use crate::types::{PublishedRound, RoundRecord};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Trait for persisting a published round
#[async_trait]
pub trait RoundPublisher: Send + Sync {
    /// Persist `round` as the session's newest round
    async fn publish_round(&self, round: &PublishedRound) -> Result<()>;
}

/// Publishes into an in-memory history so later rounds can see it
#[derive(Debug, Clone)]
pub struct HistoryPublisher {
    history: Arc<InMemoryRoundHistory>,
}

impl HistoryPublisher {
    pub fn new(history: Arc<InMemoryRoundHistory>) -> Self {
        Self { history }
    }
}

#[async_trait]
impl RoundPublisher for HistoryPublisher {
    async fn publish_round(&self, round: &PublishedRound) -> Result<()> {
        self.history.append_round(RoundRecord::from(round))?;
        debug!("Recorded round {} in session history", round.round_index);
        Ok(())
    }
}
