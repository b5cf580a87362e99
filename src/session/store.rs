//! Round history store interface and an in-memory implementation
//!
//! The pairing engine only reads history; writes go through the
//! publisher, which may append into [`InMemoryRoundHistory`].

use crate::error::{PairingError, Result};
use crate::types::RoundRecord;
use std::sync::{Arc, RwLock};

/// Trait for reading a session's previously played rounds
pub trait RoundHistoryStore: Send + Sync {
    /// All prior rounds of the session, in any order
    fn prior_rounds(&self) -> Result<Vec<RoundRecord>>;

    /// Highest round index recorded so far
    fn last_round_index(&self) -> Result<Option<u32>> {
        Ok(self
            .prior_rounds()?
            .iter()
            .map(|round| round.round_index)
            .max())
    }
}

/// In-memory round history
#[derive(Debug, Default)]
pub struct InMemoryRoundHistory {
    rounds: RwLock<Vec<RoundRecord>>,
}

impl InMemoryRoundHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rounds(rounds: Vec<RoundRecord>) -> Self {
        Self {
            rounds: RwLock::new(rounds),
        }
    }

    /// Record a newly played round
    pub fn append_round(&self, round: RoundRecord) -> Result<()> {
        let mut rounds = self
            .rounds
            .write()
            .map_err(|_| PairingError::InternalError {
                message: "Failed to acquire round history write lock".to_string(),
            })?;

        rounds.push(round);
        Ok(())
    }

    pub fn round_count(&self) -> Result<usize> {
        let rounds = self.rounds.read().map_err(|_| PairingError::InternalError {
            message: "Failed to acquire round history read lock".to_string(),
        })?;

        Ok(rounds.len())
    }
}

impl RoundHistoryStore for InMemoryRoundHistory {
    fn prior_rounds(&self) -> Result<Vec<RoundRecord>> {
        let rounds = self.rounds.read().map_err(|_| PairingError::InternalError {
            message: "Failed to acquire round history read lock".to_string(),
        })?;

        Ok(rounds.clone())
    }
}

/// Prior rounds read from several stores as one history
///
/// Stores are expected to hold disjoint rounds, e.g. the rounds exported
/// with a session snapshot plus the rounds published since.
#[derive(Default)]
pub struct CombinedHistory {
    stores: Vec<Arc<dyn RoundHistoryStore>>,
}

impl CombinedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(mut self, store: Arc<dyn RoundHistoryStore>) -> Self {
        self.stores.push(store);
        self
    }
}

impl RoundHistoryStore for CombinedHistory {
    fn prior_rounds(&self) -> Result<Vec<RoundRecord>> {
        let mut rounds = Vec::new();
        for store in &self.stores {
            rounds.extend(store.prior_rounds()?);
        }
        Ok(rounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_round(index: u32) -> RoundRecord {
        RoundRecord {
            round_index: index,
            matches: vec![],
        }
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryRoundHistory::new();
        assert!(store.prior_rounds().unwrap().is_empty());
        assert_eq!(store.last_round_index().unwrap(), None);
    }

    #[test]
    fn test_append_and_last_index() {
        let store = InMemoryRoundHistory::with_rounds(vec![empty_round(3), empty_round(1)]);
        assert_eq!(store.last_round_index().unwrap(), Some(3));

        store.append_round(empty_round(4)).unwrap();
        assert_eq!(store.round_count().unwrap(), 3);
        assert_eq!(store.last_round_index().unwrap(), Some(4));
    }

    #[test]
    fn test_combined_history_reads_every_store() {
        let exported = Arc::new(InMemoryRoundHistory::with_rounds(vec![
            empty_round(1),
            empty_round(2),
        ]));
        let published = Arc::new(InMemoryRoundHistory::new());
        let combined = CombinedHistory::new()
            .with_store(exported)
            .with_store(published.clone());

        assert_eq!(combined.last_round_index().unwrap(), Some(2));

        published.append_round(empty_round(3)).unwrap();
        assert_eq!(combined.prior_rounds().unwrap().len(), 3);
        assert_eq!(combined.last_round_index().unwrap(), Some(3));
    }
}
