//! Session plumbing around the pairing engine
//!
//! This module defines the collaborator interfaces the engine is fed
//! from (roster provider, round history store) and written out through
//! (round publisher), with in-memory and file-backed implementations.

pub mod publisher;
pub mod roster;
pub mod round_log;
pub mod service;
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use publisher::{HistoryPublisher, RoundPublisher};
pub use roster::{RosterProvider, StaticRoster};
pub use round_log::JsonLinesRoundLog;
pub use service::{dedup_attendees, PairingService};
pub use snapshot::SessionSnapshot;
pub use store::{CombinedHistory, InMemoryRoundHistory, RoundHistoryStore};
