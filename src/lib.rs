//! Court Pairing - round pairing engine for social badminton sessions
//!
//! This crate assigns a session's attendees to doubles or singles matches
//! for the next round, balancing skill level, avoiding recently repeated
//! partners and opponents, honoring court capacity and producing a
//! deterministic waiting list.

pub mod config;
pub mod error;
pub mod pairing;
pub mod session;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{PairingError, Result};
pub use types::*;

// Re-export key components
pub use config::{Constraints, TeamSize};
pub use pairing::pair_round;
pub use session::{PairingService, RosterProvider, RoundHistoryStore, RoundPublisher};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
