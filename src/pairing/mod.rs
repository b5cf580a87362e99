//! Round pairing engine
//!
//! Turns a roster, the session's prior rounds and the organiser's
//! constraints into one round of court assignments plus a waiting list.
//! Data flows one way:
//!
//! history + roster + constraints -> partner pairs -> matches + waiting
//!
//! Everything here is pure and synchronous; nothing is cached between calls.

pub mod assembler;
pub mod history;
pub mod matcher;
pub mod round;
pub mod scorer;

// Re-export commonly used items
pub use assembler::{assemble, Assembly};
pub use history::{build_history, History};
pub use matcher::{assemble_matches, matchup_cost, Matchup, TeamAssignment};
pub use round::pair_round;
pub use scorer::score;
