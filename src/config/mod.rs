//! Configuration management for the court-pairing service
//!
//! This module handles configuration loading from environment variables
//! and TOML files, validation, and default values.

pub mod app;
pub mod pairing;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings, StorageSettings};
pub use pairing::{Constraints, TeamSize};
