//! Error types for the pairing service
//!
//! The pairing engine itself never fails; these errors cover the layers
//! around it (configuration, session snapshots, publishing).

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific pairing scenarios
#[derive(Debug, thiserror::Error)]
pub enum PairingError {
    #[error("Invalid constraints: {reason}")]
    InvalidConstraints { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Failed to load session snapshot {path}: {message}")]
    SnapshotLoadFailed { path: String, message: String },

    #[error("Failed to read round log {path}: {message}")]
    RoundLogReadFailed { path: String, message: String },

    #[error("Failed to publish round {round_index}: {message}")]
    PublishFailed { round_index: u32, message: String },

    #[error("Internal service error: {message}")]
    InternalError { message: String },
}
