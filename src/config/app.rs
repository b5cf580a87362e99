//! Main application configuration
//!
//! This module defines the primary configuration structures for the
//! court-pairing service, including environment variable and TOML loading
//! and validation.

use crate::config::pairing::{Constraints, TeamSize};
use crate::error::{PairingError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub pairing: Constraints,
    pub storage: StorageSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Where published rounds are written
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// JSON-lines round log; publishing is disabled when unset
    pub round_log_path: Option<PathBuf>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "court-pairing".to_string(),
            log_level: "info".to_string(),
        }
    }
}

fn config_error(message: String) -> PairingError {
    PairingError::ConfigurationError { message }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    Ok(value
        .parse()
        .map_err(|_| config_error(format!("Invalid {} value: {}", name, value)))?)
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; missing sections use defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Pairing settings
        if let Ok(courts) = env::var("PAIRING_COURTS") {
            self.pairing.courts = parse_env("PAIRING_COURTS", &courts)?;
        }
        if let Ok(team_size) = env::var("PAIRING_TEAM_SIZE") {
            let size: u8 = parse_env("PAIRING_TEAM_SIZE", &team_size)?;
            self.pairing.team_size = TeamSize::try_from(size)
                .map_err(|e| config_error(format!("Invalid PAIRING_TEAM_SIZE value: {}", e)))?;
        }
        if let Ok(cooldown) = env::var("PAIRING_PARTNER_COOLDOWN") {
            self.pairing.partner_cooldown = parse_env("PAIRING_PARTNER_COOLDOWN", &cooldown)?;
        }
        if let Ok(window) = env::var("PAIRING_OPPONENT_WINDOW") {
            self.pairing.opponent_window = parse_env("PAIRING_OPPONENT_WINDOW", &window)?;
        }
        if let Ok(diff) = env::var("PAIRING_MAX_LEVEL_DIFF") {
            self.pairing.max_level_diff_per_pair = parse_env("PAIRING_MAX_LEVEL_DIFF", &diff)?;
        }
        if let Ok(mixed) = env::var("PAIRING_PREFER_MIXED_GENDER") {
            self.pairing.prefer_mixed_gender = parse_env("PAIRING_PREFER_MIXED_GENDER", &mixed)?;
        }

        // Storage settings
        if let Ok(path) = env::var("ROUND_LOG_PATH") {
            self.storage.round_log_path = Some(PathBuf::from(path));
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => {
            return Err(
                config_error(format!("Invalid log level: {}", config.service.log_level)).into(),
            )
        }
    }

    if config.service.name.is_empty() {
        return Err(config_error("Service name cannot be empty".to_string()).into());
    }

    config.pairing.validate()?;

    Ok(())
}
