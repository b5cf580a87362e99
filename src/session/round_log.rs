//! JSON-lines round log
//!
//! Each line of the log is one [`PublishedRound`]. The log is both a
//! publish target and a history store, so a round appended by one run is
//! prior history for the next.

use crate::error::{PairingError, Result};
use crate::session::publisher::RoundPublisher;
use crate::session::store::RoundHistoryStore;
use crate::types::{PublishedRound, RoundRecord};
use async_trait::async_trait;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Append-only log of published rounds
#[derive(Debug, Clone)]
pub struct JsonLinesRoundLog {
    path: PathBuf,
}

impl JsonLinesRoundLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, message: String) -> PairingError {
        PairingError::RoundLogReadFailed {
            path: self.path.display().to_string(),
            message,
        }
    }

    /// Read every logged round; a log that does not exist yet is empty
    pub fn read_rounds(&self) -> Result<Vec<PublishedRound>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|e| self.read_error(e.to_string()))?;
        let mut rounds = Vec::new();

        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.read_error(e.to_string()))?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(round) => rounds.push(round),
                Err(e) => warn!(
                    "Skipping unreadable line {} in {}: {}",
                    line_num + 1,
                    self.path.display(),
                    e
                ),
            }
        }

        debug!("Read {} rounds from {}", rounds.len(), self.path.display());
        Ok(rounds)
    }
}

impl RoundHistoryStore for JsonLinesRoundLog {
    fn prior_rounds(&self) -> Result<Vec<RoundRecord>> {
        Ok(self
            .read_rounds()?
            .iter()
            .map(RoundRecord::from)
            .collect())
    }
}

#[async_trait]
impl RoundPublisher for JsonLinesRoundLog {
    async fn publish_round(&self, round: &PublishedRound) -> Result<()> {
        let publish_error = |message: String| PairingError::PublishFailed {
            round_index: round.round_index,
            message,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| publish_error(e.to_string()))?;
        }

        let mut line = serde_json::to_string(round).map_err(|e| publish_error(e.to_string()))?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| publish_error(e.to_string()))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| publish_error(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| publish_error(e.to_string()))?;

        info!(
            "Published round {} ({} matches) to {}",
            round.round_index,
            round.matches.len(),
            self.path.display()
        );
        Ok(())
    }
}
