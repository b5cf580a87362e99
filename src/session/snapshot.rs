//! Session snapshot files
//!
//! A snapshot is a JSON document holding the current roster and the
//! rounds already played, as exported by the club app:
//!
//! ```json
//! {
//!   "attendees": [{ "id": "p1", "name": "Pat", "level": 4.5, "gender": "F" }],
//!   "rounds": [{ "roundIndex": 1, "matches": [{ "teamA": [...], "teamB": [...] }] }]
//! }
//! ```

use crate::error::{PairingError, Result};
use crate::session::roster::RosterProvider;
use crate::session::store::RoundHistoryStore;
use crate::types::{Attendee, RoundRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Consistent view of one session's roster and history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub attendees: Vec<Attendee>,
    #[serde(default)]
    pub rounds: Vec<RoundRecord>,
}

impl SessionSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| PairingError::SnapshotLoadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let snapshot: Self =
            serde_json::from_str(&contents).map_err(|e| PairingError::SnapshotLoadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        info!(
            "Loaded session snapshot from {}: {} attendees, {} prior rounds",
            path.display(),
            snapshot.attendees.len(),
            snapshot.rounds.len()
        );

        Ok(snapshot)
    }
}

impl RosterProvider for SessionSnapshot {
    fn attendees(&self) -> Result<Vec<Attendee>> {
        Ok(self.attendees.clone())
    }
}

impl RoundHistoryStore for SessionSnapshot {
    fn prior_rounds(&self) -> Result<Vec<RoundRecord>> {
        Ok(self.rounds.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "attendees": [
            { "id": "p1", "name": "Pat", "level": 4.5, "gender": "F" },
            { "id": "p2", "name": "Sam", "active": false },
            { "id": "p3", "name": "Lee", "gender": "U" }
        ],
        "rounds": [
            {
                "roundIndex": 2,
                "matches": [
                    { "teamA": [{ "id": "p1", "name": "Pat" }], "teamB": [{ "id": "p3", "name": "Lee" }] }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_snapshot() {
        let snapshot = SessionSnapshot::from_json(SNAPSHOT).unwrap();

        assert_eq!(snapshot.attendees.len(), 3);
        assert!(!snapshot.attendees[1].active);
        assert_eq!(snapshot.attendees[1].player.level, None);
        assert_eq!(snapshot.rounds[0].round_index, 2);
        assert_eq!(snapshot.last_round_index().unwrap(), Some(2));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let snapshot = SessionSnapshot::from_json("{}").unwrap();
        assert_eq!(snapshot, SessionSnapshot::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let snapshot = SessionSnapshot::load(file.path()).unwrap();
        assert_eq!(snapshot.attendees().unwrap().len(), 3);
        assert_eq!(snapshot.prior_rounds().unwrap().len(), 1);
    }

    #[test]
    fn test_load_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = SessionSnapshot::load(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PairingError>(),
            Some(PairingError::SnapshotLoadFailed { .. })
        ));
    }
}
