//! Roster provider interface and a fixed-list implementation

use crate::error::Result;
use crate::types::Attendee;

/// Supplies the attendees checked in to the current session
pub trait RosterProvider: Send + Sync {
    /// Attendees in the order the organiser listed them
    fn attendees(&self) -> Result<Vec<Attendee>>;
}

/// Roster fixed at construction time
#[derive(Debug, Clone, Default)]
pub struct StaticRoster {
    attendees: Vec<Attendee>,
}

impl StaticRoster {
    pub fn new(attendees: Vec<Attendee>) -> Self {
        Self { attendees }
    }
}

impl RosterProvider for StaticRoster {
    fn attendees(&self) -> Result<Vec<Attendee>> {
        Ok(self.attendees.clone())
    }
}
