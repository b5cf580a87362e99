//! Test fixtures and mock implementations for integration testing

#![allow(dead_code)]

use async_trait::async_trait;
use court_pairing::error::Result;
use court_pairing::session::RoundPublisher;
use court_pairing::types::{Attendee, Gender, Player, PublishedRound, RoundMatch, RoundRecord};
use std::sync::{Arc, Mutex};

/// Publisher that captures published rounds for assertions
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    published: Arc<Mutex<Vec<PublishedRound>>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all published rounds (for testing)
    pub fn published_rounds(&self) -> Vec<PublishedRound> {
        self.published
            .lock()
            .map(|rounds| rounds.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RoundPublisher for RecordingPublisher {
    async fn publish_round(&self, round: &PublishedRound) -> Result<()> {
        if let Ok(mut rounds) = self.published.lock() {
            rounds.push(round.clone());
        }
        Ok(())
    }
}

pub fn player(id: &str, level: f64) -> Player {
    Player::new(id, format!("Player {id}")).with_level(level)
}

pub fn attendee(id: &str, level: f64) -> Attendee {
    Attendee::new(player(id, level))
}

pub fn gendered_attendee(id: &str, level: f64, gender: Gender) -> Attendee {
    Attendee::new(player(id, level).with_gender(gender))
}

/// A typical club night: mixed levels and genders, some unrated
pub fn club_night_roster() -> Vec<Attendee> {
    vec![
        gendered_attendee("amy", 6.0, Gender::Female),
        gendered_attendee("ben", 5.5, Gender::Male),
        gendered_attendee("cara", 3.0, Gender::Female),
        gendered_attendee("dev", 3.5, Gender::Male),
        gendered_attendee("eli", 7.0, Gender::Male),
        gendered_attendee("fay", 6.5, Gender::Female),
        Attendee::new(Player::new("gus", "Gus")),
        gendered_attendee("hana", 4.0, Gender::Unknown),
        gendered_attendee("ivan", 4.5, Gender::Male),
        gendered_attendee("jo", 2.5, Gender::Female),
        gendered_attendee("kai", 5.0, Gender::Male),
    ]
}

/// Doubles round record from four attendees: (a, b) vs (c, d)
pub fn doubles_round(index: u32, a: &Attendee, b: &Attendee, c: &Attendee, d: &Attendee) -> RoundRecord {
    RoundRecord {
        round_index: index,
        matches: vec![RoundMatch {
            team_a: vec![a.player.clone(), b.player.clone()],
            team_b: vec![c.player.clone(), d.player.clone()],
        }],
    }
}

/// Sorted ids of every player placed anywhere in a result
pub fn all_ids(result: &court_pairing::PairingResult) -> Vec<String> {
    let mut ids: Vec<String> = result
        .playing()
        .chain(result.waiting.iter())
        .map(|p| p.id.clone())
        .collect();
    ids.sort();
    ids
}
