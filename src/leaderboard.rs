//! Durable top-10 leaderboard
//!
//! This module persists finished quiz results through the key-value seam
//! in [`crate::store`]. The collection is rewritten wholesale on every
//! record: the new entry is appended, the whole board re-sorted by score
//! descending with faster times breaking ties, truncated to the best ten,
//! and written back. Reads treat missing or unparseable data as an empty
//! board.

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    constants::leaderboard::{MAX_ENTRIES, STORAGE_KEY},
    question::Difficulty,
    store::{KeyValueStore, StorageError},
};

/// A persisted quiz result, immutable once written
///
/// Serialized field names match the storage layout used by the
/// presentation layer, with the completion date as an ISO-8601 string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Name of the player who completed the quiz
    #[serde(rename = "playerName")]
    pub player_name: String,
    /// Points scored
    pub score: u32,
    /// Number of questions played
    pub total: u32,
    /// Category label the quiz was played under
    #[serde(rename = "categoryName")]
    pub category_name: String,
    /// Difficulty the quiz was played at
    pub difficulty: Difficulty,
    /// Whole seconds the quiz took
    #[serde(rename = "timeTaken")]
    pub time_taken: u64,
    /// When the quiz completed
    #[serde(rename = "date")]
    pub date: DateTime<Utc>,
}

/// Result of recording an entry
///
/// The ranked standings are always computed, even when persistence
/// failed; the storage outcome is reported alongside so callers can
/// surface the failure without losing the in-memory result.
#[derive(Debug)]
pub struct RecordOutcome {
    /// The ranked top entries including the new one, best first
    pub standings: Vec<LeaderboardEntry>,
    /// Whether the standings were durably written
    pub storage: Result<(), StorageError>,
}

/// The durable top-10 leaderboard over a key-value backing
#[derive(Debug, Default)]
pub struct Leaderboard<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Leaderboard<S> {
    /// Creates a leaderboard over the given backing store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the persisted standings, best first
    ///
    /// Missing or corrupt data reads as an empty board rather than an
    /// error; the player can always see a leaderboard.
    pub fn list(&self) -> Vec<LeaderboardEntry> {
        let Some(bytes) = self.store.get(STORAGE_KEY) else {
            return Vec::new();
        };
        match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("discarding unparseable leaderboard data: {err}");
                Vec::new()
            }
        }
    }

    /// Records a finished quiz and returns the updated standings
    ///
    /// The entry is appended, the board re-sorted by score descending
    /// with ties broken by the faster time, truncated to the ten best
    /// entries, and persisted. A persistence failure does not discard
    /// the computed standings; it is reported in the outcome instead.
    pub fn record(&mut self, entry: LeaderboardEntry) -> RecordOutcome {
        let standings = self
            .list()
            .into_iter()
            .chain(std::iter::once(entry))
            .sorted_by(|a, b| {
                b.score
                    .cmp(&a.score)
                    .then_with(|| a.time_taken.cmp(&b.time_taken))
            })
            .take(MAX_ENTRIES)
            .collect_vec();

        let storage = match serde_json::to_vec(&standings) {
            Ok(bytes) => self.store.set(STORAGE_KEY, &bytes),
            Err(_) => Err(StorageError::Unavailable),
        };
        if let Err(err) = &storage {
            log::warn!("leaderboard not persisted: {err}");
        }

        RecordOutcome { standings, storage }
    }

    /// Removes the persisted board entirely
    ///
    /// A subsequent [`Leaderboard::list`] returns an empty board.
    pub fn clear(&mut self) {
        self.store.delete(STORAGE_KEY);
    }
}
