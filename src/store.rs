//! Durable key-value storage seam
//!
//! This module defines the trait the leaderboard persists through. The
//! abstraction mirrors the host environment's storage surface (a flat
//! string-keyed byte store that may be cleared at any time), allowing
//! different backings while keeping the leaderboard testable against the
//! in-memory implementation.

use std::collections::HashMap;

use thiserror::Error;

/// Errors surfaced by a storage backing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store rejected the write or is not reachable
    #[error("storage unavailable")]
    Unavailable,
}

/// A minimal durable key-value store
///
/// Implementations might wrap browser local storage, a file, or a
/// database row. Reads are infallible by design: a backing that cannot
/// read behaves as if the key were absent.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Writes `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// [`StorageError::Unavailable`] when the backing cannot persist the
    /// value; the previous value is left in an unspecified state.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Removes the value stored under `key`, if any
    fn delete(&mut self, key: &str);
}

/// An in-memory store used in tests and as a non-durable fallback
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
