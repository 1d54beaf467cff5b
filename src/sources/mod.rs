//! External question source boundary
//!
//! The quiz core never performs network or file I/O itself; this module
//! defines the shapes, validation, and failure taxonomy at the boundary
//! to the two external collaborators (the trivia API and the document
//! question generator), plus the guard that serializes requests and
//! drops responses arriving after the player has moved on.

use serde::{Deserialize, Serialize};

pub mod extract;
pub mod generator;
pub mod opentdb;

/// A token identifying one outstanding external request
///
/// Only the response carrying the current token is accepted; retrying or
/// navigating away invalidates every token handed out before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestToken(u64);

/// Serializes external requests and filters out late responses
///
/// One request may be outstanding at a time (the busy guard against
/// duplicate submissions), and a response is only accepted when its
/// token matches the guard's current generation.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RequestGuard {
    generation: u64,
    in_flight: bool,
}

impl RequestGuard {
    /// Creates a guard with no outstanding request
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, refusing while one is outstanding
    ///
    /// # Returns
    ///
    /// The token the eventual response must present, or `None` while a
    /// request is already in flight
    pub fn begin(&mut self) -> Option<RequestToken> {
        if self.in_flight {
            return None;
        }
        self.generation += 1;
        self.in_flight = true;
        Some(RequestToken(self.generation))
    }

    /// Completes a request, accepting only the current token
    ///
    /// # Returns
    ///
    /// `true` if the response belongs to the outstanding request and
    /// should be processed; `false` for late or superseded responses
    pub fn accept(&mut self, token: RequestToken) -> bool {
        if self.in_flight && token.0 == self.generation {
            self.in_flight = false;
            true
        } else {
            false
        }
    }

    /// Invalidates every outstanding token
    ///
    /// Called when the player navigates away or retries; any response
    /// still in flight will be dropped by [`RequestGuard::accept`].
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.in_flight = false;
    }

    /// Whether a request is outstanding
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}
