//! Per-question countdown timer
//!
//! This module implements the one-shot countdown that bounds how long a
//! player may take on a single question. The countdown is tick-driven:
//! the embedding event loop advances it once per second, independently of
//! any rendering, and the expiry edge fires exactly once. A countdown is
//! scoped to one question only; a fresh one is started with the full
//! duration whenever the question index changes.

use serde::{Deserialize, Serialize};

/// Internal lifecycle of a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum CountdownState {
    /// Counting down, expiry not yet reached
    Running,
    /// Reached zero and fired its expiry edge
    Expired,
    /// Cancelled before expiry; will never fire
    Cancelled,
}

/// A one-shot countdown for a single question
///
/// The countdown decreases monotonically to exactly zero and reports its
/// expiry edge exactly once, unless cancelled first. After cancellation
/// no edge is ever reported, regardless of further ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Countdown {
    /// Seconds left before expiry
    remaining: u64,
    /// Current lifecycle state
    state: CountdownState,
}

impl Countdown {
    /// Starts a countdown with the given duration in whole seconds
    ///
    /// A zero-second countdown expires on its first tick.
    pub fn start(duration_seconds: u64) -> Self {
        Self {
            remaining: duration_seconds,
            state: CountdownState::Running,
        }
    }

    /// Starts a countdown with the standard per-question time limit
    pub fn for_question() -> Self {
        Self::start(crate::constants::session::QUESTION_TIME_LIMIT)
    }

    /// Advances the countdown by one second
    ///
    /// # Returns
    ///
    /// `true` exactly when this tick crosses the expiry edge. Every
    /// other call, including every call after cancellation or after the
    /// edge already fired, returns `false`.
    pub fn tick(&mut self) -> bool {
        if self.state != CountdownState::Running {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.state = CountdownState::Expired;
            return true;
        }
        false
    }

    /// Cancels the countdown, suppressing any future expiry
    ///
    /// Used when the player answers before the time limit, when the
    /// question index changes, and on session reset or teardown.
    /// Cancelling an already-expired countdown has no effect.
    pub fn cancel(&mut self) {
        if self.state == CountdownState::Running {
            self.state = CountdownState::Cancelled;
        }
    }

    /// Returns the seconds remaining for display
    ///
    /// Monotonically decreasing; reads exactly zero once expired.
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining
    }

    /// Whether the countdown is still running
    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    /// Whether the countdown reached zero before being cancelled
    pub fn is_expired(&self) -> bool {
        self.state == CountdownState::Expired
    }
}
