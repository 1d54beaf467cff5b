//! # QuizMaster Core Library
//!
//! This library provides the core logic for the QuizMaster trivia quiz
//! application. It owns the quiz session state machine, per-question
//! countdown timing, answer scoring, question normalization, and the
//! durable top-10 leaderboard. Question retrieval, document text
//! extraction, and rendering live in the consuming presentation layer;
//! this crate defines the boundary shapes and validation for them.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::struct_field_names)]

use serde::{Deserialize, Serialize};

pub mod constants;

pub mod leaderboard;
pub mod player;
pub mod question;
pub mod score;
pub mod session;
pub mod sources;
pub mod store;
pub mod timer;

/// Alarm messages for timed events during a quiz
///
/// These messages are scheduled by the session when a question begins
/// and delivered back to it by the event loop when the per-question time
/// limit elapses. Delivery is guarded: the session drops any alarm that
/// no longer matches the question on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmMessage {
    /// The countdown for a specific question ran out
    TimeUp {
        /// Index of the question the countdown was started for
        question_index: usize,
    },
}

/// Any failure the presentation layer can surface to the player
///
/// All external-collaborator failures converge here and are rendered
/// through one user-facing error slot, overwritten by the latest
/// attempt.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From, thiserror::Error)]
pub enum QuizError {
    /// The trivia question source failed
    #[error(transparent)]
    Source(sources::opentdb::SourceError),
    /// The document question generator failed
    #[error(transparent)]
    Generate(sources::generator::GenerateError),
    /// Document text extraction failed
    #[error(transparent)]
    Extract(sources::extract::ExtractError),
    /// The leaderboard could not be persisted
    #[error(transparent)]
    Storage(store::StorageError),
    /// The player name was rejected
    #[error(transparent)]
    Name(player::Error),
}
