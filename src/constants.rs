//! Configuration constants for the quiz system
//!
//! This module contains all the configuration limits and constraints
//! used throughout the quiz core to ensure data integrity and
//! provide consistent boundaries for different components.

/// Quiz session configuration constants
pub mod session {
    /// Number of seconds a player has to answer each question
    pub const QUESTION_TIME_LIMIT: u64 = 30;
    /// Minimum number of questions in a quiz
    pub const MIN_QUESTION_COUNT: usize = 1;
    /// Maximum number of questions the question source can supply per request
    pub const MAX_QUESTION_COUNT: usize = 50;
    /// Default number of questions when the player does not choose
    pub const DEFAULT_QUESTION_COUNT: usize = 10;
}

/// Question shape constants
pub mod question {
    /// Number of incorrect answers every raw question must carry
    pub const INCORRECT_ANSWER_COUNT: usize = 3;
    /// Number of options a playable question presents
    pub const OPTION_COUNT: usize = 4;
}

/// Player identity constants
pub mod player {
    /// Maximum length of a player name in characters
    pub const MAX_NAME_LENGTH: usize = 30;
}

/// Leaderboard configuration constants
pub mod leaderboard {
    /// Maximum number of entries retained in the leaderboard
    pub const MAX_ENTRIES: usize = 10;
    /// Key under which the leaderboard is persisted in the key-value store
    pub const STORAGE_KEY: &str = "quizmaster_leaderboard";
}

/// Document question generator constants
pub mod generator {
    /// Maximum number of study-material characters forwarded to the generator
    pub const MAX_MATERIAL_CHARS: usize = 8000;
    /// Number of questions the generator is asked to produce
    pub const QUESTIONS_REQUESTED: usize = 10;
}

/// Document text extraction constants
pub mod extract {
    /// Minimum number of extracted characters for a document to be usable
    pub const MIN_TEXT_LENGTH: usize = 80;
}
