//! Question data model and normalization
//!
//! This module defines the raw question shape supplied by external sources
//! (the trivia API or the document generator) and the playable [`Question`]
//! produced from it. Normalization combines the correct and incorrect
//! answers into a single option list and shuffles it exactly once; the
//! resulting order is fixed for the question's lifetime.

use garde::Validate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Difficulty levels offered by the question source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Easy questions
    #[default]
    Easy,
    /// Medium questions
    Medium,
    /// Hard questions
    Hard,
}

impl Difficulty {
    /// Returns the lowercase label used by the question source's query string
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A question as supplied by an external source, before normalization
///
/// Both the trivia API and the document generator produce this shape.
/// The category and difficulty fields are only present on the API path;
/// generated questions inherit them from the session settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RawQuestion {
    /// The question text (HTML-entity-encoded by the trivia API)
    #[garde(length(min = 1))]
    pub question: String,
    /// The single correct answer
    #[garde(length(min = 1))]
    pub correct_answer: String,
    /// The incorrect answers, always exactly three
    #[garde(length(min = crate::constants::question::INCORRECT_ANSWER_COUNT, max = crate::constants::question::INCORRECT_ANSWER_COUNT))]
    pub incorrect_answers: Vec<String>,
    /// Category label, absent on the generator path
    #[serde(default)]
    #[garde(skip)]
    pub category: Option<String>,
    /// Difficulty, absent on the generator path
    #[serde(default)]
    #[garde(skip)]
    pub difficulty: Option<Difficulty>,
}

/// A playable question with a fixed, shuffled option order
///
/// Immutable after normalization: the options are a permutation of the
/// correct answer and the incorrect answers, containing the correct
/// answer exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Opaque identifier for this question
    pub id: Uuid,
    /// Category label shown alongside the question
    pub category: String,
    /// Difficulty of this question
    pub difficulty: Difficulty,
    /// The question text, kept entity-encoded as received
    pub prompt: String,
    /// The correct answer
    pub correct_answer: String,
    /// All answer options in their fixed display order
    pub options: Vec<String>,
}

/// Shuffles a list in place with a uniform Fisher-Yates pass
///
/// Walks from the last index down to 1, swapping each element with a
/// uniformly chosen element at an index no greater than its own.
fn shuffle<T>(items: &mut [T]) {
    for i in (1..items.len()).rev() {
        items.swap(i, fastrand::usize(..=i));
    }
}

/// Turns raw questions into playable questions with shuffled options
///
/// For each raw question the incorrect answers and the correct answer are
/// combined into one option list and shuffled once. The input is not
/// mutated; raw questions missing category or difficulty fall back to the
/// supplied session-level values.
///
/// # Arguments
///
/// * `raw` - Raw questions from either external source
/// * `fallback_category` - Category label for questions that carry none
/// * `fallback_difficulty` - Difficulty for questions that carry none
///
/// # Returns
///
/// Playable questions in the same order as the input
pub fn normalize(
    raw: &[RawQuestion],
    fallback_category: &str,
    fallback_difficulty: Difficulty,
) -> Vec<Question> {
    raw.iter()
        .map(|q| {
            let mut options = q
                .incorrect_answers
                .iter()
                .chain(std::iter::once(&q.correct_answer))
                .cloned()
                .collect_vec();
            shuffle(&mut options);

            Question {
                id: Uuid::new_v4(),
                category: q
                    .category
                    .clone()
                    .unwrap_or_else(|| fallback_category.to_owned()),
                difficulty: q.difficulty.unwrap_or(fallback_difficulty),
                prompt: q.question.clone(),
                correct_answer: q.correct_answer.clone(),
                options,
            }
        })
        .collect_vec()
}
