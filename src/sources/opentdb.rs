//! Trivia API boundary
//!
//! Shapes and decoding for the public trivia question source. The
//! transport is supplied by the consumer through [`QuestionSource`]; this
//! module owns the request parameters, the response envelope, and the
//! mapping from the envelope's status code to the failure taxonomy.

use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::question::{Difficulty, RawQuestion};

/// A trivia category offered by the question source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier used in fetch parameters
    pub id: u32,
    /// Human-readable category name
    pub name: String,
}

/// Failures reported by the question source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The source does not hold enough questions for the selection
    #[error("not enough questions available for your selection, try different options")]
    QuotaExceeded,
    /// The request parameters were rejected
    #[error("invalid parameters, please try again")]
    InvalidParameters,
    /// The session token is missing or exhausted
    #[error("session token error, please reset and try again")]
    TokenError,
    /// An unrecognized status code
    #[error("unknown API error (code {0})")]
    Unknown(u8),
    /// The transport failed before an envelope arrived
    #[error("failed to reach the question source")]
    Unreachable,
}

/// Parameters for a question fetch
///
/// The question type is fixed to multiple choice and is not
/// configurable.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FetchParams {
    /// Number of questions to request
    #[garde(range(min = crate::constants::session::MIN_QUESTION_COUNT, max = crate::constants::session::MAX_QUESTION_COUNT))]
    pub amount: usize,
    /// Category to restrict to, `None` for any category
    #[garde(skip)]
    pub category: Option<u32>,
    /// Difficulty to restrict to, `None` for any difficulty
    #[garde(skip)]
    pub difficulty: Option<Difficulty>,
}

impl FetchParams {
    /// Builds the query pairs for the fetch endpoint
    ///
    /// Unset category and difficulty are omitted entirely rather than
    /// sent as wildcards; the question type is always `multiple`.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("amount", self.amount.to_string()),
            ("type", "multiple".to_string()),
        ];
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        if let Some(difficulty) = self.difficulty {
            pairs.push(("difficulty", difficulty.as_str().to_string()));
        }
        pairs
    }
}

/// The response envelope returned by the fetch endpoint
///
/// A status code of zero means success; nonzero codes map onto
/// [`SourceError`] variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Status code reported by the source
    pub response_code: u8,
    /// The questions, present on success
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

impl ResponseEnvelope {
    /// Unwraps the envelope into its questions
    ///
    /// # Errors
    ///
    /// The mapped [`SourceError`] when the status code is nonzero.
    pub fn into_results(self) -> Result<Vec<RawQuestion>, SourceError> {
        match self.response_code {
            0 => Ok(self.results),
            1 => Err(SourceError::QuotaExceeded),
            2 => Err(SourceError::InvalidParameters),
            3 | 4 => Err(SourceError::TokenError),
            code => Err(SourceError::Unknown(code)),
        }
    }
}

/// The seam a question transport implements
///
/// Implementations perform the actual HTTP calls; the core only consumes
/// the decoded results.
pub trait QuestionSource {
    /// Lists the categories the source offers
    ///
    /// # Errors
    ///
    /// [`SourceError`] when the source cannot be reached or rejects the
    /// request.
    fn list_categories(&self) -> Result<Vec<Category>, SourceError>;

    /// Fetches raw questions matching the parameters
    ///
    /// # Errors
    ///
    /// [`SourceError`] when the source cannot be reached or the envelope
    /// carries a nonzero status code.
    fn fetch_questions(&self, params: &FetchParams) -> Result<Vec<RawQuestion>, SourceError>;
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn create_test_params() -> FetchParams {
        FetchParams {
            amount: 10,
            category: Some(9),
            difficulty: Some(Difficulty::Medium),
        }
    }

    #[test]
    fn test_params_validation() {
        assert!(create_test_params().validate().is_ok());

        let zero = FetchParams {
            amount: 0,
            ..create_test_params()
        };
        assert!(zero.validate().is_err());

        let too_many = FetchParams {
            amount: 51,
            ..create_test_params()
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_query_pairs_full() {
        let pairs = create_test_params().query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("amount", "10".to_string()),
                ("type", "multiple".to_string()),
                ("category", "9".to_string()),
                ("difficulty", "medium".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_omit_any() {
        let params = FetchParams {
            amount: 5,
            category: None,
            difficulty: None,
        };
        let pairs = params.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("amount", "5".to_string()),
                ("type", "multiple".to_string()),
            ]
        );
    }

    #[test]
    fn test_envelope_success() {
        let envelope: ResponseEnvelope = serde_json::from_str(
            r#"{
                "response_code": 0,
                "results": [{
                    "question": "What is the capital of France?",
                    "correct_answer": "Paris",
                    "incorrect_answers": ["Rome", "Berlin", "Madrid"],
                    "category": "Geography",
                    "difficulty": "easy"
                }]
            }"#,
        )
        .unwrap();

        let results = envelope.into_results().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].correct_answer, "Paris");
        assert_eq!(results[0].difficulty, Some(Difficulty::Easy));
    }

    #[test]
    fn test_envelope_error_codes() {
        let envelope = |code| ResponseEnvelope {
            response_code: code,
            results: Vec::new(),
        };

        assert_eq!(
            envelope(1).into_results(),
            Err(SourceError::QuotaExceeded)
        );
        assert_eq!(
            envelope(2).into_results(),
            Err(SourceError::InvalidParameters)
        );
        assert_eq!(envelope(3).into_results(), Err(SourceError::TokenError));
        assert_eq!(envelope(4).into_results(), Err(SourceError::TokenError));
        assert_eq!(envelope(9).into_results(), Err(SourceError::Unknown(9)));
    }

    #[test]
    fn test_envelope_missing_results_defaults_empty() {
        let envelope: ResponseEnvelope =
            serde_json::from_str(r#"{"response_code": 1}"#).unwrap();
        assert!(envelope.results.is_empty());
    }
}
