//! Document question generator boundary
//!
//! The generator collaborator takes study material and returns candidate
//! questions as JSON. This module owns everything around that call that
//! does not require a network: truncating the material, building the
//! prompt, and parsing and validating the model's reply. Any shape
//! violation in the reply is a [`GenerateError::MalformedResponse`]; the
//! quiz core never plays an unvalidated question.

use std::borrow::Cow;

use garde::Validate;
use thiserror::Error;

use crate::{constants::generator, question::RawQuestion};

/// Failures on the generation path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// No API credentials are configured
    #[error("generator API key is not configured")]
    MissingCredentials,
    /// The upstream model call failed
    #[error("generator request failed: {0}")]
    Upstream(String),
    /// The reply could not be used as questions
    #[error("generator returned unusable data: {0}")]
    MalformedResponse(&'static str),
}

/// Truncates study material to the forwarded limit
///
/// Material longer than the limit is cut and marked with an ellipsis;
/// shorter material is passed through unchanged.
pub fn truncate_material(text: &str) -> Cow<'_, str> {
    if text.len() <= generator::MAX_MATERIAL_CHARS {
        return Cow::Borrowed(text);
    }
    let mut end = generator::MAX_MATERIAL_CHARS;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!("{}...", &text[..end]))
}

/// Builds the generation prompt around the (already truncated) material
pub fn build_prompt(material: &str) -> String {
    format!(
        "You are a quiz generator. Based on the following study material, \
generate exactly {count} multiple choice questions. Each question must have \
exactly 4 options and one correct answer.

Return ONLY a valid JSON array in this exact format, nothing else:
[
  {{
    \"question\": \"Question text here?\",
    \"correct_answer\": \"Correct option here\",
    \"incorrect_answers\": [\"Wrong 1\", \"Wrong 2\", \"Wrong 3\"]
  }}
]

Study Material:
{material}",
        count = generator::QUESTIONS_REQUESTED,
    )
}

/// Strips a surrounding markdown code fence, if present
fn strip_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

/// Parses and validates the generator's reply
///
/// The reply may be wrapped in a markdown code fence. It must decode to
/// a non-empty JSON array of questions, each with a question text, a
/// correct answer, and exactly three incorrect answers.
///
/// # Errors
///
/// [`GenerateError::MalformedResponse`] describing the first violation
/// found.
pub fn parse_generated(raw: &str) -> Result<Vec<RawQuestion>, GenerateError> {
    let cleaned = strip_fences(raw);

    let questions: Vec<RawQuestion> = serde_json::from_str(cleaned).map_err(|err| {
        log::warn!("generator reply is not valid JSON: {err}");
        GenerateError::MalformedResponse("reply is not a valid JSON array")
    })?;

    if questions.is_empty() {
        return Err(GenerateError::MalformedResponse("reply contains no questions"));
    }

    for question in &questions {
        if question.validate().is_err() {
            log::warn!("generator question failed shape validation");
            return Err(GenerateError::MalformedResponse(
                "a question has an invalid format",
            ));
        }
    }

    Ok(questions)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    const VALID_REPLY: &str = r#"[
        {
            "question": "What powers photosynthesis?",
            "correct_answer": "Sunlight",
            "incorrect_answers": ["Moonlight", "Soil", "Wind"]
        }
    ]"#;

    #[test]
    fn test_parse_valid_reply() {
        let questions = parse_generated(VALID_REPLY).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, "Sunlight");
        assert_eq!(questions[0].category, None);
    }

    #[test]
    fn test_parse_strips_json_fence() {
        let fenced = format!("```json\n{VALID_REPLY}\n```");
        assert!(parse_generated(&fenced).is_ok());
    }

    #[test]
    fn test_parse_strips_bare_fence() {
        let fenced = format!("```\n{VALID_REPLY}\n```");
        assert!(parse_generated(&fenced).is_ok());
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(matches!(
            parse_generated("Here are your questions!"),
            Err(GenerateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_empty_array() {
        assert!(matches!(
            parse_generated("[]"),
            Err(GenerateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_wrong_incorrect_count() {
        let two_wrong = r#"[
            {
                "question": "What powers photosynthesis?",
                "correct_answer": "Sunlight",
                "incorrect_answers": ["Moonlight", "Soil"]
            }
        ]"#;
        assert!(matches!(
            parse_generated(two_wrong),
            Err(GenerateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_empty_question_text() {
        let empty_text = r#"[
            {
                "question": "",
                "correct_answer": "Sunlight",
                "incorrect_answers": ["Moonlight", "Soil", "Wind"]
            }
        ]"#;
        assert!(matches!(
            parse_generated(empty_text),
            Err(GenerateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_truncate_short_material_unchanged() {
        let text = "short study material";
        assert_eq!(truncate_material(text), Cow::Borrowed(text));
    }

    #[test]
    fn test_truncate_long_material() {
        let text = "a".repeat(generator::MAX_MATERIAL_CHARS + 100);
        let truncated = truncate_material(&text);
        assert_eq!(
            truncated.len(),
            generator::MAX_MATERIAL_CHARS + "...".len()
        );
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        let mut text = "a".repeat(generator::MAX_MATERIAL_CHARS - 1);
        text.push('é');
        text.push_str(&"b".repeat(200));

        let truncated = truncate_material(&text);
        assert!(truncated.ends_with("..."));
        // Must not split the multi-byte character.
        assert!(truncated.is_char_boundary(truncated.len() - 3));
    }

    #[test]
    fn test_build_prompt_embeds_material() {
        let prompt = build_prompt("The mitochondria is the powerhouse of the cell.");
        assert!(prompt.contains("exactly 10 multiple choice questions"));
        assert!(prompt.contains("The mitochondria is the powerhouse of the cell."));
        assert!(prompt.contains("incorrect_answers"));
    }
}
