//! Player name validation
//!
//! A single-player client still needs a presentable name for the
//! leaderboard. Names are trimmed, bounded in length, and filtered for
//! inappropriate content before a quiz can start.

use rustrict::CensorStr;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during player name validation
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The name is empty or contains only whitespace
    #[error("name cannot be empty")]
    Empty,
    /// The name exceeds the maximum allowed length
    #[error("name is too long")]
    TooLong,
    /// The name contains inappropriate content
    #[error("name is inappropriate")]
    Sinful,
}

/// Validates a player name and returns the cleaned form
///
/// The name is trimmed of surrounding whitespace, required to be
/// non-empty, at most 30 characters, and free of inappropriate content.
///
/// # Errors
///
/// * [`Error::TooLong`] - name exceeds the length limit
/// * [`Error::Empty`] - name is empty after trimming
/// * [`Error::Sinful`] - name contains inappropriate content
pub fn validate_name(name: &str) -> Result<String, Error> {
    if name.len() > crate::constants::player::MAX_NAME_LENGTH {
        return Err(Error::TooLong);
    }
    let name = rustrict::trim_whitespace(name);
    if name.is_empty() {
        return Err(Error::Empty);
    }
    if name.is_inappropriate() {
        return Err(Error::Sinful);
    }
    Ok(name.to_owned())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name_is_trimmed() {
        assert_eq!(validate_name("  Alice  "), Ok("Alice".to_string()));
        assert_eq!(validate_name("Bob"), Ok("Bob".to_string()));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(validate_name(""), Err(Error::Empty));
        assert_eq!(validate_name("   "), Err(Error::Empty));
        assert_eq!(validate_name("\t\n"), Err(Error::Empty));
    }

    #[test]
    fn test_name_length_limit() {
        let max = "a".repeat(crate::constants::player::MAX_NAME_LENGTH);
        assert!(validate_name(&max).is_ok());

        let too_long = "a".repeat(crate::constants::player::MAX_NAME_LENGTH + 1);
        assert_eq!(validate_name(&too_long), Err(Error::TooLong));
    }

    #[test]
    fn test_inappropriate_name_rejected() {
        assert_eq!(validate_name("shit"), Err(Error::Sinful));
    }
}
