//! Document text extraction boundary
//!
//! Byte-level extraction (PDF and Word parsing) happens outside the
//! core; this module decides which extractor applies to an uploaded file
//! and whether the extracted text is substantial enough to generate
//! questions from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::extract::MIN_TEXT_LENGTH;

/// Failures on the extraction path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The file is neither a PDF nor a Word document
    #[error("unsupported file type, please upload a PDF or Word (.docx) file")]
    UnsupportedFormat,
    /// Extraction produced no usable text
    #[error(
        "not enough text could be extracted from this file, make sure the \
         document has readable text content"
    )]
    ExtractionFailed,
}

/// Document formats the extraction collaborator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    /// A PDF document
    Pdf,
    /// A Word document (.doc or .docx)
    Word,
}

impl DocumentKind {
    /// Determines the document kind from a file name
    ///
    /// The extension check is case-insensitive.
    ///
    /// # Errors
    ///
    /// [`ExtractError::UnsupportedFormat`] for any other extension.
    pub fn from_file_name(name: &str) -> Result<Self, ExtractError> {
        let name = name.to_lowercase();
        if name.ends_with(".pdf") {
            Ok(Self::Pdf)
        } else if name.ends_with(".docx") || name.ends_with(".doc") {
            Ok(Self::Word)
        } else {
            Err(ExtractError::UnsupportedFormat)
        }
    }
}

/// Accepts extracted text if it can support question generation
///
/// The text is trimmed and must reach the minimum length; anything
/// shorter is treated as a failed extraction (scanned images and near
/// empty documents land here).
///
/// # Errors
///
/// [`ExtractError::ExtractionFailed`] when the trimmed text is too
/// short.
pub fn accept_extracted(text: &str) -> Result<&str, ExtractError> {
    let trimmed = text.trim();
    if trimmed.len() < MIN_TEXT_LENGTH {
        return Err(ExtractError::ExtractionFailed);
    }
    Ok(trimmed)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_document_kind_from_extension() {
        assert_eq!(
            DocumentKind::from_file_name("notes.pdf"),
            Ok(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_file_name("notes.docx"),
            Ok(DocumentKind::Word)
        );
        assert_eq!(
            DocumentKind::from_file_name("notes.doc"),
            Ok(DocumentKind::Word)
        );
    }

    #[test]
    fn test_document_kind_case_insensitive() {
        assert_eq!(
            DocumentKind::from_file_name("NOTES.PDF"),
            Ok(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_file_name("Notes.DocX"),
            Ok(DocumentKind::Word)
        );
    }

    #[test]
    fn test_document_kind_rejects_other_extensions() {
        for name in ["notes.txt", "notes.png", "notes", "pdf"] {
            assert_eq!(
                DocumentKind::from_file_name(name),
                Err(ExtractError::UnsupportedFormat),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_accept_extracted_minimum_length() {
        let long_enough = "a".repeat(MIN_TEXT_LENGTH);
        assert_eq!(accept_extracted(&long_enough), Ok(long_enough.as_str()));

        let too_short = "a".repeat(MIN_TEXT_LENGTH - 1);
        assert_eq!(
            accept_extracted(&too_short),
            Err(ExtractError::ExtractionFailed)
        );
    }

    #[test]
    fn test_accept_extracted_trims_before_measuring() {
        let padded = format!("   {}   ", "a".repeat(MIN_TEXT_LENGTH - 1));
        assert_eq!(
            accept_extracted(&padded),
            Err(ExtractError::ExtractionFailed)
        );

        let padded_ok = format!("   {}   ", "a".repeat(MIN_TEXT_LENGTH));
        let accepted = accept_extracted(&padded_ok).unwrap();
        assert_eq!(accepted.len(), MIN_TEXT_LENGTH);
    }

    #[test]
    fn test_accept_extracted_empty() {
        assert_eq!(accept_extracted(""), Err(ExtractError::ExtractionFailed));
        assert_eq!(
            accept_extracted("   \n\t  "),
            Err(ExtractError::ExtractionFailed)
        );
    }
}
