// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::error::{QaError, Result};

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(QaError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    /// Only the empty string counts as missing; any other text, blank or
    /// not, is sent to the backend as is.
    pub fn validate_question(question: &str) -> Result<()> {
        if question.is_empty() {
            return Err(QaError::MissingQuestion);
        }
        Ok(())
    }

    /// Document names are opaque: blank or repeated names are still queried.
    pub fn validate_selection(documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            return Err(QaError::NoDocumentsSelected);
        }
        Ok(())
    }

    /// Cuts `text` to at most `max_chars` characters, appending `...` when cut.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            None => text.to_string(),
            Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://example.com").is_ok());
        assert!(Validator::validate_url("http://localhost:50505").is_ok());
        assert!(Validator::validate_url("example.com").is_err());
        assert!(Validator::validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_question() {
        assert!(Validator::validate_question("What is the notice period?").is_ok());
        assert!(Validator::validate_question("  \n").is_ok());
        assert!(matches!(
            Validator::validate_question(""),
            Err(QaError::MissingQuestion)
        ));
    }

    #[test]
    fn test_validate_selection() {
        assert!(Validator::validate_selection(&["A.pdf".to_string()]).is_ok());
        assert!(Validator::validate_selection(&["A.pdf".to_string(), " ".to_string()]).is_ok());
        assert!(matches!(
            Validator::validate_selection(&[]),
            Err(QaError::NoDocumentsSelected)
        ));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
        assert_eq!(Validator::truncate_text("opzegtermijn één maand", 14), "opzegtermijn é...");
    }
}
