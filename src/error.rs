// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QaError>;

#[derive(Error, Debug)]
pub enum QaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Please enter a question.")]
    MissingQuestion,

    #[error("Please select at least one file.")]
    NoDocumentsSelected,

    #[error("Export failed for {path}: {message}")]
    Export { path: PathBuf, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl QaError {
    /// Missing user input: shown as a warning rather than a failure.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, QaError::MissingQuestion | QaError::NoDocumentsSelected)
    }
}

/// Why a single `/chat` call produced no answer.
///
/// Never aborts a batch; the orchestrator turns it into an `Error:` answer
/// for the document that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("could not connect to backend: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl RequestFailure {
    /// Text stored as the answer when the request failed.
    pub fn as_answer(&self) -> String {
        format!("Error: {}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_answer_prefix() {
        let failure = RequestFailure::Timeout(Duration::from_secs(60));
        assert_eq!(failure.as_answer(), "Error: request timed out after 60s");

        let failure = RequestFailure::Status {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert!(failure.as_answer().starts_with("Error: backend returned HTTP 502"));
    }

    #[test]
    fn test_missing_input_classification() {
        assert!(QaError::MissingQuestion.is_missing_input());
        assert!(QaError::NoDocumentsSelected.is_missing_input());
        assert!(!QaError::Config("bad".to_string()).is_missing_input());
    }
}
