// file: src/models/result.rs
// description: per-document answers and the ordered results table
// reference: internal data structures

use crate::error::RequestFailure;
use serde::{Deserialize, Serialize};

/// One row of the results table. Serialized as `file_name, answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(rename = "file_name")]
    pub document: String,
    pub answer: String,
}

impl QueryResult {
    pub fn answered(document: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            answer: answer.into(),
        }
    }

    pub fn failed(document: impl Into<String>, failure: &RequestFailure) -> Self {
        Self {
            document: document.into(),
            answer: failure.as_answer(),
        }
    }

    /// Builds the row for one `/chat` call, whatever its outcome.
    pub fn from_outcome(
        document: impl Into<String>,
        outcome: &std::result::Result<String, RequestFailure>,
    ) -> Self {
        match outcome {
            Ok(answer) => Self::answered(document, answer.as_str()),
            Err(failure) => Self::failed(document, failure),
        }
    }
}

/// Results of one batch, in the order the documents were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultsTable {
    rows: Vec<QueryResult>,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, result: QueryResult) {
        self.rows.push(result);
    }

    pub fn rows(&self) -> &[QueryResult] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QueryResult> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<QueryResult>> for ResultsTable {
    fn from(rows: Vec<QueryResult>) -> Self {
        Self { rows }
    }
}

impl FromIterator<QueryResult> for ResultsTable {
    fn from_iter<T: IntoIterator<Item = QueryResult>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResultsTable {
    type Item = &'a QueryResult;
    type IntoIter = std::slice::Iter<'a, QueryResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_failed_result_carries_error_prefix() {
        let failure = RequestFailure::Timeout(Duration::from_secs(60));
        let result = QueryResult::failed("B.pdf", &failure);

        assert_eq!(result.document, "B.pdf");
        assert!(result.answer.starts_with("Error:"));
    }

    #[test]
    fn test_from_outcome() {
        let ok = QueryResult::from_outcome("A.pdf", &Ok("Error: none found".to_string()));
        assert_eq!(ok, QueryResult::answered("A.pdf", "Error: none found"));

        let failure = RequestFailure::Decode("expected value".to_string());
        let failed = QueryResult::from_outcome("A.pdf", &Err(failure.clone()));
        assert_eq!(failed, QueryResult::failed("A.pdf", &failure));
    }

    #[test]
    fn test_table_keeps_insertion_order() {
        let mut table = ResultsTable::new();
        table.push(QueryResult::answered("b.pdf", "two"));
        table.push(QueryResult::answered("a.pdf", "one"));
        table.push(QueryResult::failed(
            "c.pdf",
            &RequestFailure::Connect("refused".to_string()),
        ));

        let documents: Vec<&str> = table.iter().map(|row| row.document.as_str()).collect();
        assert_eq!(documents, ["b.pdf", "a.pdf", "c.pdf"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_row_serializes_with_file_name_column() {
        let value = serde_json::to_value(QueryResult::answered("A.pdf", "30 days")).unwrap();
        assert_eq!(value["file_name"], "A.pdf");
        assert_eq!(value["answer"], "30 days");
    }
}
