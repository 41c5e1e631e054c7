// file: src/exporter/csv.rs
// description: csv export and re-import of results tables
// reference: https://docs.rs/csv

use crate::error::{QaError, Result};
use crate::models::{QueryResult, ResultsTable};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CSV_HEADERS: [&str; 2] = ["file_name", "answer"];

#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_path: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub exported_at: String,
}

impl CsvExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Result<Self> {
        let output_path = output_path.into();
        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { output_path })
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Header row first, even for an empty table.
    pub fn to_csv_string(table: &ResultsTable) -> Result<String> {
        let mut writer = ::csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(::csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(CSV_HEADERS)?;
        for row in table {
            writer.serialize(row)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| QaError::Csv(e.into_error().into()))?;

        // Every field written above came from a `String`.
        String::from_utf8(bytes).map_err(|e| QaError::Validation(e.to_string()))
    }

    pub fn export(&self, table: &ResultsTable) -> Result<ExportSummary> {
        let contents = Self::to_csv_string(table)?;

        fs::write(&self.output_path, contents).map_err(|e| QaError::Export {
            path: self.output_path.clone(),
            message: e.to_string(),
        })?;

        let summary = ExportSummary {
            path: self.output_path.clone(),
            rows: table.len(),
            exported_at: Utc::now().to_rfc3339(),
        };

        info!(
            "Exported {} row(s) to {}",
            summary.rows,
            summary.path.display()
        );
        Ok(summary)
    }

    pub fn read(path: &Path) -> Result<ResultsTable> {
        let contents = fs::read_to_string(path).map_err(|e| QaError::Export {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_csv_str(&contents)
    }

    pub fn from_csv_str(contents: &str) -> Result<ResultsTable> {
        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(contents.as_bytes());

        let headers = reader.headers()?.clone();
        if headers.iter().collect::<Vec<_>>() != CSV_HEADERS {
            return Err(QaError::Validation(format!(
                "Unexpected CSV header: {}",
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        reader
            .deserialize::<QueryResult>()
            .map(|row| row.map_err(QaError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample_table() -> ResultsTable {
        ResultsTable::from(vec![
            QueryResult::answered("A.pdf", "30 days"),
            QueryResult::answered(
                "161.Nederlandse Gasunie NV Cao.01-01-2024.31-12-2025.pdf",
                "Two months, \"in writing\",\nafter the trial period",
            ),
            QueryResult::answered("C.pdf", ""),
            QueryResult::answered("B.pdf", "Error: request timed out after 60s"),
        ])
    }

    #[test]
    fn test_csv_layout() {
        let table = ResultsTable::from(vec![
            QueryResult::answered("A.pdf", "30 days"),
            QueryResult::answered("B.pdf", "a, b"),
        ]);

        let csv = CsvExporter::to_csv_string(&table).unwrap();
        assert_eq!(csv, "file_name,answer\nA.pdf,30 days\nB.pdf,\"a, b\"\n");
    }

    #[test]
    fn test_empty_table_has_header() {
        let csv = CsvExporter::to_csv_string(&ResultsTable::new()).unwrap();
        assert_eq!(csv, "file_name,answer\n");
        assert!(CsvExporter::from_csv_str(&csv).unwrap().is_empty());
    }

    #[test]
    fn test_export_and_read_back() {
        let dir = tempdir().unwrap();
        let exporter = CsvExporter::new(dir.path().join("nested/answers.csv")).unwrap();
        let table = sample_table();

        let summary = exporter.export(&table).unwrap();
        assert_eq!(summary.rows, 4);
        assert!(summary.path.exists());

        let restored = CsvExporter::read(exporter.output_path()).unwrap();
        assert_eq!(restored, table);
    }

    #[test]
    fn test_wrong_header_rejected() {
        let result = CsvExporter::from_csv_str("document,text\nA.pdf,x\n");
        assert!(matches!(result, Err(QaError::Validation(_))));
    }
}
