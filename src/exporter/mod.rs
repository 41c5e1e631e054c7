// file: src/exporter/mod.rs
// description: exporter module exports
// reference: internal module structure

pub mod csv;

pub use self::csv::{CSV_HEADERS, CsvExporter, ExportSummary};
