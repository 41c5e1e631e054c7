// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use catalog::Catalog;
pub use client::ChatClient;
pub use config::{BackendConfig, Config, DocumentsConfig, ExportConfig};
pub use error::{QaError, RequestFailure, Result};
pub use exporter::{CsvExporter, ExportSummary};
pub use models::{ChatRequest, ChatResponse, QueryResult, ResultsTable};
pub use pipeline::{
    BatchObserver, BatchOrchestrator, BatchProgress, BatchReport, BatchRequest, BatchStats,
    NoopObserver, ProgressTracker,
};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _client = ChatClient::from_config(&config.backend).unwrap();
        let _table = ResultsTable::new();
    }
}
