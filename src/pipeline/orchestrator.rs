// file: src/pipeline/orchestrator.rs
// description: runs one question against each selected document in order
// reference: sequential batch workflow over the backend client

use crate::client::ChatClient;
use crate::config::Config;
use crate::error::Result;
use crate::models::{QueryResult, ResultsTable};
use crate::pipeline::progress::{BatchObserver, BatchProgress, BatchStats};
use crate::utils::Validator;
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

/// A validated question plus the documents to ask it against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    question: String,
    documents: Vec<String>,
}

impl BatchRequest {
    pub fn new(question: impl Into<String>, documents: Vec<String>) -> Result<Self> {
        let question = question.into();
        Validator::validate_question(&question)?;
        Validator::validate_selection(&documents)?;

        Ok(Self {
            question,
            documents,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub batch_id: Uuid,
    pub table: ResultsTable,
    pub stats: BatchStats,
    /// Positions in `table` whose request failed.
    pub failed_rows: Vec<usize>,
}

impl BatchReport {
    pub fn row_failed(&self, index: usize) -> bool {
        self.failed_rows.binary_search(&index).is_ok()
    }
}

pub struct BatchOrchestrator {
    client: ChatClient,
}

impl BatchOrchestrator {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(ChatClient::from_config(&config.backend)?))
    }

    pub fn client(&self) -> &ChatClient {
        &self.client
    }

    /// Validates the inputs, then runs the batch. Nothing is sent when the
    /// question or the selection is empty.
    pub async fn ask_all(
        &self,
        question: &str,
        documents: &[String],
        observer: &dyn BatchObserver,
    ) -> Result<BatchReport> {
        let request = BatchRequest::new(question, documents.to_vec())?;
        Ok(self.run(&request, observer).await)
    }

    /// One request per document, each awaited before the next is sent.
    /// A failed document gets an `Error:` answer and the batch moves on.
    pub async fn run(&self, request: &BatchRequest, observer: &dyn BatchObserver) -> BatchReport {
        let batch_id = Uuid::new_v4();
        let span = info_span!("batch", id = %batch_id, documents = request.len());

        async move {
            let start_time = Instant::now();
            let total = request.len();
            let mut table = ResultsTable::with_capacity(total);
            let mut stats = BatchStats::new();
            let mut failed_rows = Vec::new();

            info!("Asking {} document(s) via {}", total, self.client.endpoint());

            for (idx, document) in request.documents().iter().enumerate() {
                let outcome = self.client.ask(request.question(), document).await;
                let result = QueryResult::from_outcome(document.as_str(), &outcome);

                match &outcome {
                    Ok(_) => stats.documents_answered += 1,
                    Err(failure) => {
                        stats.documents_failed += 1;
                        failed_rows.push(idx);
                        warn!("Request for {} failed: {}", document, failure);
                    }
                }

                observer.record(&BatchProgress {
                    completed: idx + 1,
                    total,
                    result: &result,
                    failed: outcome.is_err(),
                    stats: &stats,
                });
                table.push(result);
            }

            stats.duration = start_time.elapsed();
            log_final_stats(&stats);

            BatchReport {
                batch_id,
                table,
                stats,
                failed_rows,
            }
        }
        .instrument(span)
        .await
    }
}

fn log_final_stats(stats: &BatchStats) {
    info!(
        "Batch complete: {} answered, {} failed ({:.1}% success) in {:.2}s ({:.2} docs/sec)",
        stats.documents_answered,
        stats.documents_failed,
        stats.success_rate(),
        stats.duration.as_secs_f64(),
        stats.documents_per_second()
    );
}
