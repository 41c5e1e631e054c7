// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod orchestrator;
mod progress;

pub use orchestrator::{BatchOrchestrator, BatchReport, BatchRequest};
pub use progress::{
    BatchObserver, BatchProgress, BatchStats, NoopObserver, ProgressTracker, completion_fraction,
};
