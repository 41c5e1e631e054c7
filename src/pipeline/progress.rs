// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for batch execution
// reference: uses indicatif for progress bars and tracks per-document outcomes

use crate::models::QueryResult;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// State of a batch right after one document finished.
#[derive(Debug, Clone, Copy)]
pub struct BatchProgress<'a> {
    pub completed: usize,
    pub total: usize,
    pub result: &'a QueryResult,
    /// Whether the request failed, as opposed to the backend answering with
    /// text that merely looks like an error.
    pub failed: bool,
    pub stats: &'a BatchStats,
}

impl BatchProgress<'_> {
    pub fn fraction(&self) -> f64 {
        completion_fraction(self.completed, self.total)
    }
}

/// Receives one notification per finished document, in selection order.
pub trait BatchObserver {
    fn record(&self, progress: &BatchProgress<'_>);
}

/// Observer for callers that do not display progress.
pub struct NoopObserver;

impl BatchObserver for NoopObserver {
    fn record(&self, _progress: &BatchProgress<'_>) {}
}

/// Fraction of the batch done after `completed` of `total` documents.
pub fn completion_fraction(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    completed.min(total) as f64 / total as f64
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchStats {
    pub documents_answered: usize,
    pub documents_failed: usize,
    pub duration: Duration,
}

impl BatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.documents_answered + self.documents_failed
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.documents_answered as f64 / total as f64) * 100.0
    }

    pub fn documents_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.total() as f64 / secs
    }
}

/// Progress bar plus a detail line naming the last document and the
/// failure count reported by the orchestrator.
pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
}

impl ProgressTracker {
    pub fn with_color(total_documents: usize, colored: bool) -> Self {
        let multi_progress = MultiProgress::with_draw_target(ProgressDrawTarget::stderr());
        Self::build(multi_progress, total_documents, colored)
    }

    #[cfg(test)]
    fn hidden(total_documents: usize) -> Self {
        let multi_progress = MultiProgress::with_draw_target(ProgressDrawTarget::hidden());
        Self::build(multi_progress, total_documents, false)
    }

    fn build(multi_progress: MultiProgress, total_documents: usize, colored: bool) -> Self {
        let main_bar = create_progress_bar(&multi_progress, total_documents as u64, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
        }
    }

    pub fn finish(&self) {
        self.main_bar.finish_with_message("All documents queried");
        self.detail_bar.finish_and_clear();
    }
}

impl BatchObserver for ProgressTracker {
    fn record(&self, progress: &BatchProgress<'_>) {
        self.main_bar.set_position(progress.completed as u64);
        self.detail_bar.set_message(format!(
            "Last: {} | Failed: {}",
            progress.result.document, progress.stats.documents_failed
        ));
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    if colored {
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
                )
                .expect("Failed to create progress bar template")
                .progress_chars("█▓▒░"),
        );
    } else {
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}")
                .expect("Failed to create progress bar template")
                .progress_chars("=>-"),
        );
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    let style = ProgressStyle::default_bar()
        .template("{msg}")
        .expect("Failed to create detail bar template");
    bar.set_style(style);
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_fraction() {
        assert_eq!(completion_fraction(0, 4), 0.0);
        assert_eq!(completion_fraction(1, 4), 0.25);
        assert_eq!(completion_fraction(4, 4), 1.0);
        assert_eq!(completion_fraction(0, 0), 1.0);
    }

    #[test]
    fn test_batch_stats_calculations() {
        let stats = BatchStats {
            documents_answered: 9,
            documents_failed: 1,
            duration: Duration::from_secs(5),
        };

        assert_eq!(stats.total(), 10);
        assert_eq!(stats.documents_per_second(), 2.0);
        assert!((stats.success_rate() - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_batch_stats_empty() {
        let stats = BatchStats::new();
        assert_eq!(stats.success_rate(), 0.0);
        assert_eq!(stats.documents_per_second(), 0.0);
    }

    #[test]
    fn test_progress_fraction() {
        let result = QueryResult::answered("a.pdf", "yes");
        let stats = BatchStats::new();
        let progress = BatchProgress {
            completed: 3,
            total: 4,
            result: &result,
            failed: false,
            stats: &stats,
        };

        assert_eq!(progress.fraction(), 0.75);
    }

    #[test]
    fn test_progress_tracker_shows_orchestrator_counts() {
        let tracker = ProgressTracker::hidden(4);
        let result = QueryResult::answered("b.pdf", "Error: none found in the document");
        let stats = BatchStats {
            documents_answered: 2,
            documents_failed: 0,
            duration: Duration::ZERO,
        };

        tracker.record(&BatchProgress {
            completed: 2,
            total: 4,
            result: &result,
            failed: false,
            stats: &stats,
        });

        assert_eq!(tracker.main_bar.position(), 2);
        assert_eq!(tracker.detail_bar.message(), "Last: b.pdf | Failed: 0");
    }
}
