// file: src/utils/logging.rs
// description: tracing subscriber setup and colored console messages for batch output

use crate::pipeline::BatchStats;
use colored::*;
use std::fmt::Display;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logs go to stderr so the results table on stdout stays clean.
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn badge(symbol: ColoredString, msg: impl Display) -> String {
    format!("{} {}", symbol, msg)
}

pub fn format_success(msg: &str) -> String {
    badge("✓".green().bold(), msg.green())
}

pub fn format_error(msg: &str) -> String {
    badge("✗".red().bold(), msg.red())
}

pub fn format_warning(msg: &str) -> String {
    badge("⚠".yellow().bold(), msg.yellow())
}

pub fn format_info(msg: &str) -> String {
    badge("ℹ".blue().bold(), msg)
}

/// Heading printed above each answer, e.g. `[2/5] B.pdf`.
pub fn format_document_header(position: usize, total: usize, document: &str) -> String {
    badge(
        format!("[{}/{}]", position, total).cyan().bold(),
        document.bold(),
    )
}

pub fn format_batch_summary(stats: &BatchStats) -> String {
    if stats.documents_failed == 0 {
        format_success(&format!(
            "All {} document(s) answered in {:.2}s",
            stats.total(),
            stats.duration.as_secs_f64()
        ))
    } else {
        format_warning(&format!(
            "{} of {} request(s) failed",
            stats.documents_failed,
            stats.total()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_helpers_keep_message() {
        colored::control::set_override(false);

        assert_eq!(format_success("done"), "✓ done");
        assert_eq!(format_warning("Please enter a question."), "⚠ Please enter a question.");
        assert_eq!(format_document_header(2, 5, "B.pdf"), "[2/5] B.pdf");
    }

    #[test]
    fn test_format_batch_summary() {
        colored::control::set_override(false);

        let mut stats = BatchStats {
            documents_answered: 2,
            documents_failed: 0,
            duration: Duration::from_millis(1500),
        };
        assert_eq!(format_batch_summary(&stats), "✓ All 2 document(s) answered in 1.50s");

        stats.documents_failed = 1;
        assert_eq!(format_batch_summary(&stats), "⚠ 1 of 3 request(s) failed");
    }
}
