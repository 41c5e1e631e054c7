// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use per_doc_qa::utils::logging::{
    format_batch_summary, format_document_header, format_error, format_info, format_success,
    format_warning,
};
use per_doc_qa::{
    BatchOrchestrator, BatchReport, BatchRequest, Config, CsvExporter, ProgressTracker, Validator,
};
use std::path::PathBuf;
use tracing::{info, warn};

/// Longest answer printed per row; the CSV always holds the full text.
const MAX_PREVIEW_CHARS: usize = 600;

#[derive(Parser)]
#[command(name = "per_doc_qa")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Ask one question per document of a RAG backend and export the answers")]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Backend base URL; overrides BACKEND_URL and the config file
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a question against each selected document
    Ask {
        #[arg(short, long, default_value = "")]
        question: String,

        /// Document to query; repeat for several
        #[arg(short, long = "document", value_name = "NAME")]
        documents: Vec<String>,

        /// Query every document in the catalog
        #[arg(long)]
        all: bool,

        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[arg(long)]
        no_export: bool,
    },

    /// List the documents in the catalog
    Documents,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    colored::control::set_override(cli.color);
    per_doc_qa::utils::logging::init_logger(cli.color, cli.verbose);

    // A missing file only drops that layer; BACKEND_URL and PER_DOC_QA__*
    // are still read and validated.
    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path()))
    } else {
        warn!(
            "Config file {} not found, using built-in defaults",
            cli.config.display()
        );
        Config::load(None)
    }
    .context("Failed to load configuration")?;

    let config = config
        .with_backend_override(cli.backend_url.as_deref())
        .context("Invalid --backend-url")?;

    match cli.command {
        Commands::Ask {
            question,
            documents,
            all,
            output,
            no_export,
        } => {
            let output = if no_export {
                None
            } else {
                Some(output.unwrap_or_else(|| config.export.output_path.clone()))
            };
            cmd_ask(&config, &question, &documents, all, output, cli.color).await?;
        }
        Commands::Documents => {
            cmd_documents(&config);
        }
    }

    Ok(())
}

async fn cmd_ask(
    config: &Config,
    question: &str,
    documents: &[String],
    all: bool,
    output: Option<PathBuf>,
    color: bool,
) -> Result<()> {
    let selection = config.catalog().select(documents, all)?;

    let request = match BatchRequest::new(question, selection) {
        Ok(request) => request,
        Err(e) if e.is_missing_input() => {
            warn!("{}", e);
            eprintln!("{}", format_warning(&e.to_string()));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let orchestrator =
        BatchOrchestrator::from_config(config).context("Failed to create backend client")?;

    info!("Backend: {}", orchestrator.client().endpoint());

    let report = {
        let progress = ProgressTracker::with_color(request.len(), color);
        orchestrator.run(&request, &progress).await
    };

    print_results(&report);
    eprintln!("{}", format_batch_summary(&report.stats));

    if let Some(path) = output {
        let exporter = CsvExporter::new(path).context("Failed to prepare CSV output")?;
        let summary = exporter
            .export(&report.table)
            .context("Failed to write CSV")?;
        eprintln!(
            "{}",
            format_success(&format!(
                "Saved {} answer(s) to {}",
                summary.rows,
                summary.path.display()
            ))
        );
    }

    Ok(())
}

fn cmd_documents(config: &Config) {
    let catalog = config.catalog();

    eprintln!(
        "{}",
        format_info(&format!("{} document(s) in catalog", catalog.len()))
    );
    for name in catalog.names() {
        println!("{}", name);
    }
}

fn print_results(report: &BatchReport) {
    let total = report.table.len();

    println!("{}", "=".repeat(80));
    for (idx, row) in report.table.iter().enumerate() {
        println!("{}", format_document_header(idx + 1, total, &row.document));

        let preview = Validator::truncate_text(&row.answer, MAX_PREVIEW_CHARS);
        if report.row_failed(idx) {
            println!("   {}", format_error(&preview));
        } else if preview.trim().is_empty() {
            println!("   (empty answer)");
        } else {
            for line in preview.lines() {
                println!("   {}", line);
            }
        }
        println!();
    }
    println!("{}", "=".repeat(80));
}
