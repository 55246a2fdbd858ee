//! File-to-file summarization with the TF-ISF strategy.
//!
//! ```text
//! tfisf-sum <INPUT> <OUTPUT> <COUNT>
//! ```
//!
//! The summary keeps the `COUNT` highest-weighted sentences (clamped to the
//! document size). A wrong argument count prints usage and exits non-zero.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sentrank::{Strategy, Summarizer, SummarizerConfig, SummaryLength};

/// Extractive summarization using TF-ISF term weighting.
#[derive(Parser, Debug)]
#[command(name = "tfisf-sum", version, about)]
struct Args {
    /// Input text file.
    input: PathBuf,
    /// Output summary file.
    output: PathBuf,
    /// Number of sentences to keep.
    count: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = SummarizerConfig {
        strategy: Strategy::TfIsf,
        length: SummaryLength::Count(args.count),
        ..SummarizerConfig::default()
    };
    let summary = Summarizer::with_config(config)
        .summarize_file(&args.input, &args.output)
        .with_context(|| format!("failed to summarize {}", args.input.display()))?;

    println!("Summary written to {}", args.output.display());
    println!("Total sentences in summary: {}", summary.len());
    Ok(())
}
