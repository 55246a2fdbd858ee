//! File-to-file summarization with the TextRank strategy.
//!
//! ```text
//! textrank-sum <INPUT> <OUTPUT> <PERCENTAGE>
//! ```
//!
//! The summary keeps `ceil(N * percentage / 100)` of the document's N
//! sentences. A wrong argument count prints usage and exits non-zero.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sentrank::{Strategy, Summarizer, SummarizerConfig, SummaryLength};

/// Extractive summarization using TextRank graph propagation.
#[derive(Parser, Debug)]
#[command(name = "textrank-sum", version, about)]
struct Args {
    /// Input text file.
    input: PathBuf,
    /// Output summary file.
    output: PathBuf,
    /// Summary length as a percentage of the source sentence count (0-100).
    percentage: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = SummarizerConfig {
        strategy: Strategy::Textrank,
        length: SummaryLength::Percentage(args.percentage),
        ..SummarizerConfig::default()
    };
    let summary = Summarizer::with_config(config)
        .summarize_file(&args.input, &args.output)
        .with_context(|| format!("failed to summarize {}", args.input.display()))?;

    println!("Summary written to {}", args.output.display());
    println!("Total sentences in summary: {}", summary.len());
    Ok(())
}
