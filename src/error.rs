//! Error types for the summarization pipeline.
//!
//! Degenerate inputs (empty documents, sentences with no words, a zero
//! summary length) are not errors — they produce an empty summary. Errors are
//! limited to the I/O boundary and invalid length arguments.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the summarization pipeline.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Reading the input document or writing the summary failed.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A summary percentage outside the accepted 0–100 range.
    #[error("summary percentage must be between 0 and 100, got {0}")]
    InvalidPercentage(f64),
}
