//! sentrank — extractive sentence summarization.
//!
//! Selects the most important sentences of a plain-text document using one of
//! two interchangeable scoring strategies:
//!
//! - **TextRank**: graph-based relevance propagation over sentence-similarity
//!   edges, analogous to PageRank.
//! - **TF-ISF**: term-frequency / inverse-sentence-frequency term-weight
//!   summation, a document-level analogue of TF-IDF where "documents" are
//!   sentences.
//!
//! The pipeline is a single batch transformation: tokenize → score → select
//! the top K sentences → restore document order. Sentence boundaries are
//! simple punctuation splits (`.`, `!`, `?`) — there is no
//! sentence-boundary disambiguation or multi-language support.
//!
//! # Example
//!
//! ```
//! use sentrank::{Strategy, Summarizer, SummaryLength};
//!
//! let summarizer = Summarizer::new()
//!     .with_strategy(Strategy::TfIsf)
//!     .with_length(SummaryLength::Count(2));
//!
//! let summary = summarizer
//!     .summarize("Cats are great. Dogs are great too. Cats and dogs are pets.")
//!     .unwrap();
//!
//! // Selected sentences come back in document order.
//! assert_eq!(summary.len(), 2);
//! ```
//!
//! The `textrank-sum` and `tfisf-sum` binaries wrap the same pipeline for
//! file-to-file use.

pub mod config;
pub mod error;
pub mod frequency;
pub mod nlp;
pub mod rank;
pub mod selector;
pub mod similarity;
pub mod summarizer;
pub mod types;

pub use config::{Strategy, SummarizerConfig, SummaryLength};
pub use error::SummarizeError;
pub use summarizer::{Summarizer, Summary, SummaryStyle};
pub use types::Sentence;
