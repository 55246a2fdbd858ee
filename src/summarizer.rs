//! Summarization facade.
//!
//! [`Summarizer`] ties the pipeline stages together: tokenize the document,
//! score every sentence with the configured strategy, resolve the target
//! sentence count, select the top sentences, and restore document order.
//! [`Summary`] carries the selection and renders the line-oriented output
//! format.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::config::{Strategy, SummarizerConfig, SummaryLength};
use crate::error::SummarizeError;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::split_sentences;
use crate::rank::textrank::TextRankScorer;
use crate::rank::tfisf::TfIsfScorer;
use crate::rank::SentenceScorer;
use crate::selector::select_top_k;
use crate::types::Sentence;

/// Output formatting for a rendered summary.
///
/// Both styles start with a `Summary:` header and a blank line. The two
/// strategies' command-line tools have always differed in sentence
/// separation, preserved here as a compatibility contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStyle {
    /// Each sentence on its own line (TextRank tool format).
    Lines,
    /// Each sentence followed by a blank line (TF-ISF tool format).
    Spaced,
}

impl SummaryStyle {
    /// The style historically produced by each strategy's tool.
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Textrank => Self::Lines,
            Strategy::TfIsf => Self::Spaced,
        }
    }
}

/// An extractive summary: the selected sentences in document order.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Selected sentences, ascending by original index.
    pub sentences: Vec<Sentence>,
    /// Sentence count of the source document.
    pub num_source_sentences: usize,
}

impl Summary {
    /// Number of sentences in the summary.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the summary is empty.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Render the summary as the line-oriented output format.
    pub fn render(&self, style: SummaryStyle) -> String {
        let mut out = String::from("Summary:\n\n");
        for sentence in &self.sentences {
            out.push_str(&sentence.text);
            out.push('\n');
            if style == SummaryStyle::Spaced {
                out.push('\n');
            }
        }
        out
    }

    /// Write the rendered summary to a sink.
    pub fn write_to(&self, writer: &mut impl Write, style: SummaryStyle) -> io::Result<()> {
        writer.write_all(self.render(style).as_bytes())
    }
}

/// Extractive sentence summarizer.
///
/// ```
/// use sentrank::{Strategy, Summarizer, SummaryLength};
///
/// let summarizer = Summarizer::new()
///     .with_strategy(Strategy::TfIsf)
///     .with_length(SummaryLength::Count(2));
/// let summary = summarizer
///     .summarize("Cats are great. Dogs are great too. Cats and dogs are pets.")
///     .unwrap();
/// assert_eq!(summary.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    stopwords: StopwordFilter,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SummarizerConfig::default())
    }

    /// Create a summarizer from a configuration.
    pub fn with_config(config: SummarizerConfig) -> Self {
        let stopwords = match &config.stopwords {
            Some(words) => {
                let refs: Vec<&str> = words.iter().map(String::as_str).collect();
                StopwordFilter::from_list(&refs)
            }
            None => StopwordFilter::default(),
        };
        Self { config, stopwords }
    }

    /// Set the scoring strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Set the target summary length.
    pub fn with_length(mut self, length: SummaryLength) -> Self {
        self.config.length = length;
        self
    }

    /// Set the TextRank damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.config.damping = damping;
        self
    }

    /// Set the number of TextRank propagation rounds.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize a document.
    ///
    /// Fails only on an invalid length configuration; degenerate input (an
    /// empty document, a zero target length) produces an empty summary.
    pub fn summarize(&self, text: &str) -> Result<Summary, SummarizeError> {
        let mut sentences = split_sentences(text);
        debug!(num_sentences = sentences.len(), "tokenized document");

        // Resolve and validate the target count before any scoring work.
        let k = self.config.length.resolve(sentences.len())?;

        let result = match self.config.strategy {
            Strategy::Textrank => TextRankScorer::new()
                .with_damping(self.config.damping)
                .with_iterations(self.config.iterations)
                .score(&sentences, &self.stopwords),
            Strategy::TfIsf => TfIsfScorer::new().score(&sentences, &self.stopwords),
        };
        for (sentence, &score) in sentences.iter_mut().zip(&result.scores) {
            sentence.score = score;
        }
        debug!(
            strategy = self.config.strategy.as_str(),
            iterations = result.iterations,
            "scored sentences"
        );

        let selected = select_top_k(&sentences, k);
        debug!(selected = selected.len(), target = k, "selected sentences");

        Ok(Summary {
            sentences: selected,
            num_source_sentences: sentences.len(),
        })
    }

    /// Summarize a file on disk, writing the formatted summary to `output`.
    ///
    /// The output style follows the configured strategy. Returns the summary
    /// so callers can report its size.
    pub fn summarize_file(&self, input: &Path, output: &Path) -> Result<Summary, SummarizeError> {
        let text = fs::read_to_string(input).map_err(|source| SummarizeError::Io {
            path: input.to_path_buf(),
            source,
        })?;

        let summary = self.summarize(&text)?;

        let style = SummaryStyle::for_strategy(self.config.strategy);
        fs::write(output, summary.render(style)).map_err(|source| SummarizeError::Io {
            path: output.to_path_buf(),
            source,
        })?;

        Ok(summary)
    }
}
