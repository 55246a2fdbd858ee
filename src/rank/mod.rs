//! Sentence scoring strategies.
//!
//! Two interchangeable scorers sit behind the [`SentenceScorer`] trait:
//! graph-based propagation ([`textrank::TextRankScorer`]) and term-weight
//! summation ([`tfisf::TfIsfScorer`]). Both read the sentence list plus the
//! stop-word filter and produce a [`ScoreResult`] indexed by sentence
//! position.

pub mod textrank;
pub mod tfisf;

use crate::nlp::stopwords::StopwordFilter;
use crate::types::Sentence;

/// Result of a scoring pass.
#[derive(Debug, Clone)]
pub struct ScoreResult {
    /// Scores for each sentence (indexed by document position).
    pub scores: Vec<f64>,
    /// Number of passes performed (propagation rounds for TextRank, 1 for
    /// TF-ISF).
    pub iterations: usize,
}

impl ScoreResult {
    /// Create a new score result.
    pub fn new(scores: Vec<f64>, iterations: usize) -> Self {
        Self { scores, iterations }
    }

    /// Get the score for a specific sentence.
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }
}

/// A sentence-scoring strategy.
pub trait SentenceScorer {
    /// Score every sentence of the document.
    ///
    /// The returned scores are positionally aligned with `sentences`. Must
    /// not fail: degenerate input (no sentences, sentences without words)
    /// produces an empty or low-signal result instead.
    fn score(&self, sentences: &[Sentence], stopwords: &StopwordFilter) -> ScoreResult;
}
