//! TF-ISF sentence scoring.
//!
//! Each sentence's score is the sum of the precomputed TF-ISF weight of
//! every word occurrence in it — repeated words contribute repeatedly. A
//! single pass over the document with hash-keyed weight lookups.

use tracing::debug;

use crate::frequency::TermWeights;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::tokenize_words;
use crate::rank::{ScoreResult, SentenceScorer};
use crate::types::Sentence;

/// Frequency-based sentence scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIsfScorer;

impl TfIsfScorer {
    /// Create a new scorer.
    pub fn new() -> Self {
        Self
    }
}

impl SentenceScorer for TfIsfScorer {
    fn score(&self, sentences: &[Sentence], stopwords: &StopwordFilter) -> ScoreResult {
        let word_lists: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| tokenize_words(&s.text, stopwords))
            .collect();

        let weights = TermWeights::build(&word_lists);
        debug!(num_terms = weights.num_terms(), "scoring sentences");

        let scores = word_lists
            .iter()
            .map(|words| words.iter().map(|w| weights.weight(w)).sum())
            .collect();

        ScoreResult::new(scores, 1)
    }
}
