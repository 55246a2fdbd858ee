//! TextRank sentence scoring.
//!
//! Damped score propagation over sentence-similarity edges, analogous to
//! PageRank over a fully-connected sentence graph. The pairwise similarity
//! matrix is computed once up front; each round then reads the previous
//! round's scores from a snapshot buffer, so results do not depend on the
//! order sentences are visited in.

use tracing::debug;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::tokenize_words;
use crate::rank::{ScoreResult, SentenceScorer};
use crate::similarity::SimilarityMatrix;
use crate::types::Sentence;

/// Graph-propagation sentence scorer.
#[derive(Debug, Clone)]
pub struct TextRankScorer {
    /// Damping factor (typically 0.85).
    pub damping: f64,
    /// Number of propagation rounds. Fixed count, no convergence check.
    pub iterations: usize,
}

impl Default for TextRankScorer {
    fn default() -> Self {
        Self {
            damping: 0.85,
            iterations: 20,
        }
    }
}

impl TextRankScorer {
    /// Create a scorer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the number of propagation rounds.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

impl SentenceScorer for TextRankScorer {
    /// Run damped propagation.
    ///
    /// Scores start at 1.0. Each round computes, for every sentence `i`:
    ///
    /// `score(i) = (1 - d) + d * Σ_{j≠i} sim(i, j) * score(j)`
    ///
    /// with all `score(j)` read from the previous round's snapshot.
    fn score(&self, sentences: &[Sentence], stopwords: &StopwordFilter) -> ScoreResult {
        let n = sentences.len();
        if n == 0 {
            return ScoreResult::new(vec![], 0);
        }

        let word_lists: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| tokenize_words(&s.text, stopwords))
            .collect();
        let matrix = SimilarityMatrix::build(&word_lists);
        debug!(num_sentences = n, "built similarity matrix");

        let mut scores = vec![1.0; n];
        let mut new_scores = vec![0.0; n];

        for _ in 0..self.iterations {
            for (i, new_score) in new_scores.iter_mut().enumerate() {
                let mut propagated = 0.0;
                for (j, &score) in scores.iter().enumerate() {
                    if i != j {
                        propagated += matrix.get(i, j) * score;
                    }
                }
                *new_score = (1.0 - self.damping) + self.damping * propagated;
            }
            std::mem::swap(&mut scores, &mut new_scores);
        }

        ScoreResult::new(scores, self.iterations)
    }
}
