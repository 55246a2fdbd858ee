//! Term-frequency / inverse-sentence-frequency weighting.
//!
//! TF-ISF is the sentence-level analogue of TF-IDF: "documents" are the
//! sentences of one input document. A term's `count` is its occurrence count
//! over the whole document word stream — not the number of sentences it
//! appears in. That is the historical behavior of this scheme and is
//! preserved: a term whose count equals the sentence count weighs exactly
//! zero, and a term occurring more often than there are sentences weighs
//! negative.

use rustc_hash::FxHashMap;

use tracing::debug;

/// Statistics for one unique normalized term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermStat {
    /// Occurrences across the whole document word stream.
    pub count: usize,
    /// Precomputed TF-ISF weight: `(count / n) * ln(n / count)` for a
    /// document of `n` sentences.
    pub weight: f64,
}

/// Hash-keyed table of per-term statistics for one document.
///
/// Weights are computed once, after all counts are final, and are read-only
/// afterward.
#[derive(Debug, Clone, Default)]
pub struct TermWeights {
    stats: FxHashMap<String, TermStat>,
    num_sentences: usize,
}

impl TermWeights {
    /// Build the table from per-sentence word lists.
    pub fn build(sentence_words: &[Vec<String>]) -> Self {
        let num_sentences = sentence_words.len();

        let mut stats: FxHashMap<String, TermStat> = FxHashMap::default();
        for words in sentence_words {
            for word in words {
                stats
                    .entry(word.clone())
                    .or_insert(TermStat {
                        count: 0,
                        weight: 0.0,
                    })
                    .count += 1;
            }
        }

        // Counts are final; num_sentences > 0 whenever any term exists, and
        // every count is >= 1, so neither ratio can hit ln(0).
        let n = num_sentences as f64;
        for stat in stats.values_mut() {
            let tf = stat.count as f64 / n;
            let isf = (n / stat.count as f64).ln();
            stat.weight = tf * isf;
        }

        debug!(
            num_terms = stats.len(),
            num_sentences, "built term weight table"
        );

        Self {
            stats,
            num_sentences,
        }
    }

    /// Weight for a term; unknown terms weigh 0.0.
    pub fn weight(&self, term: &str) -> f64 {
        self.stats.get(term).map(|s| s.weight).unwrap_or(0.0)
    }

    /// Full statistics for a term, if present.
    pub fn stat(&self, term: &str) -> Option<&TermStat> {
        self.stats.get(term)
    }

    /// Number of unique terms.
    pub fn num_terms(&self) -> usize {
        self.stats.len()
    }

    /// Number of sentences the table was built from.
    pub fn num_sentences(&self) -> usize {
        self.num_sentences
    }

    /// Check if the table has no terms.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
