//! Inter-sentence similarity for the TextRank strategy.
//!
//! Similarity is the number of distinct words two sentences share, scaled by
//! the log of their lengths. [`SimilarityMatrix`] caches all pairwise values
//! up front so the propagation loop never re-tokenizes or re-compares
//! sentences — without the cache the scorer would pay O(iterations × N²)
//! tokenizations.

use rustc_hash::FxHashSet;

/// Shared-vocabulary similarity between two tokenized sentences.
///
/// `|vocab(a) ∩ vocab(b)| / (ln(|a|+1) + ln(|b|+1))`, where `|a|` and `|b|`
/// are token counts (with repeats) and the intersection counts each shared
/// word once. When both sentences are empty the denominator would be
/// `ln 1 + ln 1 = 0`; that case is defined as 0.0.
pub fn similarity(words_a: &[String], words_b: &[String]) -> f64 {
    let denominator = ((words_a.len() + 1) as f64).ln() + ((words_b.len() + 1) as f64).ln();
    if denominator == 0.0 {
        return 0.0;
    }

    let vocab_a: FxHashSet<&str> = words_a.iter().map(String::as_str).collect();
    let vocab_b: FxHashSet<&str> = words_b.iter().map(String::as_str).collect();
    let common = vocab_a.intersection(&vocab_b).count();

    common as f64 / denominator
}

/// Cached pairwise similarity between every pair of sentences.
///
/// Each unordered pair is computed once and mirrored, so the matrix is
/// exactly symmetric. The diagonal is left at 0.0 — propagation never reads
/// a sentence's similarity to itself.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build the matrix from per-sentence word lists.
    pub fn build(word_lists: &[Vec<String>]) -> Self {
        let n = word_lists.len();
        let mut values = vec![0.0; n * n];

        for i in 0..n {
            for j in (i + 1)..n {
                let sim = similarity(&word_lists[i], &word_lists[j]);
                values[i * n + j] = sim;
                values[j * n + i] = sim;
            }
        }

        Self { n, values }
    }

    /// Similarity between sentences `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Number of sentences the matrix covers.
    pub fn num_sentences(&self) -> usize {
        self.n
    }
}
