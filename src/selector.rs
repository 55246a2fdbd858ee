//! Top-K sentence selection with document-order restoration.

use crate::types::Sentence;

/// Select the `k` highest-scoring sentences and return them in document
/// order.
///
/// Ranking is by descending score with ascending original index as the
/// tie-break, so repeated runs on identical input always pick the same
/// sentences. `k` is clamped to the sentence count; `k == 0` or an empty
/// input yields an empty selection, not an error.
pub fn select_top_k(sentences: &[Sentence], k: usize) -> Vec<Sentence> {
    if sentences.is_empty() || k == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<&Sentence> = sentences.iter().collect();
    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.index.cmp(&b.index))
    });

    let k = k.min(ranked.len());
    let mut selected: Vec<Sentence> = ranked[..k].iter().map(|s| (*s).clone()).collect();
    selected.sort_by_key(|s| s.index);
    selected
}
