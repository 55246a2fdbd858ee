//! Core data types shared across the pipeline.

/// A sentence extracted from the source document.
///
/// Identity is the `index` field: indices are unique, dense (`0..N-1`), and
/// assigned in document order during tokenization. They stay stable across
/// ranking sorts so the selector can restore document order afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// The sentence text, including its terminating delimiter when present.
    pub text: String,
    /// Position of the sentence in the source document.
    pub index: usize,
    /// Importance score. Written by the scorer; 0.0 until then.
    pub score: f64,
}

impl Sentence {
    /// Create a sentence at the given document position with a zero score.
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
            score: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sentence_has_zero_score() {
        let s = Sentence::new("Hello world.", 3);
        assert_eq!(s.text, "Hello world.");
        assert_eq!(s.index, 3);
        assert_eq!(s.score, 0.0);
    }
}
