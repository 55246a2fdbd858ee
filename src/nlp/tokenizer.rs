//! Sentence and word tokenization.
//!
//! Sentence boundaries are the first occurrence of `.`, `!`, or `?` — no
//! abbreviation handling or other disambiguation. Words are split on
//! whitespace plus a fixed punctuation set, lower-cased, and stop-word
//! filtered.
//!
//! Tokenization never fails: empty or delimiter-free input simply produces
//! fewer (or zero) sentences and words.

use crate::nlp::stopwords::StopwordFilter;
use crate::types::Sentence;

/// Characters that terminate a sentence.
pub const SENTENCE_DELIMITERS: [char; 3] = ['.', '!', '?'];

/// Characters (besides whitespace) that separate words.
const WORD_SEPARATORS: &str = ",.-!?()[]{}:;\"'";

/// Split raw text into sentences in document order.
///
/// Each sentence keeps its terminating delimiter; whitespace between
/// sentences is skipped. A trailing fragment with no delimiter but
/// non-whitespace content is kept as a final sentence. Indices are dense
/// `0..N-1`.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut rest = text.trim_start();

    while let Some(pos) = rest.find(SENTENCE_DELIMITERS) {
        // The delimiters are all single-byte, so pos + 1 is a char boundary.
        let (sentence, tail) = rest.split_at(pos + 1);
        sentences.push(Sentence::new(sentence, sentences.len()));
        rest = tail.trim_start();
    }

    if !rest.is_empty() {
        sentences.push(Sentence::new(rest.trim_end(), sentences.len()));
    }

    sentences
}

/// Split text into normalized words: lower-cased, stop-word filtered, in
/// original order, not deduplicated.
pub fn tokenize_words(text: &str, stopwords: &StopwordFilter) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || WORD_SEPARATORS.contains(c))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .filter(|token| !stopwords.is_stopword(token))
        .collect()
}
