//! Stopword filtering
//!
//! Provides a set-backed stop-word membership test. The default set is the
//! fixed 20-word list the summarizer has always shipped with; custom lists
//! are supported for callers that need different filtering.

use rustc_hash::FxHashSet;

/// The built-in stop-word set.
///
/// Kept as a compatibility contract: similarity and term-weight values depend
/// on exactly which words are dropped during tokenization.
pub const DEFAULT_STOPWORDS: [&str; 20] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "over", "after",
];

/// A filter for removing stopwords from a word stream.
///
/// Membership tests expect already-lower-cased input; the tokenizer
/// lower-cases every token before consulting the filter.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase).
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::from_list(&DEFAULT_STOPWORDS)
    }
}

impl StopwordFilter {
    /// Create a filter with the built-in default set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stopword filter (no filtering).
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove stopwords from the filter.
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check if a word is a stopword. Expects lower-cased input.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Get the number of stopwords in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
