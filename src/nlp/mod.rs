//! Natural language processing components.
//!
//! Sentence/word tokenization and stop-word filtering.

pub mod stopwords;
pub mod tokenizer;
