//! Summarizer configuration.
//!
//! [`SummarizerConfig`] models the knobs that were embedded literals in the
//! original tool — damping factor, iteration count, stop-word set — plus the
//! strategy selection and the summary length control. All types serialize to
//! a simple JSON shape:
//!
//! ```json
//! {
//!   "strategy": "textrank",
//!   "damping": 0.85,
//!   "iterations": 20,
//!   "length": { "percentage": 25.0 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SummarizeError;

/// Sentence-scoring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Graph-based relevance propagation over sentence-similarity edges.
    Textrank,
    /// Term-frequency / inverse-sentence-frequency weight summation.
    TfIsf,
}

impl Strategy {
    /// Returns the user-facing name used in JSON and log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Textrank => "textrank",
            Self::TfIsf => "tf_isf",
        }
    }
}

/// Target size of the summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryLength {
    /// Percentage of the source sentence count, 0–100. The sentence count is
    /// rounded up, so any non-zero percentage of a non-empty document selects
    /// at least one sentence.
    Percentage(f64),
    /// Absolute sentence count.
    Count(usize),
}

impl SummaryLength {
    /// Resolve to a concrete sentence count for a document of `num_sentences`.
    ///
    /// The result is clamped to `[0, num_sentences]`. A percentage outside
    /// 0–100 is rejected before any scoring work happens.
    pub fn resolve(&self, num_sentences: usize) -> Result<usize, SummarizeError> {
        match *self {
            SummaryLength::Percentage(pct) => {
                if !(0.0..=100.0).contains(&pct) {
                    return Err(SummarizeError::InvalidPercentage(pct));
                }
                let k = (num_sentences as f64 * pct / 100.0).ceil() as usize;
                Ok(k.min(num_sentences))
            }
            SummaryLength::Count(k) => Ok(k.min(num_sentences)),
        }
    }
}

/// Configuration for a [`crate::Summarizer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Which scoring strategy to run.
    #[serde(default = "default_strategy")]
    pub strategy: Strategy,

    /// Damping factor for TextRank propagation.
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Number of TextRank propagation rounds. Fixed count, no convergence
    /// check.
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Custom stop-word list. `None` uses the built-in default set.
    #[serde(default)]
    pub stopwords: Option<Vec<String>>,

    /// Target summary size.
    #[serde(default = "default_length")]
    pub length: SummaryLength,
}

fn default_strategy() -> Strategy {
    Strategy::Textrank
}

fn default_damping() -> f64 {
    0.85
}

fn default_iterations() -> usize {
    20
}

fn default_length() -> SummaryLength {
    SummaryLength::Count(3)
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            damping: default_damping(),
            iterations: default_iterations(),
            stopwords: None,
            length: default_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = SummarizerConfig::default();
        assert_eq!(cfg.strategy, Strategy::Textrank);
        assert_eq!(cfg.damping, 0.85);
        assert_eq!(cfg.iterations, 20);
        assert!(cfg.stopwords.is_none());
        assert_eq!(cfg.length, SummaryLength::Count(3));
    }

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{}"#;
        let cfg: SummarizerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.strategy, Strategy::Textrank);
        assert_eq!(cfg.iterations, 20);
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "strategy": "tf_isf",
            "damping": 0.9,
            "iterations": 10,
            "stopwords": ["foo", "bar"],
            "length": { "percentage": 30.0 }
        }"#;
        let cfg: SummarizerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.strategy, Strategy::TfIsf);
        assert_eq!(cfg.damping, 0.9);
        assert_eq!(cfg.iterations, 10);
        assert_eq!(cfg.stopwords.as_deref(), Some(&["foo".to_string(), "bar".to_string()][..]));
        assert_eq!(cfg.length, SummaryLength::Percentage(30.0));
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = r#"{"strategy":"textrank","length":{"count":5}}"#;
        let cfg: SummarizerConfig = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&cfg).unwrap();
        assert_eq!(back["strategy"], "textrank");
        assert_eq!(back["length"]["count"], 5);
    }

    #[test]
    fn test_resolve_percentage_rounds_up() {
        // ceil(10 * 25 / 100) = 3
        assert_eq!(SummaryLength::Percentage(25.0).resolve(10).unwrap(), 3);
        // ceil(3 * 1 / 100) = 1: any non-zero percentage selects something
        assert_eq!(SummaryLength::Percentage(1.0).resolve(3).unwrap(), 1);
        assert_eq!(SummaryLength::Percentage(100.0).resolve(7).unwrap(), 7);
        assert_eq!(SummaryLength::Percentage(0.0).resolve(7).unwrap(), 0);
    }

    #[test]
    fn test_resolve_count_clamps() {
        assert_eq!(SummaryLength::Count(2).resolve(10).unwrap(), 2);
        assert_eq!(SummaryLength::Count(20).resolve(10).unwrap(), 10);
        assert_eq!(SummaryLength::Count(0).resolve(10).unwrap(), 0);
        assert_eq!(SummaryLength::Count(5).resolve(0).unwrap(), 0);
    }

    #[test]
    fn test_resolve_rejects_out_of_range_percentage() {
        assert!(matches!(
            SummaryLength::Percentage(150.0).resolve(10),
            Err(SummarizeError::InvalidPercentage(p)) if p == 150.0
        ));
        assert!(SummaryLength::Percentage(-1.0).resolve(10).is_err());
    }

    #[test]
    fn test_strategy_as_str() {
        assert_eq!(Strategy::Textrank.as_str(), "textrank");
        assert_eq!(Strategy::TfIsf.as_str(), "tf_isf");
    }
}
