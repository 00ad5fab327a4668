//! Analysis history.
//!
//! [`AnalysisStore`] persists [`AnalysisResult`]s in an embedded redb
//! database so past analyses can be listed, inspected, summarised and
//! deleted across runs.

pub mod durable;

pub use durable::AnalysisStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::AnalysisResult;
use crate::error::StoreError;
use crate::sentiment::Classification;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Characters of text kept in a [`HistoryEntry`] preview.
pub const PREVIEW_CHARS: usize = 50;

/// A saved analysis with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAnalysis {
    pub id: u64,
    pub stored_at: DateTime<Utc>,
    pub analysis: AnalysisResult,
}

/// Count of stored analyses per classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentDistribution {
    pub fn record(&mut self, classification: Classification) {
        match classification {
            Classification::Positive => self.positive += 1,
            Classification::Neutral => self.neutral += 1,
            Classification::Negative => self.negative += 1,
        }
    }

    pub fn get(&self, classification: Classification) -> usize {
        match classification {
            Classification::Positive => self.positive,
            Classification::Neutral => self.neutral,
            Classification::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// One row of the sentiment timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub score: f64,
    pub classification: Classification,
    pub preview: String,
}

impl HistoryEntry {
    pub fn from_stored(stored: &StoredAnalysis) -> Self {
        Self {
            id: stored.id,
            timestamp: stored.analysis.timestamp,
            score: stored.analysis.sentiment.compound,
            classification: stored.analysis.sentiment.classification,
            preview: preview(&stored.analysis.text),
        }
    }
}

/// First [`PREVIEW_CHARS`] characters, with `...` when cut.
pub fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_on_char_boundaries() {
        assert_eq!(preview("short"), "short");
        let long = "é".repeat(60);
        let p = preview(&long);
        assert_eq!(p.chars().count(), PREVIEW_CHARS + 3);
        assert!(p.ends_with("..."));
        assert_eq!(preview(&"x".repeat(PREVIEW_CHARS)), "x".repeat(PREVIEW_CHARS));
    }

    #[test]
    fn distribution_counts() {
        let mut d = SentimentDistribution::default();
        d.record(Classification::Positive);
        d.record(Classification::Positive);
        d.record(Classification::Negative);
        assert_eq!(d.get(Classification::Positive), 2);
        assert_eq!(d.get(Classification::Neutral), 0);
        assert_eq!(d.total(), 3);
    }
}
