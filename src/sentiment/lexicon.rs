//! VADER lexicon polarity scorer.

use serde::{Deserialize, Serialize};
use vader_sentiment::SentimentIntensityAnalyzer;

/// Normalized proportions and compound polarity from the VADER lexicon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    /// In [-1, 1].
    pub compound: f64,
}

/// Thread-safe wrapper around the VADER analyzer.
pub struct LexiconScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Score `text`. Blank text scores all zeros.
    pub fn score(&self, text: &str) -> PolarityScores {
        if text.trim().is_empty() {
            return PolarityScores::default();
        }
        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        PolarityScores {
            positive: get("pos").clamp(0.0, 1.0),
            negative: get("neg").clamp(0.0, 1.0),
            neutral: get("neu").clamp(0.0, 1.0),
            compound: get("compound").clamp(-1.0, 1.0),
        }
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LexiconScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexiconScorer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_zero() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.score(""), PolarityScores::default());
        assert_eq!(scorer.score("  \n\t"), PolarityScores::default());
    }

    #[test]
    fn polar_words_move_the_compound() {
        let scorer = LexiconScorer::new();
        assert!(scorer.score("This is wonderful and I love it").compound > 0.5);
        assert!(scorer.score("This is terrible and I hate it").compound < -0.5);
    }

    #[test]
    fn negation_flips_polarity() {
        let scorer = LexiconScorer::new();
        let plain = scorer.score("The movie was good").compound;
        let negated = scorer.score("The movie was not good").compound;
        assert!(plain > 0.0);
        assert!(negated < 0.0);
    }

    #[test]
    fn proportions_are_bounded() {
        let scorer = LexiconScorer::new();
        let s = scorer.score("Great food, awful parking, ordinary prices.");
        for v in [s.positive, s.negative, s.neutral] {
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
