//! Document and sentence level sentiment.
//!
//! Two independent scorers feed the [`SentimentAggregator`]:
//!
//! - [`LexiconScorer`]: VADER valence lexicon with its negation and
//!   intensifier rules, giving pos/neg/neu proportions and a compound value
//! - [`SubjectivityEstimator`]: adjective-centred polarity/subjectivity
//!   heuristic over the bundled TOML lexicon
//!
//! The blended compound is classified with fixed thresholds.

pub mod aggregate;
pub mod lexicon;
pub mod subjectivity;

pub use aggregate::SentimentAggregator;
pub use lexicon::{LexiconScorer, PolarityScores};
pub use subjectivity::{PolarityEstimate, SubjectivityEstimator, SubjectivityLexicon};

use serde::{Deserialize, Serialize};

/// Compound values at or above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound values at or below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Positive,
    Neutral,
    Negative,
}

impl Classification {
    /// Classify a compound value.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Confidence in a classification: `min(1, |compound| + 0.5)`.
pub fn confidence(compound: f64) -> f64 {
    (compound.abs() + 0.5).min(1.0)
}

/// Full sentiment reading for a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Blended polarity in [-1, 1].
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    /// Opinion-vs-fact leaning in [0, 1].
    pub subjectivity: f64,
    pub classification: Classification,
    /// In [0.5, 1].
    pub confidence: f64,
}

impl SentimentScore {
    /// Blend the two scorer outputs.
    pub fn from_parts(lexicon: PolarityScores, estimate: PolarityEstimate) -> Self {
        let compound = ((lexicon.compound + estimate.polarity) / 2.0).clamp(-1.0, 1.0);
        Self {
            compound,
            positive: lexicon.positive,
            negative: lexicon.negative,
            neutral: lexicon.neutral,
            subjectivity: estimate.subjectivity,
            classification: Classification::from_compound(compound),
            confidence: confidence(compound),
        }
    }
}
