//! Emotion classification.
//!
//! Classifiers implement [`EmotionClassifier`]. The engine always goes
//! through a [`FallbackClassifier`]: an optional preferred classifier (for
//! example the HTTP model in [`remote`]) is tried first, and any failure
//! drops back to the keyword lexicon, which cannot fail.

pub mod lexicon;
pub mod remote;

pub use lexicon::{EmotionLexicon, LexiconEmotionClassifier};
pub use remote::HttpEmotionClassifier;

use std::panic::{AssertUnwindSafe, catch_unwind};

use serde::{Deserialize, Serialize};

use crate::error::{EmotionError, EmotionResult};

/// The fixed emotion set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Neutral,
}

impl Emotion {
    /// Every emotion, in profile order.
    pub const ALL: [Emotion; 6] = [
        Self::Joy,
        Self::Sadness,
        Self::Anger,
        Self::Fear,
        Self::Surprise,
        Self::Neutral,
    ];

    /// The emotions a lexicon scores directly (everything but neutral).
    pub const SCORED: [Emotion; 5] = [
        Self::Joy,
        Self::Sadness,
        Self::Anger,
        Self::Fear,
        Self::Surprise,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Sadness => "sadness",
            Self::Anger => "anger",
            Self::Fear => "fear",
            Self::Surprise => "surprise",
            Self::Neutral => "neutral",
        }
    }

    /// Parse a lowercase emotion name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Intensity per emotion, each in [0, 1].
///
/// Values are not normalized: several emotions can be high at once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionProfile {
    pub joy: f64,
    pub sadness: f64,
    pub anger: f64,
    pub fear: f64,
    pub surprise: f64,
    pub neutral: f64,
}

impl Default for EmotionProfile {
    /// Fully neutral.
    fn default() -> Self {
        Self::from_intensities(std::iter::empty())
    }
}

impl EmotionProfile {
    /// Build from scored intensities; neutral is `max(0, 1 - sum)`.
    ///
    /// Each value is clamped to [0, 1]. A `Neutral` entry is ignored.
    pub fn from_intensities(scores: impl IntoIterator<Item = (Emotion, f64)>) -> Self {
        let mut profile = Self {
            joy: 0.0,
            sadness: 0.0,
            anger: 0.0,
            fear: 0.0,
            surprise: 0.0,
            neutral: 0.0,
        };
        for (emotion, value) in scores {
            if emotion != Emotion::Neutral {
                *profile.slot(emotion) = value.clamp(0.0, 1.0);
            }
        }
        let total: f64 = Emotion::SCORED.iter().map(|&e| profile.get(e)).sum();
        profile.neutral = (1.0 - total).max(0.0);
        profile
    }

    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
            Emotion::Anger => self.anger,
            Emotion::Fear => self.fear,
            Emotion::Surprise => self.surprise,
            Emotion::Neutral => self.neutral,
        }
    }

    fn slot(&mut self, emotion: Emotion) -> &mut f64 {
        match emotion {
            Emotion::Joy => &mut self.joy,
            Emotion::Sadness => &mut self.sadness,
            Emotion::Anger => &mut self.anger,
            Emotion::Fear => &mut self.fear,
            Emotion::Surprise => &mut self.surprise,
            Emotion::Neutral => &mut self.neutral,
        }
    }

    /// Override one intensity (clamped to [0, 1]) without touching the rest.
    pub fn with(mut self, emotion: Emotion, value: f64) -> Self {
        *self.slot(emotion) = value.clamp(0.0, 1.0);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.into_iter().map(|e| (e, self.get(e)))
    }

    /// Strongest emotion; ties go to the earlier one in [`Emotion::ALL`].
    pub fn dominant(&self) -> Emotion {
        self.iter()
            .fold((Emotion::Neutral, f64::MIN), |best, (e, v)| {
                if v > best.1 { (e, v) } else { best }
            })
            .0
    }
}

/// A strategy that maps text to an [`EmotionProfile`].
pub trait EmotionClassifier: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn classify(&self, text: &str) -> EmotionResult<EmotionProfile>;
}

/// Try a preferred classifier, fall back to the keyword lexicon.
pub struct FallbackClassifier {
    preferred: Option<Box<dyn EmotionClassifier>>,
    lexicon: LexiconEmotionClassifier,
}

impl FallbackClassifier {
    /// Lexicon only.
    pub fn lexicon_only(lexicon: LexiconEmotionClassifier) -> Self {
        Self {
            preferred: None,
            lexicon,
        }
    }

    pub fn new(preferred: Box<dyn EmotionClassifier>, lexicon: LexiconEmotionClassifier) -> Self {
        Self {
            preferred: Some(preferred),
            lexicon,
        }
    }

    /// Name of the preferred classifier, if one is configured.
    pub fn preferred_name(&self) -> Option<&str> {
        self.preferred.as_deref().map(|c| c.name())
    }

    /// Classify, never failing.
    pub fn profile(&self, text: &str) -> EmotionProfile {
        if let Some(preferred) = &self.preferred {
            let error = match catch_unwind(AssertUnwindSafe(|| preferred.classify(text))) {
                Ok(Ok(profile)) => return profile,
                Ok(Err(e)) => e,
                Err(_) => EmotionError::Panicked {
                    name: preferred.name().to_string(),
                },
            };
            tracing::warn!(
                classifier = preferred.name(),
                error = %error,
                "preferred emotion classifier failed, falling back to lexicon"
            );
        }
        self.lexicon.profile(text)
    }
}

impl EmotionClassifier for FallbackClassifier {
    fn name(&self) -> &str {
        "fallback"
    }

    fn classify(&self, text: &str) -> EmotionResult<EmotionProfile> {
        Ok(self.profile(text))
    }
}

impl std::fmt::Debug for FallbackClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackClassifier")
            .field("preferred", &self.preferred_name())
            .finish_non_exhaustive()
    }
}
