//! Keyword lexicon emotion classifier.
//!
//! Every keyword that occurs anywhere in the lowercased text (as a plain
//! substring, so `unhappy` also contains `happy`) adds the lexicon weight to
//! its emotion, once per keyword. Each emotion is capped at 1.0.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use aho_corasick::AhoCorasick;
use serde::Deserialize;

use super::{Emotion, EmotionClassifier, EmotionProfile};
use crate::error::{EmotionResult, ResourceError, ResourceResult};
use crate::resources::Resources;

#[derive(Debug, Deserialize)]
struct EmotionToml {
    meta: EmotionMeta,
    #[serde(default)]
    keywords: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct EmotionMeta {
    name: String,
    #[allow(dead_code)]
    version: String,
    #[serde(default = "default_weight")]
    weight: f64,
}

fn default_weight() -> f64 {
    0.2
}

#[derive(Debug)]
struct KeywordSet {
    emotion: Emotion,
    keywords: Vec<String>,
    matcher: AhoCorasick,
}

/// Compiled keyword automata, one per emotion.
#[derive(Debug)]
pub struct EmotionLexicon {
    sets: Vec<KeywordSet>,
    weight: f64,
}

impl EmotionLexicon {
    /// Parse the TOML form and build the matchers.
    pub fn parse(toml_str: &str) -> ResourceResult<Self> {
        let parsed: EmotionToml = toml::from_str(toml_str).map_err(|e| ResourceError::Parse {
            resource: "emotion".into(),
            message: e.to_string(),
        })?;

        let mut sets = Vec::with_capacity(parsed.keywords.len());
        for (name, words) in parsed.keywords {
            let emotion = Emotion::parse(&name)
                .filter(|e| *e != Emotion::Neutral)
                .ok_or_else(|| ResourceError::Parse {
                    resource: parsed.meta.name.clone(),
                    message: format!("unknown emotion {name:?}"),
                })?;
            let keywords: Vec<String> = words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect();
            if keywords.is_empty() {
                continue;
            }
            let matcher = AhoCorasick::new(&keywords).map_err(|e| ResourceError::Matcher {
                emotion: name.clone(),
                message: e.to_string(),
            })?;
            sets.push(KeywordSet {
                emotion,
                keywords,
                matcher,
            });
        }

        if sets.is_empty() {
            return Err(ResourceError::Empty {
                resource: parsed.meta.name,
            });
        }
        sets.sort_by_key(|s| s.emotion);
        tracing::debug!(
            emotions = sets.len(),
            weight = parsed.meta.weight,
            "compiled emotion lexicon"
        );
        Ok(Self {
            sets,
            weight: parsed.meta.weight,
        })
    }

    /// Keywords configured for `emotion`.
    pub fn keywords(&self, emotion: Emotion) -> &[String] {
        self.sets
            .iter()
            .find(|s| s.emotion == emotion)
            .map(|s| s.keywords.as_slice())
            .unwrap_or(&[])
    }

    /// Score `text`.
    pub fn profile(&self, text: &str) -> EmotionProfile {
        let lowered = text.to_lowercase();
        EmotionProfile::from_intensities(self.sets.iter().map(|set| {
            let distinct: HashSet<_> = set
                .matcher
                .find_overlapping_iter(&lowered)
                .map(|m| m.pattern())
                .collect();
            (set.emotion, (distinct.len() as f64 * self.weight).min(1.0))
        }))
    }
}

/// [`EmotionClassifier`] over the shared keyword lexicon.
#[derive(Clone)]
pub struct LexiconEmotionClassifier {
    resources: Arc<Resources>,
}

impl LexiconEmotionClassifier {
    pub fn new(resources: Arc<Resources>) -> Self {
        Self { resources }
    }

    pub fn profile(&self, text: &str) -> EmotionProfile {
        self.resources.emotion_lexicon().profile(text)
    }
}

impl EmotionClassifier for LexiconEmotionClassifier {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn classify(&self, text: &str) -> EmotionResult<EmotionProfile> {
        Ok(self.profile(text))
    }
}
