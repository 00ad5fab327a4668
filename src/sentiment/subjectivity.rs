//! Heuristic polarity and subjectivity estimator.
//!
//! Each lexicon word found in the text is an *assessment*. An intensifier
//! immediately before it (other words reset the pending multiplier) scales
//! both values; a negation within `negation_window` tokens before it
//! multiplies the polarity by `negation_factor`. The estimate is the mean
//! over all assessments, or zero when there are none.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{ResourceError, ResourceResult};
use crate::text::{Tag, tokenize};

/// Polarity in [-1, 1] and subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityEstimate {
    pub polarity: f64,
    pub subjectivity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LexiconMeta {
    pub name: String,
    pub version: String,
    #[serde(default = "default_negation_window")]
    pub negation_window: usize,
    #[serde(default = "default_negation_factor")]
    pub negation_factor: f64,
}

fn default_negation_window() -> usize {
    3
}

fn default_negation_factor() -> f64 {
    -0.5
}

/// One lexicon entry.
#[derive(Debug, Clone, Deserialize)]
pub struct WordEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    /// Part-of-speech hint for the tagger; adjectives when absent.
    #[serde(default)]
    pub pos: Option<String>,
}

/// Polarity/subjectivity lexicon as stored in `data/lexicon/subjectivity.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectivityLexicon {
    #[serde(default)]
    pub negations: Vec<String>,
    pub meta: LexiconMeta,
    #[serde(default)]
    pub intensifiers: HashMap<String, f64>,
    #[serde(default)]
    pub words: HashMap<String, WordEntry>,
}

impl SubjectivityLexicon {
    /// Parse and validate the TOML form.
    pub fn parse(toml_str: &str) -> ResourceResult<Self> {
        let lexicon: Self = toml::from_str(toml_str).map_err(|e| ResourceError::Parse {
            resource: "subjectivity".into(),
            message: e.to_string(),
        })?;
        if lexicon.words.is_empty() {
            return Err(ResourceError::Empty {
                resource: lexicon.meta.name,
            });
        }
        let unknown_pos = lexicon.words.iter().find_map(|(word, entry)| {
            entry
                .pos
                .as_deref()
                .filter(|pos| Tag::parse(pos).is_none())
                .map(|pos| format!("unknown part-of-speech tag {pos:?} for {word:?}"))
        });
        if let Some(message) = unknown_pos {
            return Err(ResourceError::Parse {
                resource: lexicon.meta.name,
                message,
            });
        }
        Ok(lexicon)
    }

    /// Open-class tagger hints: every entry, tagged with its `pos` (or `JJ`).
    pub fn tagger_hints(&self) -> HashMap<String, Tag> {
        self.words
            .iter()
            .map(|(word, entry)| {
                let tag = entry.pos.as_deref().and_then(Tag::parse).unwrap_or(Tag::JJ);
                (word.to_lowercase(), tag)
            })
            .collect()
    }
}

/// The estimator itself; immutable after construction.
#[derive(Debug, Clone)]
pub struct SubjectivityEstimator {
    words: HashMap<String, WordEntry>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
    negation_window: usize,
    negation_factor: f64,
}

impl SubjectivityEstimator {
    pub fn new(lexicon: &SubjectivityLexicon) -> Self {
        Self {
            words: lexicon
                .words
                .iter()
                .map(|(w, e)| (w.to_lowercase(), e.clone()))
                .collect(),
            intensifiers: lexicon
                .intensifiers
                .iter()
                .map(|(w, m)| (w.to_lowercase(), *m))
                .collect(),
            negations: lexicon.negations.iter().map(|w| w.to_lowercase()).collect(),
            negation_window: lexicon.meta.negation_window,
            negation_factor: lexicon.meta.negation_factor,
        }
    }

    pub fn estimate(&self, text: &str) -> PolarityEstimate {
        let mut assessments: Vec<(f64, f64)> = Vec::new();
        let mut intensity: Option<f64> = None;
        let mut since_negation: Option<usize> = None;

        for token in tokenize(text) {
            let token = token.to_lowercase();

            if self.negations.contains(&token) {
                since_negation = Some(0);
                continue;
            }

            if let Some(&multiplier) = self.intensifiers.get(&token) {
                intensity = Some(intensity.unwrap_or(1.0) * multiplier);
            } else if let Some(entry) = self.words.get(&token) {
                let scale = intensity.take().unwrap_or(1.0);
                let mut polarity = entry.polarity * scale;
                if since_negation.is_some_and(|n| n < self.negation_window) {
                    polarity *= self.negation_factor;
                }
                assessments.push((
                    polarity.clamp(-1.0, 1.0),
                    (entry.subjectivity * scale).clamp(0.0, 1.0),
                ));
            } else if token.chars().any(char::is_alphabetic) {
                intensity = None;
            }

            since_negation = since_negation.map(|n| n + 1);
        }

        if assessments.is_empty() {
            return PolarityEstimate::default();
        }
        let n = assessments.len() as f64;
        let polarity: f64 = assessments.iter().map(|(p, _)| p).sum::<f64>() / n;
        let subjectivity: f64 = assessments.iter().map(|(_, s)| s).sum::<f64>() / n;
        PolarityEstimate {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
negations = ["not", "n't", "never"]

[meta]
name = "sample"
version = "0.1.0"

[intensifiers]
very = 1.5

[words]
good = { polarity = 0.6, subjectivity = 0.5 }
bad = { polarity = -0.6, subjectivity = 0.6 }
love = { polarity = 0.5, subjectivity = 0.6, pos = "VB" }
"#;

    fn estimator() -> SubjectivityEstimator {
        SubjectivityEstimator::new(&SubjectivityLexicon::parse(SAMPLE).unwrap())
    }

    #[test]
    fn no_assessments_is_zero() {
        let est = estimator();
        assert_eq!(est.estimate(""), PolarityEstimate::default());
        assert_eq!(est.estimate("The train left at noon."), PolarityEstimate::default());
    }

    #[test]
    fn mean_over_assessments() {
        let e = estimator().estimate("good food, bad service");
        assert!(e.polarity.abs() < 1e-9);
        assert!((e.subjectivity - 0.55).abs() < 1e-9);
    }

    #[test]
    fn intensifier_scales_next_word_only() {
        let est = estimator();
        assert!((est.estimate("very good").polarity - 0.9).abs() < 1e-9);
        assert!((est.estimate("very nice good").polarity - 0.6).abs() < 1e-9);
    }

    #[test]
    fn negation_within_window_flips_and_damps() {
        let est = estimator();
        assert!((est.estimate("not good").polarity + 0.3).abs() < 1e-9);
        assert!((est.estimate("it was n't very good").polarity + 0.45).abs() < 1e-9);
        // Out of window.
        assert!((est.estimate("not that it matters, good").polarity - 0.6).abs() < 1e-9);
    }

    #[test]
    fn values_stay_in_range() {
        let e = estimator().estimate("very very very good");
        assert_eq!(e.polarity, 1.0);
        assert!(e.subjectivity <= 1.0);
    }

    #[test]
    fn tagger_hints_default_to_adjective() {
        let lexicon = SubjectivityLexicon::parse(SAMPLE).unwrap();
        let hints = lexicon.tagger_hints();
        assert_eq!(hints["good"], Tag::JJ);
        assert_eq!(hints["love"], Tag::VB);
    }

    #[test]
    fn invalid_lexicons_are_rejected() {
        assert!(matches!(
            SubjectivityLexicon::parse("[meta]\nname = \"x\"\nversion = \"1\"\n"),
            Err(ResourceError::Empty { .. })
        ));
        assert!(matches!(
            SubjectivityLexicon::parse("not toml ["),
            Err(ResourceError::Parse { .. })
        ));
        let bad_pos = "[meta]\nname = \"x\"\nversion = \"1\"\n[words]\nfoo = { polarity = 0.1, subjectivity = 0.1, pos = \"XX\" }\n";
        assert!(matches!(
            SubjectivityLexicon::parse(bad_pos),
            Err(ResourceError::Parse { .. })
        ));
    }

    #[test]
    fn bundled_lexicon_parses() {
        let lexicon =
            SubjectivityLexicon::parse(include_str!("../../data/lexicon/subjectivity.toml"))
                .unwrap();
        assert!(lexicon.words.contains_key("great"));
        assert!(lexicon.negations.iter().any(|n| n == "n't"));
        assert_eq!(lexicon.meta.negation_window, 3);
    }
}
