//! Engine facade: the public analysis API.
//!
//! The `Analyzer` owns the shared [`Resources`] handle and one instance of
//! each component. Every call is a pure function of its input; nothing is
//! mutated between calls, so an `Analyzer` can be shared across threads.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::aspect::{Aspect, AspectExtractor, AspectResolver};
use crate::config::AnalyzerConfig;
use crate::emotion::{
    EmotionClassifier, EmotionProfile, FallbackClassifier, HttpEmotionClassifier,
    LexiconEmotionClassifier,
};
use crate::error::SentiResult;
use crate::resources::Resources;
use crate::sentiment::{SentimentAggregator, SentimentScore};

/// Everything known about one analysed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub sentiment: SentimentScore,
    pub emotions: EmotionProfile,
    pub aspects: Vec<Aspect>,
}

/// Sentiment, emotion and aspect analyzer.
#[derive(Debug)]
pub struct Analyzer {
    resources: Arc<Resources>,
    aggregator: SentimentAggregator,
    emotions: FallbackClassifier,
    extractor: AspectExtractor,
    resolver: AspectResolver,
}

impl Analyzer {
    /// Load resources and build the analyzer described by `config`.
    ///
    /// Fails only if a lexicon cannot be loaded. An unreachable emotion
    /// endpoint is not detected here; it degrades per call instead.
    pub fn new(config: &AnalyzerConfig) -> SentiResult<Self> {
        let resources = Arc::new(Resources::load(config)?);
        let analyzer = Self::with_resources(resources);
        Ok(match HttpEmotionClassifier::from_config(&config.emotion) {
            Some(remote) => {
                tracing::info!(endpoint = remote.endpoint(), "using model-backed emotion classifier");
                analyzer.with_emotion_classifier(Box::new(remote))
            }
            None => analyzer,
        })
    }

    /// Analyzer over already-loaded resources, lexicon emotions only.
    pub fn with_resources(resources: Arc<Resources>) -> Self {
        Self {
            aggregator: SentimentAggregator::new(Arc::clone(&resources)),
            emotions: FallbackClassifier::lexicon_only(LexiconEmotionClassifier::new(
                Arc::clone(&resources),
            )),
            extractor: AspectExtractor::new(Arc::clone(&resources)),
            resolver: AspectResolver::new(Arc::clone(&resources)),
            resources,
        }
    }

    /// Try `preferred` before the keyword lexicon for emotions.
    pub fn with_emotion_classifier(mut self, preferred: Box<dyn EmotionClassifier>) -> Self {
        self.emotions = FallbackClassifier::new(
            preferred,
            LexiconEmotionClassifier::new(Arc::clone(&self.resources)),
        );
        self
    }

    pub fn resources(&self) -> &Arc<Resources> {
        &self.resources
    }

    pub fn analyze_sentiment(&self, text: &str) -> SentimentScore {
        self.aggregator.score(text)
    }

    pub fn analyze_emotions(&self, text: &str) -> EmotionProfile {
        self.emotions.profile(text)
    }

    pub fn analyze_aspects(&self, text: &str) -> Vec<Aspect> {
        let terms = self.extractor.extract(text);
        self.resolver.resolve(text, &terms)
    }

    /// Full analysis stamped with the current time.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.analyze_at(text, Utc::now())
    }

    /// Full analysis with an explicit timestamp.
    pub fn analyze_at(&self, text: &str, timestamp: DateTime<Utc>) -> AnalysisResult {
        let result = AnalysisResult {
            text: text.to_string(),
            timestamp,
            sentiment: self.analyze_sentiment(text),
            emotions: self.analyze_emotions(text),
            aspects: self.analyze_aspects(text),
        };
        tracing::debug!(
            chars = text.chars().count(),
            classification = %result.sentiment.classification,
            compound = result.sentiment.compound,
            aspects = result.aspects.len(),
            "analysed text"
        );
        result
    }

    /// Analyse many texts in parallel; result `i` belongs to `texts[i]`.
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<AnalysisResult> {
        tracing::info!(count = texts.len(), "starting batch analysis");
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::Emotion;
    use crate::error::EmotionResult;
    use crate::sentiment::Classification;

    fn analyzer() -> Analyzer {
        Analyzer::new(&AnalyzerConfig::default()).unwrap()
    }

    #[test]
    fn empty_text_is_neutral_without_aspects() {
        let result = analyzer().analyze("");
        assert_eq!(result.sentiment.classification, Classification::Neutral);
        assert_eq!(result.sentiment.compound, 0.0);
        assert_eq!(result.emotions.neutral, 1.0);
        assert!(result.aspects.is_empty());
    }

    #[test]
    fn analyze_at_is_deterministic() {
        let a = analyzer();
        let ts = Utc::now();
        let text = "The screen is gorgeous but the battery drains fast; I'm disappointed.";
        assert_eq!(a.analyze_at(text, ts), a.analyze_at(text, ts));
    }

    #[test]
    fn batch_preserves_order() {
        let a = analyzer();
        let texts = ["I love it!", "", "This is terrible.", "This is fine."];
        let results = a.analyze_batch(&texts);
        assert_eq!(results.len(), texts.len());
        for (text, result) in texts.iter().zip(&results) {
            assert_eq!(&result.text, text);
        }
        assert_eq!(results[0].sentiment.classification, Classification::Positive);
        assert_eq!(results[2].sentiment.classification, Classification::Negative);
    }

    struct Surprised;

    impl EmotionClassifier for Surprised {
        fn name(&self) -> &str {
            "surprised"
        }

        fn classify(&self, _text: &str) -> EmotionResult<EmotionProfile> {
            Ok(EmotionProfile::from_intensities([(Emotion::Surprise, 1.0)]))
        }
    }

    #[test]
    fn preferred_emotion_classifier_is_used() {
        let a = analyzer().with_emotion_classifier(Box::new(Surprised));
        assert_eq!(a.analyze_emotions("plain words").dominant(), Emotion::Surprise);
    }

    #[test]
    fn unreachable_endpoint_degrades_to_lexicon() {
        let mut config = AnalyzerConfig::default();
        config.emotion.endpoint = Some("http://127.0.0.1:9/classify".into());
        config.emotion.timeout_secs = 1;
        let a = Analyzer::new(&config).unwrap();
        let p = a.analyze_emotions("I was so happy and excited");
        assert!((p.joy - 0.4).abs() < 1e-9);
    }
}
