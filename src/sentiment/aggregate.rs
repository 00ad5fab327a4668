use std::sync::Arc;

use super::SentimentScore;
use crate::resources::Resources;

/// Blends the lexicon scorer and the subjectivity estimator.
#[derive(Debug, Clone)]
pub struct SentimentAggregator {
    resources: Arc<Resources>,
}

impl SentimentAggregator {
    pub fn new(resources: Arc<Resources>) -> Self {
        Self { resources }
    }

    pub fn score(&self, text: &str) -> SentimentScore {
        let lexicon = self.resources.scorer().score(text);
        let estimate = self.resources.estimator().estimate(text);
        SentimentScore::from_parts(lexicon, estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::Classification;

    fn aggregator() -> SentimentAggregator {
        SentimentAggregator::new(Arc::new(Resources::bundled().unwrap()))
    }

    #[test]
    fn empty_text_is_neutral_with_half_confidence() {
        let agg = aggregator();
        for text in ["", "   ", "\n\t"] {
            let s = agg.score(text);
            assert_eq!(s.compound, 0.0);
            assert_eq!(s.classification, Classification::Neutral);
            assert_eq!(s.confidence, 0.5);
        }
    }

    #[test]
    fn clear_polarity() {
        let agg = aggregator();
        let pos = agg.score("I absolutely love this, it is wonderful!");
        assert_eq!(pos.classification, Classification::Positive);
        assert!(pos.compound > 0.05);
        assert!(pos.subjectivity > 0.5);

        let neg = agg.score("The service was terrible.");
        assert_eq!(neg.classification, Classification::Negative);
        assert!(neg.compound <= -0.05);
    }

    #[test]
    fn factual_text_is_neutral() {
        let s = aggregator().score("The train leaves at seven from platform four.");
        assert_eq!(s.classification, Classification::Neutral);
        assert_eq!(s.subjectivity, 0.0);
    }
}
