//! Per-aspect sentiment.
//!
//! A segment supports an aspect when its lowercase form contains the
//! lowercase term (plain substring match). Supported aspects average the
//! compound of their segments; unsupported ones inherit the document score,
//! which is computed at most once per call.

use std::cell::OnceCell;
use std::sync::Arc;

use super::{Aspect, AspectEvidence, INFERRED_CONTEXT};
use crate::resources::Resources;
use crate::sentiment::{Classification, SentimentAggregator, SentimentScore};

#[derive(Debug, Clone)]
pub struct AspectResolver {
    resources: Arc<Resources>,
    aggregator: SentimentAggregator,
}

impl AspectResolver {
    pub fn new(resources: Arc<Resources>) -> Self {
        Self {
            aggregator: SentimentAggregator::new(Arc::clone(&resources)),
            resources,
        }
    }

    /// One [`Aspect`] per input term, in input order.
    pub fn resolve(&self, text: &str, aspects: &[String]) -> Vec<Aspect> {
        let segments = self.resources.segmenter().segment_sentences(text);
        let lowered: Vec<String> = segments.iter().map(|s| s.to_lowercase()).collect();
        let document: OnceCell<SentimentScore> = OnceCell::new();

        aspects
            .iter()
            .map(|term| {
                let needle = term.to_lowercase();
                let supporting: Vec<&String> = segments
                    .iter()
                    .zip(&lowered)
                    .filter(|(_, low)| low.contains(&needle))
                    .map(|(segment, _)| segment)
                    .collect();

                match supporting.first() {
                    Some(first) => {
                        let total: f64 = supporting
                            .iter()
                            .map(|segment| self.aggregator.score(segment).compound)
                            .sum();
                        let average = total / supporting.len() as f64;
                        Aspect {
                            term: term.clone(),
                            sentiment: Classification::from_compound(average),
                            score: average,
                            context: (*first).clone(),
                            evidence: AspectEvidence::Direct {
                                sentences: supporting.len(),
                            },
                        }
                    }
                    None => {
                        let doc = document.get_or_init(|| self.aggregator.score(text));
                        Aspect {
                            term: term.clone(),
                            sentiment: doc.classification,
                            score: doc.compound,
                            context: INFERRED_CONTEXT.to_string(),
                            evidence: AspectEvidence::Inferred,
                        }
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> AspectResolver {
        AspectResolver::new(Arc::new(Resources::bundled().unwrap()))
    }

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn contrasting_clauses_resolve_separately() {
        let aspects = resolver().resolve(
            "The food was great but the service was terrible.",
            &terms(&["food", "service"]),
        );
        assert_eq!(aspects.len(), 2);
        assert_eq!(aspects[0].sentiment, Classification::Positive);
        assert_eq!(aspects[0].context, "The food was great");
        assert_eq!(aspects[1].sentiment, Classification::Negative);
        assert_eq!(aspects[1].context, "the service was terrible.");
        assert_eq!(aspects[1].evidence, AspectEvidence::Direct { sentences: 1 });
    }

    #[test]
    fn unmatched_aspect_is_inferred_from_document() {
        let text = "Wonderful stay. Lovely people.";
        let aspects = resolver().resolve(text, &terms(&["breakfast"]));
        assert_eq!(aspects.len(), 1);
        let a = &aspects[0];
        assert!(a.is_inferred());
        assert_eq!(a.context, INFERRED_CONTEXT);
        let doc = SentimentAggregator::new(Arc::new(Resources::bundled().unwrap())).score(text);
        assert_eq!(a.score, doc.compound);
        assert_eq!(a.sentiment, doc.classification);
    }

    #[test]
    fn multiple_supporting_segments_are_averaged() {
        let r = resolver();
        let text = "The room was clean. The room was dirty.";
        let aspects = r.resolve(text, &terms(&["ROOM"]));
        let agg = SentimentAggregator::new(Arc::new(Resources::bundled().unwrap()));
        let expected =
            (agg.score("The room was clean.").compound + agg.score("The room was dirty.").compound)
                / 2.0;
        assert!((aspects[0].score - expected).abs() < 1e-12);
        assert_eq!(aspects[0].context, "The room was clean.");
        assert_eq!(aspects[0].evidence, AspectEvidence::Direct { sentences: 2 });
        assert_eq!(aspects[0].sentiment, Classification::from_compound(expected));
    }

    #[test]
    fn one_record_per_aspect_even_for_empty_text() {
        let aspects = resolver().resolve("", &terms(&["anything"]));
        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].sentiment, Classification::Neutral);
        assert_eq!(aspects[0].score, 0.0);
        assert!(resolver().resolve("Some text.", &[]).is_empty());
    }
}
