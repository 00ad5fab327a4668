//! Candidate aspect terms.
//!
//! Noun phrases come first. Only when the chunker finds none do single
//! nouns (any `NN*` tag, longer than two characters) stand in. Either way
//! the list is deduplicated by exact match, short terms are dropped and at
//! most [`MAX_ASPECTS`] survive, in order of first occurrence.

use std::collections::HashSet;
use std::sync::Arc;

use super::MAX_ASPECTS;
use crate::resources::Resources;

#[derive(Debug, Clone)]
pub struct AspectExtractor {
    resources: Arc<Resources>,
}

impl AspectExtractor {
    pub fn new(resources: Arc<Resources>) -> Self {
        Self { resources }
    }

    pub fn extract(&self, text: &str) -> Vec<String> {
        let segmenter = self.resources.segmenter();
        let mut candidates = segmenter.extract_noun_phrases(text);
        if candidates.is_empty() {
            candidates = segmenter
                .segment_sentences(text)
                .iter()
                .flat_map(|sentence| segmenter.tag_tokens(sentence))
                .filter(|token| token.tag.is_noun() && token.word.chars().count() > 2)
                .map(|token| token.word)
                .collect();
        }

        let mut seen = HashSet::new();
        let aspects: Vec<String> = candidates
            .into_iter()
            .filter(|term| term.chars().count() > 2)
            .filter(|term| seen.insert(term.clone()))
            .take(MAX_ASPECTS)
            .collect();
        tracing::trace!(count = aspects.len(), "extracted aspects");
        aspects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{Tag, TaggedToken, TextSegmenter};

    fn extractor() -> AspectExtractor {
        AspectExtractor::new(Arc::new(Resources::bundled().unwrap()))
    }

    #[test]
    fn noun_fallback_when_no_phrases() {
        let aspects = extractor().extract("The food was great but the service was terrible.");
        assert_eq!(aspects, vec!["food", "service"]);
    }

    #[test]
    fn noun_phrases_take_priority() {
        let aspects = extractor().extract("The phone has excellent battery life and a great camera.");
        assert_eq!(aspects, vec!["excellent battery life", "great camera"]);
    }

    #[test]
    fn empty_text_has_no_aspects() {
        assert!(extractor().extract("").is_empty());
        assert!(extractor().extract("   ").is_empty());
    }

    struct Scripted(Vec<&'static str>);

    impl TextSegmenter for Scripted {
        fn segment_sentences(&self, text: &str) -> Vec<String> {
            vec![text.to_string()]
        }

        fn tag_tokens(&self, _sentence: &str) -> Vec<TaggedToken> {
            Vec::new()
        }

        fn extract_noun_phrases(&self, _text: &str) -> Vec<String> {
            self.0.iter().map(|s| s.to_string()).collect()
        }
    }

    #[test]
    fn dedupes_drops_short_and_truncates() {
        let segmenter = Scripted(vec![
            "ux", "screen", "price", "screen", "Screen", "battery", "camera", "speaker", "case",
        ]);
        let resources = Resources::bundled().unwrap().with_segmenter(segmenter);
        let aspects = AspectExtractor::new(Arc::new(resources)).extract("anything");
        assert_eq!(
            aspects,
            vec!["screen", "price", "Screen", "battery", "camera"]
        );
    }

    struct NounsOnly;

    impl TextSegmenter for NounsOnly {
        fn segment_sentences(&self, text: &str) -> Vec<String> {
            vec![text.to_string()]
        }

        fn tag_tokens(&self, _sentence: &str) -> Vec<TaggedToken> {
            vec![
                TaggedToken::new("TV", Tag::NNP),
                TaggedToken::new("Samsung", Tag::NNP),
                TaggedToken::new("remotes", Tag::NNS),
                TaggedToken::new("broke", Tag::VBD),
            ]
        }

        fn extract_noun_phrases(&self, _text: &str) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn fallback_keeps_all_noun_tags_longer_than_two() {
        let resources = Resources::bundled().unwrap().with_segmenter(NounsOnly);
        let aspects = AspectExtractor::new(Arc::new(resources)).extract("x");
        assert_eq!(aspects, vec!["Samsung", "remotes"]);
    }
}
