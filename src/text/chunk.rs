//! Noun-phrase chunking by pairwise tag merging.
//!
//! Tags are first collapsed to a small chunk alphabet, then adjacent pairs
//! are merged left to right (restarting after each merge) until no rule
//! applies. Surviving proper nouns and compounds are the phrases.

use super::{Tag, TaggedToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChunkTag {
    Proper,
    Noun,
    Compound,
    Adjective,
    Other,
}

impl From<Tag> for ChunkTag {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::NNP | Tag::NNPS => Self::Proper,
            Tag::NN | Tag::NNS => Self::Noun,
            Tag::JJ | Tag::JJR | Tag::JJS => Self::Adjective,
            _ => Self::Other,
        }
    }
}

const MERGE_RULES: &[(ChunkTag, ChunkTag, ChunkTag)] = &[
    (ChunkTag::Proper, ChunkTag::Proper, ChunkTag::Proper),
    (ChunkTag::Noun, ChunkTag::Noun, ChunkTag::Compound),
    (ChunkTag::Compound, ChunkTag::Noun, ChunkTag::Compound),
    (ChunkTag::Adjective, ChunkTag::Adjective, ChunkTag::Adjective),
    (ChunkTag::Adjective, ChunkTag::Noun, ChunkTag::Compound),
];

fn merge(left: ChunkTag, right: ChunkTag) -> Option<ChunkTag> {
    MERGE_RULES
        .iter()
        .find(|(l, r, _)| *l == left && *r == right)
        .map(|(_, _, merged)| *merged)
}

/// Extract lowercased noun phrases from one tagged sentence.
pub fn noun_phrases(tokens: &[TaggedToken]) -> Vec<String> {
    let mut chunks: Vec<(String, ChunkTag)> = tokens
        .iter()
        .map(|t| (t.word.clone(), ChunkTag::from(t.tag)))
        .collect();

    while let Some((i, merged)) = chunks
        .windows(2)
        .enumerate()
        .find_map(|(i, pair)| merge(pair[0].1, pair[1].1).map(|m| (i, m)))
    {
        let (right, _) = chunks.remove(i + 1);
        let left = &mut chunks[i];
        left.0.push(' ');
        left.0.push_str(&right);
        left.1 = merged;
    }

    chunks
        .into_iter()
        .filter(|(_, tag)| matches!(tag, ChunkTag::Proper | ChunkTag::Compound))
        .map(|(phrase, _)| phrase.to_lowercase())
        .collect()
}
