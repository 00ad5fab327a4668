//! Text segmentation capability: sentences, tagged tokens, noun phrases.
//!
//! The analysis components only see the [`TextSegmenter`] trait. The bundled
//! [`RuleSegmenter`] implements it with three deterministic passes:
//!
//! 1. **Segment**: sentence boundaries, then (optionally) contrastive clauses
//! 2. **Tag**: closed-class table → lexicon hints → suffix/context rules
//! 3. **Chunk**: pairwise tag merging into noun phrases
//!
//! Tags follow the Penn Treebank names so that "is a noun" is simply a tag
//! starting with `NN`.

pub mod chunk;
pub mod segment;
pub mod tagger;

pub use segment::{RuleSegmenter, TextSegmenter, tokenize};
pub use tagger::PosTagger;

use serde::{Deserialize, Serialize};

/// Penn Treebank part-of-speech tag.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    CC,
    CD,
    DT,
    EX,
    IN,
    JJ,
    JJR,
    JJS,
    MD,
    NN,
    NNS,
    NNP,
    NNPS,
    POS,
    PRP,
    /// `PRP$`
    PRPS,
    RB,
    RBR,
    RBS,
    RP,
    TO,
    UH,
    VB,
    VBD,
    VBG,
    VBN,
    VBP,
    VBZ,
    WDT,
    WP,
    WRB,
    /// Sentence-final punctuation (`.`).
    Stop,
    /// `,`
    Comma,
    /// `:` (colons, semicolons, dashes).
    Colon,
    /// Any other symbol.
    Sym,
}

impl Tag {
    /// The Penn Treebank spelling of this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CC => "CC",
            Self::CD => "CD",
            Self::DT => "DT",
            Self::EX => "EX",
            Self::IN => "IN",
            Self::JJ => "JJ",
            Self::JJR => "JJR",
            Self::JJS => "JJS",
            Self::MD => "MD",
            Self::NN => "NN",
            Self::NNS => "NNS",
            Self::NNP => "NNP",
            Self::NNPS => "NNPS",
            Self::POS => "POS",
            Self::PRP => "PRP",
            Self::PRPS => "PRP$",
            Self::RB => "RB",
            Self::RBR => "RBR",
            Self::RBS => "RBS",
            Self::RP => "RP",
            Self::TO => "TO",
            Self::UH => "UH",
            Self::VB => "VB",
            Self::VBD => "VBD",
            Self::VBG => "VBG",
            Self::VBN => "VBN",
            Self::VBP => "VBP",
            Self::VBZ => "VBZ",
            Self::WDT => "WDT",
            Self::WP => "WP",
            Self::WRB => "WRB",
            Self::Stop => ".",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Sym => "SYM",
        }
    }

    /// Parse a Penn Treebank tag name.
    pub fn parse(name: &str) -> Option<Self> {
        let tag = match name {
            "CC" => Self::CC,
            "CD" => Self::CD,
            "DT" => Self::DT,
            "EX" => Self::EX,
            "IN" => Self::IN,
            "JJ" => Self::JJ,
            "JJR" => Self::JJR,
            "JJS" => Self::JJS,
            "MD" => Self::MD,
            "NN" => Self::NN,
            "NNS" => Self::NNS,
            "NNP" => Self::NNP,
            "NNPS" => Self::NNPS,
            "POS" => Self::POS,
            "PRP" => Self::PRP,
            "PRP$" => Self::PRPS,
            "RB" => Self::RB,
            "RBR" => Self::RBR,
            "RBS" => Self::RBS,
            "RP" => Self::RP,
            "TO" => Self::TO,
            "UH" => Self::UH,
            "VB" => Self::VB,
            "VBD" => Self::VBD,
            "VBG" => Self::VBG,
            "VBN" => Self::VBN,
            "VBP" => Self::VBP,
            "VBZ" => Self::VBZ,
            "WDT" => Self::WDT,
            "WP" => Self::WP,
            "WRB" => Self::WRB,
            "." => Self::Stop,
            "," => Self::Comma,
            ":" => Self::Colon,
            "SYM" => Self::Sym,
            _ => return None,
        };
        Some(tag)
    }

    /// Whether this is one of the noun tags (`NN*`).
    pub fn is_noun(self) -> bool {
        self.as_str().starts_with("NN")
    }

    pub fn is_adjective(self) -> bool {
        matches!(self, Self::JJ | Self::JJR | Self::JJS)
    }

    pub fn is_verb(self) -> bool {
        self.as_str().starts_with("VB")
    }

    pub fn is_adverb(self) -> bool {
        matches!(self, Self::RB | Self::RBR | Self::RBS)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token paired with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub word: String,
    pub tag: Tag,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: Tag) -> Self {
        Self {
            word: word.into(),
            tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names_round_trip() {
        for tag in [Tag::NN, Tag::PRPS, Tag::Stop, Tag::VBZ, Tag::NNPS] {
            assert_eq!(Tag::parse(tag.as_str()), Some(tag));
        }
        assert_eq!(Tag::parse("XYZ"), None);
    }

    #[test]
    fn noun_tags_share_prefix() {
        assert!(Tag::NN.is_noun());
        assert!(Tag::NNS.is_noun());
        assert!(Tag::NNP.is_noun());
        assert!(Tag::NNPS.is_noun());
        assert!(!Tag::JJ.is_noun());
        assert!(!Tag::VBN.is_noun());
    }
}
