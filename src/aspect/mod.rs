//! Aspect-based sentiment: which topics does the text talk about, and how
//! does it feel about each one.

pub mod extract;
pub mod resolve;

pub use extract::AspectExtractor;
pub use resolve::AspectResolver;

use serde::{Deserialize, Serialize};

use crate::sentiment::Classification;

/// Context recorded for aspects no sentence mentions directly.
pub const INFERRED_CONTEXT: &str = "Inferred from overall text";

/// Maximum number of aspects extracted from one text.
pub const MAX_ASPECTS: usize = 5;

/// How an aspect's sentiment was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectEvidence {
    /// Averaged over `sentences` segments that mention the term.
    Direct { sentences: usize },
    /// Copied from the whole-document score.
    Inferred,
}

/// One aspect term with its resolved sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub term: String,
    pub sentiment: Classification,
    /// Compound value in [-1, 1].
    pub score: f64,
    /// First supporting segment, or [`INFERRED_CONTEXT`].
    pub context: String,
    pub evidence: AspectEvidence,
}

impl Aspect {
    pub fn is_inferred(&self) -> bool {
        self.evidence == AspectEvidence::Inferred
    }
}
