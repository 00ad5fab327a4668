//! Sentence segmentation and word tokenization.
//!
//! Sentences end at `.`, `!` or `?` followed by whitespace (or end of input),
//! except after a known abbreviation or a single-letter initial. A period
//! followed by a lowercase word does not end a sentence either. Blank lines
//! always do.
//!
//! With clause splitting on, each sentence is further cut at semicolons and
//! contrastive conjunctions, so "the food was great but the service was
//! terrible" yields two segments that can carry opposite sentiment.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::chunk;
use super::tagger::PosTagger;
use super::TaggedToken;

/// The segmentation capability consumed by the analysis components.
///
/// Implementations must be deterministic and hold only read-only state.
pub trait TextSegmenter: Send + Sync {
    /// Split text into ordered sentence (or clause) segments.
    fn segment_sentences(&self, text: &str) -> Vec<String>;

    /// Tokenize and tag one sentence.
    fn tag_tokens(&self, sentence: &str) -> Vec<TaggedToken>;

    /// Noun phrases across the whole text, lowercased, in document order.
    fn extract_noun_phrases(&self, text: &str) -> Vec<String>;
}

/// Abbreviations whose trailing period never ends a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co",
    "e.g", "i.e", "approx", "fig", "no", "u.s", "a.m", "p.m",
];

static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:[-'][\p{L}\p{N}]+)*|[^\s\p{L}\p{N}]").unwrap()
});

static CLAUSE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*;\s*|,?\s+(?:but|however|although|whereas)\b,?\s*").unwrap()
});

static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Clitic suffixes split off a word after an apostrophe (`it's` → `it` `'s`).
const CLITICS: &[&str] = &["s", "re", "ve", "ll", "d", "m"];

/// Rule-based segmenter, tagger and chunker.
#[derive(Debug, Clone)]
pub struct RuleSegmenter {
    tagger: PosTagger,
    split_clauses: bool,
}

impl RuleSegmenter {
    pub fn new(tagger: PosTagger, split_clauses: bool) -> Self {
        Self {
            tagger,
            split_clauses,
        }
    }

    pub fn tagger(&self) -> &PosTagger {
        &self.tagger
    }

    pub fn splits_clauses(&self) -> bool {
        self.split_clauses
    }
}

impl TextSegmenter for RuleSegmenter {
    fn segment_sentences(&self, text: &str) -> Vec<String> {
        let sentences = split_sentences(text);
        if !self.split_clauses {
            return sentences;
        }
        sentences
            .iter()
            .flat_map(|sentence| split_clauses(sentence))
            .collect()
    }

    fn tag_tokens(&self, sentence: &str) -> Vec<TaggedToken> {
        self.tagger.tag(&tokenize(sentence))
    }

    fn extract_noun_phrases(&self, text: &str) -> Vec<String> {
        self.segment_sentences(text)
            .iter()
            .flat_map(|sentence| chunk::noun_phrases(&self.tag_tokens(sentence)))
            .collect()
    }
}

/// Split text into sentences (no clause splitting).
pub fn split_sentences(text: &str) -> Vec<String> {
    let normalized: String = text.nfc().collect();
    PARAGRAPH_BREAK
        .split(&normalized)
        .flat_map(split_paragraph)
        .collect()
}

fn split_paragraph(paragraph: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = paragraph.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if !matches!(c, '.' | '!' | '?') {
            i += 1;
            continue;
        }

        // Absorb runs like "?!" or '."' into the same boundary.
        let mut j = i + 1;
        while j < chars.len() && is_terminal_tail(chars[j].1) {
            j += 1;
        }
        let end = chars.get(j).map(|&(p, _)| p).unwrap_or(paragraph.len());
        let at_end = j >= chars.len();
        let followed_by_space = chars.get(j).is_some_and(|&(_, ch)| ch.is_whitespace());

        let boundary = at_end
            || (followed_by_space
                && (c != '.'
                    || (!ends_with_abbreviation(&paragraph[start..pos])
                        && !next_word_is_lowercase(&paragraph[end..]))));

        if boundary {
            push_trimmed(&mut sentences, &paragraph[start..end]);
            start = end;
        }
        i = j;
    }

    push_trimmed(&mut sentences, &paragraph[start..]);
    sentences
}

fn is_terminal_tail(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

fn ends_with_abbreviation(before: &str) -> bool {
    let Some(last) = before.split_whitespace().last() else {
        return false;
    };
    let word = last
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
        return true;
    }
    ABBREVIATIONS.contains(&word.as_str())
}

fn next_word_is_lowercase(after: &str) -> bool {
    after
        .chars()
        .find(|c| !c.is_whitespace())
        .is_some_and(char::is_lowercase)
}

fn push_trimmed(out: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if trimmed.chars().any(char::is_alphanumeric) {
        out.push(trimmed.to_string());
    }
}

/// Cut one sentence at semicolons and contrastive conjunctions.
pub fn split_clauses(sentence: &str) -> Vec<String> {
    let mut clauses = Vec::new();
    for piece in CLAUSE_BREAK.split(sentence) {
        push_trimmed(&mut clauses, piece);
    }
    clauses
}

/// Tokenize a sentence into words and punctuation.
///
/// Hyphenated words stay whole; negative contractions and clitics are split
/// off (`don't` → `do` `n't`, `it's` → `it` `'s`).
pub fn tokenize(sentence: &str) -> Vec<String> {
    let normalized: String = sentence
        .nfc()
        .map(|c| if c == '\u{2019}' { '\'' } else { c })
        .collect();
    let mut tokens = Vec::new();
    for m in WORD.find_iter(&normalized) {
        split_contraction(m.as_str(), &mut tokens);
    }
    tokens
}

fn split_contraction(word: &str, out: &mut Vec<String>) {
    let lower = word.to_lowercase();
    if lower.ends_with("n't") && lower.len() > 3 {
        let cut = word.len() - 3;
        out.push(word[..cut].to_string());
        out.push(word[cut..].to_string());
        return;
    }
    if let Some(idx) = word.rfind('\'') {
        let suffix = word[idx + 1..].to_lowercase();
        if idx > 0 && CLITICS.contains(&suffix.as_str()) {
            out.push(word[..idx].to_string());
            out.push(word[idx..].to_string());
            return;
        }
    }
    out.push(word.to_string());
}
