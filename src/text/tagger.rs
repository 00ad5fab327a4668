//! Rule-based part-of-speech tagger.
//!
//! Tagging order for each token:
//! 1. punctuation and numerals
//! 2. the closed-class table (determiners, pronouns, auxiliaries, ...)
//! 3. lexicon hints (adjectives and sentiment verbs from the polarity lexicon)
//! 4. mid-sentence capitalization → proper noun
//! 5. suffix and left-context rules, defaulting to `NN`
//!
//! Left context looks through adverbs, so "I absolutely love" tags `love` as
//! a verb just like "I love".

use std::collections::HashMap;

use super::{Tag, TaggedToken};

const CLOSED_CLASS: &[(&str, Tag)] = &[
    // determiners
    ("the", Tag::DT), ("a", Tag::DT), ("an", Tag::DT), ("this", Tag::DT),
    ("that", Tag::DT), ("these", Tag::DT), ("those", Tag::DT), ("each", Tag::DT),
    ("every", Tag::DT), ("some", Tag::DT), ("any", Tag::DT), ("all", Tag::DT),
    ("another", Tag::DT), ("both", Tag::DT), ("either", Tag::DT), ("neither", Tag::DT),
    ("no", Tag::DT),
    // pronouns
    ("i", Tag::PRP), ("you", Tag::PRP), ("he", Tag::PRP), ("she", Tag::PRP),
    ("it", Tag::PRP), ("we", Tag::PRP), ("they", Tag::PRP), ("me", Tag::PRP),
    ("him", Tag::PRP), ("us", Tag::PRP), ("them", Tag::PRP), ("myself", Tag::PRP),
    ("yourself", Tag::PRP), ("himself", Tag::PRP), ("herself", Tag::PRP),
    ("itself", Tag::PRP), ("ourselves", Tag::PRP), ("themselves", Tag::PRP),
    ("my", Tag::PRPS), ("your", Tag::PRPS), ("his", Tag::PRPS), ("her", Tag::PRPS),
    ("its", Tag::PRPS), ("our", Tag::PRPS), ("their", Tag::PRPS),
    ("nobody", Tag::NN), ("everyone", Tag::NN), ("everybody", Tag::NN),
    ("someone", Tag::NN), ("somebody", Tag::NN), ("something", Tag::NN),
    ("nothing", Tag::NN), ("everything", Tag::NN), ("anything", Tag::NN),
    ("anyone", Tag::NN),
    // prepositions and subordinators
    ("in", Tag::IN), ("on", Tag::IN), ("at", Tag::IN), ("of", Tag::IN),
    ("for", Tag::IN), ("with", Tag::IN), ("about", Tag::IN), ("from", Tag::IN),
    ("by", Tag::IN), ("into", Tag::IN), ("onto", Tag::IN), ("over", Tag::IN),
    ("under", Tag::IN), ("after", Tag::IN), ("before", Tag::IN), ("during", Tag::IN),
    ("through", Tag::IN), ("between", Tag::IN), ("against", Tag::IN),
    ("without", Tag::IN), ("within", Tag::IN), ("since", Tag::IN), ("until", Tag::IN),
    ("upon", Tag::IN), ("as", Tag::IN), ("than", Tag::IN), ("because", Tag::IN),
    ("if", Tag::IN), ("while", Tag::IN), ("although", Tag::IN), ("though", Tag::IN),
    ("whereas", Tag::IN), ("despite", Tag::IN), ("around", Tag::IN),
    ("across", Tag::IN), ("behind", Tag::IN), ("near", Tag::IN), ("toward", Tag::IN),
    ("towards", Tag::IN), ("among", Tag::IN),
    ("and", Tag::CC), ("or", Tag::CC), ("but", Tag::CC), ("nor", Tag::CC),
    ("plus", Tag::CC),
    ("to", Tag::TO),
    ("can", Tag::MD), ("could", Tag::MD), ("will", Tag::MD), ("would", Tag::MD),
    ("shall", Tag::MD), ("should", Tag::MD), ("may", Tag::MD), ("might", Tag::MD),
    ("must", Tag::MD), ("ca", Tag::MD), ("wo", Tag::MD), ("'ll", Tag::MD),
    ("'d", Tag::MD),
    ("there", Tag::EX),
    ("which", Tag::WDT), ("what", Tag::WP), ("who", Tag::WP), ("whom", Tag::WP),
    ("whose", Tag::WP), ("when", Tag::WRB), ("where", Tag::WRB), ("why", Tag::WRB),
    ("how", Tag::WRB),
    // adverbs
    ("not", Tag::RB), ("n't", Tag::RB), ("never", Tag::RB), ("very", Tag::RB),
    ("really", Tag::RB), ("too", Tag::RB), ("also", Tag::RB), ("just", Tag::RB),
    ("only", Tag::RB), ("even", Tag::RB), ("still", Tag::RB), ("already", Tag::RB),
    ("always", Tag::RB), ("often", Tag::RB), ("sometimes", Tag::RB), ("here", Tag::RB),
    ("now", Tag::RB), ("then", Tag::RB), ("again", Tag::RB), ("almost", Tag::RB),
    ("quite", Tag::RB), ("rather", Tag::RB), ("so", Tag::RB), ("somewhat", Tag::RB),
    ("however", Tag::RB), ("ever", Tag::RB), ("soon", Tag::RB), ("yet", Tag::RB),
    ("well", Tag::RB), ("much", Tag::RB), ("once", Tag::RB), ("else", Tag::RB),
    ("perhaps", Tag::RB), ("maybe", Tag::RB),
    ("more", Tag::RBR), ("less", Tag::RBR), ("most", Tag::RBS), ("least", Tag::RBS),
    ("up", Tag::RP), ("out", Tag::RP), ("off", Tag::RP), ("down", Tag::RP),
    // auxiliaries and frequent irregular verbs
    ("is", Tag::VBZ), ("am", Tag::VBP), ("are", Tag::VBP), ("was", Tag::VBD),
    ("were", Tag::VBD), ("be", Tag::VB), ("been", Tag::VBN), ("being", Tag::VBG),
    ("'m", Tag::VBP), ("'re", Tag::VBP), ("'ve", Tag::VBP),
    ("has", Tag::VBZ), ("have", Tag::VBP), ("had", Tag::VBD), ("having", Tag::VBG),
    ("does", Tag::VBZ), ("do", Tag::VBP), ("did", Tag::VBD), ("done", Tag::VBN),
    ("doing", Tag::VBG), ("get", Tag::VB), ("gets", Tag::VBZ), ("got", Tag::VBD),
    ("go", Tag::VB), ("goes", Tag::VBZ), ("went", Tag::VBD), ("gone", Tag::VBN),
    ("going", Tag::VBG), ("make", Tag::VB), ("makes", Tag::VBZ), ("made", Tag::VBD),
    ("take", Tag::VB), ("took", Tag::VBD), ("taken", Tag::VBN), ("give", Tag::VB),
    ("gave", Tag::VBD), ("given", Tag::VBN), ("come", Tag::VB), ("came", Tag::VBD),
    ("say", Tag::VB), ("said", Tag::VBD), ("know", Tag::VBP), ("knew", Tag::VBD),
    ("think", Tag::VBP), ("thought", Tag::VBD), ("feel", Tag::VBP), ("felt", Tag::VBD),
    ("found", Tag::VBD), ("seem", Tag::VBP), ("seems", Tag::VBZ), ("seemed", Tag::VBD),
    ("keep", Tag::VB), ("kept", Tag::VBD), ("buy", Tag::VB), ("bought", Tag::VBD),
    ("see", Tag::VB), ("saw", Tag::VBD), ("seen", Tag::VBN), ("looks", Tag::VBZ),
    ("looked", Tag::VBD),
    // plain adjectives
    ("new", Tag::JJ), ("old", Tag::JJ), ("big", Tag::JJ), ("small", Tag::JJ),
    ("large", Tag::JJ), ("little", Tag::JJ), ("long", Tag::JJ), ("short", Tag::JJ),
    ("other", Tag::JJ), ("same", Tag::JJ), ("few", Tag::JJ), ("many", Tag::JJ),
    ("several", Tag::JJ), ("own", Tag::JJ), ("whole", Tag::JJ),
    ("one", Tag::CD), ("two", Tag::CD), ("three", Tag::CD), ("four", Tag::CD),
    ("five", Tag::CD), ("six", Tag::CD), ("seven", Tag::CD), ("eight", Tag::CD),
    ("nine", Tag::CD), ("ten", Tag::CD), ("hundred", Tag::CD), ("thousand", Tag::CD),
    ("oh", Tag::UH), ("wow", Tag::UH), ("yes", Tag::UH), ("yeah", Tag::UH),
    ("please", Tag::UH), ("hey", Tag::UH),
];

/// Linking verbs after which an unknown word is read as a predicate adjective.
const COPULAS: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "'s", "'re", "'m", "seem",
    "seems", "seemed", "feel", "feels", "felt", "looks", "looked",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "ical", "less", "ish"];

/// Rule-based Penn Treebank tagger.
#[derive(Debug, Clone)]
pub struct PosTagger {
    closed: HashMap<&'static str, Tag>,
    hints: HashMap<String, Tag>,
}

impl Default for PosTagger {
    fn default() -> Self {
        Self::with_hints(HashMap::new())
    }
}

impl PosTagger {
    /// Build a tagger with open-class hints (lowercase word → tag).
    pub fn with_hints(hints: HashMap<String, Tag>) -> Self {
        Self {
            closed: CLOSED_CLASS.iter().copied().collect(),
            hints,
        }
    }

    /// Number of open-class hints loaded from the lexicon.
    pub fn hint_count(&self) -> usize {
        self.hints.len()
    }

    /// Tag a tokenized sentence.
    pub fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());
        for (index, word) in tokens.iter().enumerate() {
            let tag = self.tag_word(word, index, &tagged);
            tagged.push(TaggedToken::new(word.clone(), tag));
        }
        tagged
    }

    fn tag_word(&self, word: &str, index: usize, previous: &[TaggedToken]) -> Tag {
        if !word.chars().any(char::is_alphanumeric) {
            return punctuation_tag(word);
        }
        if word.starts_with(|c: char| c.is_ascii_digit())
            && word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return Tag::CD;
        }

        let lower = word.to_lowercase();
        let prev = previous.last().map(|t| t.tag);
        // Nearest non-adverb on the left.
        let governor = previous.iter().rev().find(|t| !t.tag.is_adverb());

        if lower == "'s" {
            return match prev {
                Some(Tag::PRP | Tag::EX | Tag::WP | Tag::DT) => Tag::VBZ,
                _ => Tag::POS,
            };
        }
        if let Some(&tag) = self.closed.get(lower.as_str()) {
            return tag;
        }
        if let Some(&hint) = self.hints.get(&lower) {
            return resolve_hint(hint, governor.map(|t| t.tag));
        }

        let sentence_initial = index == 0 || matches!(prev, Some(Tag::Stop | Tag::Colon));
        if !sentence_initial && word.starts_with(char::is_uppercase) {
            return Tag::NNP;
        }

        suffix_tag(&lower, governor)
    }
}

fn punctuation_tag(word: &str) -> Tag {
    match word {
        "." | "!" | "?" => Tag::Stop,
        "," => Tag::Comma,
        ";" | ":" | "-" | "\u{2013}" | "\u{2014}" => Tag::Colon,
        _ => Tag::Sym,
    }
}

/// Hints carry the dictionary part of speech; verbs are re-read as nouns
/// after a determiner ("the love") and as base forms after a modal.
fn resolve_hint(hint: Tag, governor: Option<Tag>) -> Tag {
    if !hint.is_verb() {
        return hint;
    }
    match governor {
        Some(Tag::PRP) if hint == Tag::VB => Tag::VBP,
        Some(Tag::MD | Tag::TO) => Tag::VB,
        Some(Tag::DT | Tag::PRPS | Tag::JJ | Tag::IN) => Tag::NN,
        _ => hint,
    }
}

fn suffix_tag(lower: &str, governor: Option<&TaggedToken>) -> Tag {
    let len = lower.chars().count();
    let gov_tag = governor.map(|t| t.tag);
    let after_determiner = matches!(
        gov_tag,
        Some(Tag::DT | Tag::PRPS | Tag::JJ | Tag::IN | Tag::POS)
    );
    let after_copula =
        governor.is_some_and(|t| COPULAS.contains(&t.word.to_lowercase().as_str()));

    if matches!(gov_tag, Some(Tag::MD | Tag::TO)) {
        return Tag::VB;
    }
    if len > 4 && lower.ends_with("ly") {
        return Tag::RB;
    }
    if len > 4 && lower.ends_with("ing") {
        return if after_determiner { Tag::NN } else { Tag::VBG };
    }
    if len > 3 && lower.ends_with("ed") {
        return if after_determiner {
            Tag::JJ
        } else if after_copula || gov_tag.is_some_and(Tag::is_verb) {
            Tag::VBN
        } else {
            Tag::VBD
        };
    }
    if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Tag::JJ;
    }
    if after_copula {
        return Tag::JJ;
    }
    if matches!(gov_tag, Some(Tag::PRP | Tag::WP)) {
        return Tag::VBP;
    }
    if len > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return Tag::NNS;
    }
    Tag::NN
}
