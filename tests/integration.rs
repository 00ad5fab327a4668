//! End-to-end integration tests for the sentiscope analyzer.
//!
//! These tests run full analyses through the public API and check the
//! documented scenarios and the properties every result must satisfy.

use chrono::Utc;

use sentiscope::aspect::{AspectEvidence, INFERRED_CONTEXT, MAX_ASPECTS};
use sentiscope::config::AnalyzerConfig;
use sentiscope::emotion::Emotion;
use sentiscope::engine::Analyzer;
use sentiscope::sentiment::{Classification, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};

fn analyzer() -> Analyzer {
    Analyzer::new(&AnalyzerConfig::default()).unwrap()
}

const CORPUS: &[&str] = &[
    "I absolutely love this, it is wonderful!",
    "The food was great but the service was terrible.",
    "This is fine.",
    "",
    "   ",
    "The hotel room was clean and spacious; however, the breakfast was cold and the staff seemed unfriendly.",
    "I'm not happy with the battery life. The screen is gorgeous though.",
    "Absolutely terrible experience. I was furious and frustrated, and honestly a bit scared.",
    "The package arrived on Tuesday.",
    "Wow, I'm so surprised and thrilled! Best purchase ever, amazing camera, great price, solid build, fast shipping, lovely packaging.",
    "Dr. Smith explained the procedure clearly. The waiting room was crowded.",
    "Ça marche très bien, merci!",
];

#[test]
fn positive_scenario() {
    let result = analyzer().analyze("I absolutely love this, it is wonderful!");
    assert_eq!(result.sentiment.classification, Classification::Positive);
    assert!(result.sentiment.compound > 0.05);
}

#[test]
fn empty_scenario() {
    let result = analyzer().analyze("");
    assert_eq!(result.sentiment.classification, Classification::Neutral);
    assert_eq!(result.sentiment.compound, 0.0);
    assert_eq!(result.sentiment.confidence, 0.5);
    assert!(result.aspects.is_empty());
    assert_eq!(result.emotions.neutral, 1.0);
}

#[test]
fn contrasting_aspects_scenario() {
    let aspects = analyzer().analyze_aspects("The food was great but the service was terrible.");

    let food = aspects.iter().find(|a| a.term == "food").unwrap();
    assert_eq!(food.sentiment, Classification::Positive);
    assert_eq!(food.context, "The food was great");
    assert_eq!(food.evidence, AspectEvidence::Direct { sentences: 1 });

    let service = aspects.iter().find(|a| a.term == "service").unwrap();
    assert_eq!(service.sentiment, Classification::Negative);
    assert_eq!(service.context, "the service was terrible.");
}

#[test]
fn neutral_emotion_scenario() {
    let emotions = analyzer().analyze_emotions("This is fine.");
    assert_eq!(emotions.neutral, 1.0);
    for emotion in Emotion::SCORED {
        assert_eq!(emotions.get(emotion), 0.0);
    }
}

#[test]
fn classification_follows_thresholds() {
    let a = analyzer();
    for text in CORPUS {
        let s = a.analyze_sentiment(text);
        assert_eq!(
            s.classification == Classification::Positive,
            s.compound >= POSITIVE_THRESHOLD,
            "{text:?}"
        );
        assert_eq!(
            s.classification == Classification::Negative,
            s.compound <= NEGATIVE_THRESHOLD,
            "{text:?}"
        );
        assert!((-1.0..=1.0).contains(&s.compound));
        assert!((0.5..=1.0).contains(&s.confidence));
        assert!((0.0..=1.0).contains(&s.subjectivity));
    }
}

#[test]
fn emotion_intensities_are_bounded() {
    let a = analyzer();
    for text in CORPUS {
        for (emotion, value) in a.analyze_emotions(text).iter() {
            assert!((0.0..=1.0).contains(&value), "{emotion} = {value} for {text:?}");
        }
    }
}

#[test]
fn emotions_are_not_normalised() {
    let p = analyzer().analyze_emotions("I was furious and frustrated, and scared, and shocked");
    assert!((p.anger - 0.4).abs() < 1e-9);
    assert!((p.fear - 0.2).abs() < 1e-9);
    assert!((p.surprise - 0.2).abs() < 1e-9);
    assert!((p.neutral - 0.2).abs() < 1e-9);
}

#[test]
fn aspects_are_bounded_and_unique() {
    let a = analyzer();
    for text in CORPUS {
        let aspects = a.analyze_aspects(text);
        assert!(aspects.len() <= MAX_ASPECTS);
        let mut terms: Vec<&str> = aspects.iter().map(|x| x.term.as_str()).collect();
        let before = terms.len();
        terms.sort_unstable();
        terms.dedup();
        assert_eq!(terms.len(), before, "duplicate aspects for {text:?}");
        for aspect in &aspects {
            assert!(aspect.term.chars().count() > 2);
            assert_eq!(aspect.sentiment, Classification::from_compound(aspect.score));
            match aspect.evidence {
                AspectEvidence::Direct { sentences } => {
                    assert!(sentences >= 1);
                    assert!(
                        aspect.context.to_lowercase().contains(&aspect.term.to_lowercase())
                    );
                }
                AspectEvidence::Inferred => assert_eq!(aspect.context, INFERRED_CONTEXT),
            }
        }
    }
}

#[test]
fn long_reviews_truncate_to_five_aspects() {
    let aspects = analyzer().analyze_aspects(CORPUS[9]);
    assert_eq!(aspects.len(), MAX_ASPECTS);
}

#[test]
fn analysis_is_idempotent() {
    let a = analyzer();
    let ts = Utc::now();
    for text in CORPUS {
        assert_eq!(a.analyze_at(text, ts), a.analyze_at(text, ts));
    }
}

#[test]
fn batch_matches_single_analysis() {
    let a = analyzer();
    let results = a.analyze_batch(CORPUS);
    assert_eq!(results.len(), CORPUS.len());
    for (text, result) in CORPUS.iter().zip(&results) {
        let single = a.analyze_at(text, result.timestamp);
        assert_eq!(&single, result);
    }
}

#[test]
fn disabling_clause_splitting_merges_contrasting_clauses() {
    let mut config = AnalyzerConfig::default();
    config.segmenter.split_clauses = false;
    let a = Analyzer::new(&config).unwrap();
    let aspects = a.analyze_aspects("The food was great but the service was terrible.");
    let food = aspects.iter().find(|x| x.term == "food").unwrap();
    let service = aspects.iter().find(|x| x.term == "service").unwrap();
    assert_eq!(food.context, service.context);
    assert_eq!(food.score, service.score);
}

#[test]
fn results_serialize_to_json() {
    let result = analyzer().analyze("The food was great but the service was terrible.");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json["sentiment"]["classification"],
        result.sentiment.classification.to_string()
    );
    assert_eq!(json["aspects"][0]["evidence"]["Direct"]["sentences"], 1);
    assert!(json["emotions"]["neutral"].is_number());
    assert!(json["aspects"].as_array().is_some_and(|a| !a.is_empty()));
}
