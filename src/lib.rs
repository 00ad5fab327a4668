// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # sentiscope
//!
//! Explainable sentiment, emotion and aspect analysis for free-form text.
//!
//! ## Architecture
//!
//! - **Text** (`text`): sentence/clause segmentation, rule-based POS tagging, noun-phrase chunking
//! - **Sentiment** (`sentiment`): VADER lexicon scorer blended with a polarity/subjectivity estimator
//! - **Emotion** (`emotion`): keyword automata with an optional model-backed classifier in front
//! - **Aspects** (`aspect`): topic extraction and per-topic sentiment with document fallback
//! - **History** (`store`): analyses persisted in redb
//!
//! ## Library usage
//!
//! ```no_run
//! use sentiscope::config::AnalyzerConfig;
//! use sentiscope::engine::Analyzer;
//!
//! let analyzer = Analyzer::new(&AnalyzerConfig::default()).unwrap();
//! let result = analyzer.analyze("The food was great but the service was terrible.");
//! for aspect in &result.aspects {
//!     println!("{}: {}", aspect.term, aspect.sentiment);
//! }
//! ```

pub mod aspect;
pub mod batch;
pub mod config;
pub mod emotion;
pub mod engine;
pub mod error;
pub mod paths;
pub mod resources;
pub mod sentiment;
pub mod store;
pub mod text;
