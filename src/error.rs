//! Rich diagnostic error types for the sentiscope engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes, help text, and source chains so users know exactly what
//! went wrong and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the sentiscope engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text, source spans) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum SentiError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Emotion(#[from] EmotionError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Batch(#[from] crate::batch::BatchError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Path(#[from] crate::paths::PathError),
}

// ---------------------------------------------------------------------------
// Resource errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ResourceError {
    #[error("lexicon resource unavailable: {path}")]
    #[diagnostic(
        code(sentiscope::resource::unavailable),
        help(
            "The lexicon file could not be read. Check the path in the `[resources]` \
             section of your config, or remove the override to use the bundled lexicon."
        )
    )]
    Unavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {resource} lexicon: {message}")]
    #[diagnostic(
        code(sentiscope::resource::parse),
        help(
            "The lexicon is not valid TOML or does not match the expected layout. \
             Compare it against the bundled files under `data/lexicon/`."
        )
    )]
    Parse { resource: String, message: String },

    #[error("{resource} lexicon is empty")]
    #[diagnostic(
        code(sentiscope::resource::empty),
        help("A lexicon must define at least one entry. Check the file for missing tables.")
    )]
    Empty { resource: String },

    #[error("failed to build keyword matcher for {emotion}: {message}")]
    #[diagnostic(
        code(sentiscope::resource::matcher),
        help("The emotion keyword list could not be compiled into an automaton.")
    )]
    Matcher { emotion: String, message: String },
}

// ---------------------------------------------------------------------------
// Emotion classifier errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum EmotionError {
    #[error("emotion classifier request failed: {message}")]
    #[diagnostic(
        code(sentiscope::emotion::request),
        help(
            "The model endpoint could not be reached or returned an error status. \
             The lexicon classifier is used instead."
        )
    )]
    Request { message: String },

    #[error("emotion classifier returned an unexpected payload: {message}")]
    #[diagnostic(
        code(sentiscope::emotion::payload),
        help(
            "Expected a JSON list of {{\"label\", \"score\"}} objects (optionally nested \
             one level deep). Check that the endpoint serves a text-classification model."
        )
    )]
    Payload { message: String },

    #[error("emotion classifier \"{name}\" panicked")]
    #[diagnostic(
        code(sentiscope::emotion::panicked),
        help("The preferred classifier aborted unexpectedly. The lexicon classifier is used instead.")
    )]
    Panicked { name: String },
}

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("I/O error: {source}")]
    #[diagnostic(
        code(sentiscope::store::io),
        help(
            "A filesystem operation failed. Check that the data directory exists, \
             has correct permissions, and that the disk is not full."
        )
    )]
    Io {
        #[source]
        source: std::io::Error,
    },

    #[error("redb transaction error: {message}")]
    #[diagnostic(
        code(sentiscope::store::redb),
        help(
            "The embedded database encountered a transaction error. \
             This may indicate corruption. Try running with a fresh data directory."
        )
    )]
    Redb { message: String },

    #[error("serialization error: {message}")]
    #[diagnostic(
        code(sentiscope::store::serde),
        help(
            "Failed to serialize or deserialize a stored analysis. \
             This usually means the record format has changed between versions. \
             Clear the history with `sentiscope history clear`."
        )
    )]
    Serialization { message: String },
}

/// Convenience alias used across the crate.
pub type SentiResult<T> = std::result::Result<T, SentiError>;

/// Result type for resource loading.
pub type ResourceResult<T> = std::result::Result<T, ResourceError>;

/// Result type for emotion classifiers.
pub type EmotionResult<T> = std::result::Result<T, EmotionError>;
