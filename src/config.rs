//! Analyzer configuration, persisted as TOML.
//!
//! Every field has a serde default so a partial (or empty) file is valid.
//! The classification thresholds and aspect limits are fixed constants and
//! deliberately not configurable.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from config file operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(sentiscope::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}: {message}")]
    #[diagnostic(
        code(sentiscope::config::parse),
        help("Check the TOML syntax. Valid sections are [segmenter], [resources] and [emotion].")
    )]
    Parse { path: String, message: String },

    #[error("failed to write config: {path}")]
    #[diagnostic(
        code(sentiscope::config::write),
        help("Ensure you have write permissions to the config directory.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Top-level analyzer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub segmenter: SegmenterConfig,
    #[serde(default)]
    pub resources: ResourceConfig,
    #[serde(default)]
    pub emotion: EmotionConfig,
}

/// Sentence segmentation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// Split sentences at contrastive conjunctions and semicolons so each
    /// clause becomes its own segment.
    #[serde(default = "default_split_clauses")]
    pub split_clauses: bool,
}

fn default_split_clauses() -> bool {
    true
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            split_clauses: default_split_clauses(),
        }
    }
}

/// Optional overrides for the bundled lexicon files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Replacement for `data/lexicon/subjectivity.toml`.
    #[serde(default)]
    pub subjectivity_lexicon: Option<PathBuf>,
    /// Replacement for `data/lexicon/emotions.toml`.
    #[serde(default)]
    pub emotion_lexicon: Option<PathBuf>,
}

/// Preferred (model-backed) emotion classifier settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionConfig {
    /// HTTP text-classification endpoint. `None` disables the preferred
    /// classifier and uses the keyword lexicon only.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Bearer token sent with each request.
    #[serde(default)]
    pub api_token: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AnalyzerConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load from `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if path.is_file() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save to a TOML file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }
}
