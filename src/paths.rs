//! XDG-compliant path resolution for sentiscope.
//!
//! The history store lives under `$XDG_DATA_HOME/sentiscope/` and the optional
//! config file under `$XDG_CONFIG_HOME/sentiscope/config.toml`.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors from path resolution.
#[derive(Debug, Error, Diagnostic)]
pub enum PathError {
    #[error("cannot determine home directory")]
    #[diagnostic(
        code(sentiscope::paths::no_home),
        help("Set the HOME environment variable or pass `--data-dir` explicitly.")
    )]
    NoHome,

    #[error("failed to create directory: {path}")]
    #[diagnostic(
        code(sentiscope::paths::create_dir),
        help("Check that the parent directory exists and you have write permissions.")
    )]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type PathResult<T> = std::result::Result<T, PathError>;

/// Global XDG-compliant directories for sentiscope.
#[derive(Debug, Clone)]
pub struct SentiPaths {
    /// `$XDG_CONFIG_HOME/sentiscope/`
    pub config_dir: PathBuf,
    /// `$XDG_DATA_HOME/sentiscope/`
    pub data_dir: PathBuf,
}

impl SentiPaths {
    /// Resolve XDG directories from environment variables with standard fallbacks.
    pub fn resolve() -> PathResult<Self> {
        let home = std::env::var("HOME")
            .map(PathBuf::from)
            .map_err(|_| PathError::NoHome)?;

        let config_dir = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home.join(".config"))
            .join("sentiscope");

        let data_dir = std::env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home.join(".local/share"))
            .join("sentiscope");

        Ok(Self {
            config_dir,
            data_dir,
        })
    }

    /// Use an explicit data directory; config still resolves under it.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            config_dir: data_dir.clone(),
            data_dir,
        }
    }

    /// Create all base directories. Idempotent.
    pub fn ensure_dirs(&self) -> PathResult<()> {
        for dir in [&self.config_dir, &self.data_dir] {
            std::fs::create_dir_all(dir).map_err(|e| PathError::CreateDir {
                path: dir.display().to_string(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Path to the global config file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Directory holding the analysis history database.
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("history")
    }
}
