//! View configuration.
//!
//! Two behaviours of the click handler are configurable: what happens when
//! clicks overlap, and what the view shows when the command fails. Both can
//! be set from an optional TOML file:
//!
//! ```toml
//! overlap = "last_resolved"
//! on_failure = "show_error"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Which response may write the display state when clicks overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Only the most recently issued click applies its response. Older
    /// responses arriving later are dropped.
    #[default]
    LastIssued,
    /// Every response applies in arrival order; the last to resolve wins.
    LastResolved,
}

/// What a failed command does to the display state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Keep the previous text and log the failure.
    #[default]
    Retain,
    /// Replace the text with `Error: {message}`.
    ShowError,
}

/// Root configuration structure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Overlapping-click policy
    pub overlap: OverlapPolicy,
    /// Failed-command policy
    pub on_failure: FailurePolicy,
}

/// Failure to load a config file that exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// I/O failure
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`ViewConfig`]
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// TOML decoding failure
        #[source]
        source: toml::de::Error,
    },
}

impl ViewConfig {
    /// Load config from a specific path.
    /// Returns the default config if the file doesn't exist.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
