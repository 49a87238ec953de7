//! Configuration management for `LayerDeck`
//!
//! This module provides the `ConfigManager` for loading and saving
//! application settings in TOML format.

mod manager;
mod settings;

use std::path::PathBuf;

use thiserror::Error;

pub use manager::{ConfigManager, SETTINGS_FILE};
pub use settings::{AppSettings, DEFAULT_PANE_COUNT, LoggingSettings, SplitSettings};

/// Errors from loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no config directory.
    #[error("could not determine the user config directory")]
    NoConfigDir,

    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Affected path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`AppSettings`].
    #[error("failed to parse settings: {0}")]
    Parse(String),

    /// Serializing settings failed.
    #[error("failed to serialize settings: {0}")]
    Serialize(String),

    /// A setting is out of range.
    #[error("invalid setting {field}: {reason}")]
    Validation {
        /// Dotted setting name
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
