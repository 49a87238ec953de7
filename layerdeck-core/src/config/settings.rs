//! Application settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::tracing::{TracingConfig, TracingLevel, TracingOutput};

/// Default number of panes created when entering split mode.
pub const DEFAULT_PANE_COUNT: usize = 2;

/// Top-level settings stored in `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Split view settings
    #[serde(default)]
    pub split: SplitSettings,
}

impl AppSettings {
    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for a pane count below two.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.split.pane_count < 2 {
            return Err(ConfigError::Validation {
                field: "split.pane_count".to_string(),
                reason: format!("must be at least 2, got {}", self.split.pane_count),
            });
        }
        Ok(())
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level for the layerdeck crates
    #[serde(default)]
    pub level: TracingLevel,
    /// Write logs to this file instead of stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl LoggingSettings {
    /// Builds the tracing configuration, raising the level by `verbosity`.
    #[must_use]
    pub fn tracing_config(&self, verbosity: u8) -> TracingConfig {
        let output = self
            .log_file
            .clone()
            .map_or(TracingOutput::Stderr, TracingOutput::File);
        TracingConfig::new()
            .with_level(self.level.raised_by(verbosity))
            .with_output(output)
    }
}

const fn default_pane_count() -> usize {
    DEFAULT_PANE_COUNT
}

const fn default_viewport_synced() -> bool {
    true
}

/// Split view settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSettings {
    /// Panes created when entering split mode
    #[serde(default = "default_pane_count")]
    pub pane_count: usize,
    /// Whether new split views start with a shared viewport
    #[serde(default = "default_viewport_synced")]
    pub viewport_synced: bool,
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            pane_count: DEFAULT_PANE_COUNT,
            viewport_synced: true,
        }
    }
}
