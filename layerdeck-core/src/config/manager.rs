//! Settings persistence

use std::fs;
use std::path::{Path, PathBuf};

use super::{AppSettings, ConfigError, ConfigResult};
use crate::tracing::span_names;

/// Name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Loads and saves [`AppSettings`] in a config directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the user's config directory (`$XDG_CONFIG_HOME/layerdeck`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if the platform has no config directory.
    pub fn new() -> ConfigResult<Self> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_config_dir(base.join("layerdeck")))
    }

    /// Creates a manager for a custom directory.
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// The config directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Full path of the settings file.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Loads settings, falling back to defaults when the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load_settings(&self) -> ConfigResult<AppSettings> {
        let _span = crate::trace_operation_debug!(span_names::CONFIG_LOAD).entered();
        let path = self.settings_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(AppSettings::default());
        }
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let settings: AppSettings =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Writes settings, creating the config directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, serialization or writing fails.
    pub fn save_settings(&self, settings: &AppSettings) -> ConfigResult<()> {
        settings.validate()?;
        fs::create_dir_all(&self.config_dir).map_err(|source| ConfigError::Io {
            path: self.config_dir.clone(),
            source,
        })?;
        let content =
            toml::to_string_pretty(settings).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        let path = self.settings_path();
        fs::write(&path, content).map_err(|source| ConfigError::Io { path, source })
    }
}
