//! Shared utility functions used across command modules.

use std::path::Path;

use layerdeck_core::{AppSettings, ConfigManager, LayerId, MapState, Scene};

use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Loads application settings, falling back to defaults when no settings
/// file exists.
pub fn load_settings(config_path: Option<&Path>) -> Result<AppSettings, CliError> {
    let config_manager = create_config_manager(config_path)?;
    Ok(config_manager.load_settings()?)
}

/// Loads and validates a scene file into a map state.
pub fn load_state(path: &Path) -> Result<MapState, CliError> {
    let scene = Scene::load(path)?;
    Ok(scene.into_state()?)
}

/// Writes a map state as a scene file.
pub fn save_state(state: &MapState, path: &Path) -> Result<(), CliError> {
    Scene::from_state(state).save(path)?;
    Ok(())
}

/// Joins layer ids for table output.
pub fn format_ids(ids: &[LayerId]) -> String {
    if ids.is_empty() {
        return "(empty)".to_string();
    }
    ids.iter().map(LayerId::as_str).collect::<Vec<_>>().join(", ")
}

/// Pretty-prints a value as JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Output(format!("Failed to serialize to JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
