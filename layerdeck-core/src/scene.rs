//! Scene files
//!
//! A scene is a serialized snapshot of the [`MapState`]: layers, global
//! order, split-map panes and viewport flags. Scenes are stored as JSON,
//! TOML or YAML, chosen by file extension.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Layer, LayerId, SplitMap, ViewportState};
use crate::state::MapState;
use crate::tracing::span_names;

/// Errors from reading, writing or validating scenes.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Reading or writing the file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Affected path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not name a known format.
    #[error("unsupported scene format: {0} (expected .json, .toml, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    /// The content could not be parsed.
    #[error("failed to parse {format} scene: {message}")]
    Parse {
        /// Scene format
        format: SceneFormat,
        /// Parser message
        message: String,
    },

    /// The scene could not be serialized.
    #[error("failed to serialize {format} scene: {message}")]
    Serialize {
        /// Scene format
        format: SceneFormat,
        /// Serializer message
        message: String,
    },

    /// The scene parsed but breaks a state invariant.
    #[error("invalid scene: {0}")]
    Invalid(String),
}

/// Result type for scene operations
pub type SceneResult<T> = Result<T, SceneError>;

/// On-disk format of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneFormat {
    /// JSON
    Json,
    /// TOML
    Toml,
    /// YAML
    Yaml,
}

impl SceneFormat {
    /// Picks the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnsupportedFormat`] for unknown extensions.
    pub fn from_path(path: &Path) -> SceneResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(SceneError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl fmt::Display for SceneFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Toml => write!(f, "TOML"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}

const fn default_synced() -> bool {
    true
}

/// Viewport section of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneMapState {
    /// Shared base viewport
    #[serde(default)]
    pub viewport: ViewportState,
    /// Whether panes share one viewport
    #[serde(default = "default_synced")]
    pub is_viewport_synced: bool,
    /// Whether zoom is shared by unsynced panes
    #[serde(default)]
    pub is_zoom_locked: bool,
}

impl Default for SceneMapState {
    fn default() -> Self {
        Self {
            viewport: ViewportState::default(),
            is_viewport_synced: true,
            is_zoom_locked: false,
        }
    }
}

/// Serialized form of a [`MapState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Layer collection
    #[serde(default)]
    pub layers: Vec<Layer>,
    /// Global order; defaults to collection order when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_order: Option<Vec<LayerId>>,
    /// Split-map panes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub split_maps: Vec<SplitMap>,
    /// Viewport flags
    #[serde(default)]
    pub map_state: SceneMapState,
}

impl Scene {
    /// Snapshots a state.
    #[must_use]
    pub fn from_state(state: &MapState) -> Self {
        Self {
            layers: state.layers().to_vec(),
            layer_order: Some(state.layer_order().to_vec()),
            split_maps: state.split_maps().to_vec(),
            map_state: SceneMapState {
                viewport: *state.viewport(),
                is_viewport_synced: state.is_viewport_synced(),
                is_zoom_locked: state.is_zoom_locked(),
            },
        }
    }

    /// Validates the scene and turns it into a state.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Invalid`] if layer ids are duplicated or
    /// reserved, the order is not a permutation of the layer ids, or a
    /// pane references an unknown layer.
    pub fn into_state(self) -> SceneResult<MapState> {
        self.validate()?;
        let order = self
            .layer_order
            .unwrap_or_else(|| self.layers.iter().map(|layer| layer.id.clone()).collect());
        Ok(MapState::new(self.layers, order)
            .with_split_maps(self.split_maps)
            .with_viewport(self.map_state.viewport)
            .with_viewport_synced(self.map_state.is_viewport_synced)
            .with_zoom_locked(self.map_state.is_zoom_locked))
    }

    /// Checks the scene invariants.
    ///
    /// # Errors
    ///
    /// See [`Scene::into_state`].
    pub fn validate(&self) -> SceneResult<()> {
        let mut ids = HashSet::with_capacity(self.layers.len());
        for layer in &self.layers {
            if layer.id.is_reserved() {
                return Err(SceneError::Invalid(format!(
                    "layer id '{}' is reserved for containers",
                    layer.id
                )));
            }
            if !ids.insert(&layer.id) {
                return Err(SceneError::Invalid(format!(
                    "duplicate layer id '{}'",
                    layer.id
                )));
            }
        }

        if let Some(order) = &self.layer_order {
            let mut seen = HashSet::with_capacity(order.len());
            for id in order {
                if !ids.contains(id) {
                    return Err(SceneError::Invalid(format!(
                        "layerOrder references unknown layer '{id}'"
                    )));
                }
                if !seen.insert(id) {
                    return Err(SceneError::Invalid(format!(
                        "layerOrder lists '{id}' more than once"
                    )));
                }
            }
            if seen.len() != ids.len() {
                return Err(SceneError::Invalid(
                    "layerOrder does not list every layer".to_string(),
                ));
            }
        }

        for (index, pane) in self.split_maps.iter().enumerate() {
            if let Some(id) = pane.layers.keys().find(|id| !ids.contains(id)) {
                return Err(SceneError::Invalid(format!(
                    "split map {index} references unknown layer '{id}'"
                )));
            }
        }
        Ok(())
    }

    /// Parses a scene from a string.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Parse`] if the content is malformed.
    pub fn from_str_as(content: &str, format: SceneFormat) -> SceneResult<Self> {
        let parse_error = |message: String| SceneError::Parse { format, message };
        match format {
            SceneFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
            SceneFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
            SceneFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
        }
    }

    /// Serializes a scene to a string.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Serialize`] if serialization fails.
    pub fn to_string_as(&self, format: SceneFormat) -> SceneResult<String> {
        let serialize_error = |message: String| SceneError::Serialize { format, message };
        match format {
            SceneFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|e| serialize_error(e.to_string()))
            }
            SceneFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| serialize_error(e.to_string()))
            }
            SceneFormat::Yaml => {
                serde_yaml::to_string(self).map_err(|e| serialize_error(e.to_string()))
            }
        }
    }

    /// Loads and validates a scene file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> SceneResult<Self> {
        let _span =
            crate::trace_operation!(span_names::SCENE_LOAD, path = %path.display()).entered();
        let format = SceneFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::from_str_as(&content, format)?;
        scene.validate()?;
        tracing::debug!(
            layers = scene.layers.len(),
            panes = scene.split_maps.len(),
            "Loaded scene"
        );
        Ok(scene)
    }

    /// Writes the scene, in the format named by the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the format is unknown or writing fails.
    pub fn save(&self, path: &Path) -> SceneResult<()> {
        let _span =
            crate::trace_operation!(span_names::SCENE_SAVE, path = %path.display()).entered();
        let format = SceneFormat::from_path(path)?;
        let content = self.to_string_as(format)?;
        fs::write(path, content).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
