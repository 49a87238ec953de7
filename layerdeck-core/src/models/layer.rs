//! Layer entities
//!
//! A [`Layer`] is one visual layer of the map. Its identity is a [`LayerId`],
//! and everything the ordering core needs to know about it lives in
//! [`LayerConfig`].

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dnd::SORTABLE_LIST_KEY;

/// Length of generated layer ids.
const GENERATED_ID_LEN: usize = 7;

/// Identifier of a layer.
///
/// Layer ids are opaque strings. They share a namespace with container keys
/// on the drag-and-drop surface, so ids equal to `"sortablelist"` or to a
/// decimal pane index are reserved (see [`LayerId::is_reserved`]).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(String);

impl LayerId {
    /// Creates a layer id from any string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random layer id.
    #[must_use]
    pub fn generate() -> Self {
        let mut simple = Uuid::new_v4().simple().to_string();
        simple.truncate(GENERATED_ID_LEN);
        // A hex prefix can be all digits, which would collide with pane keys.
        if simple.bytes().all(|b| b.is_ascii_digit()) {
            simple.replace_range(0..1, "l");
        }
        Self(simple)
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this id collides with a container key.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.0 == SORTABLE_LIST_KEY
            || (!self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit()))
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Kind of a layer.
///
/// The ordering core never branches on the type; it is carried for display
/// and for scene round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    /// Scatter points
    Point,
    /// Origin/destination arcs
    Arc,
    /// Origin/destination lines
    Line,
    /// Square grid aggregation
    Grid,
    /// Hexbin aggregation
    Hexagon,
    /// Polygon, line and point features from GeoJSON
    Geojson,
    /// Point clusters
    Cluster,
    /// Icons at point locations
    Icon,
    /// Density heatmap
    Heatmap,
    /// H3 hexagon cells
    H3,
    /// Animated trips
    Trip,
    /// S2 cells
    S2,
    /// Any type this crate does not know about
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Point => "point",
            Self::Arc => "arc",
            Self::Line => "line",
            Self::Grid => "grid",
            Self::Hexagon => "hexagon",
            Self::Geojson => "geojson",
            Self::Cluster => "cluster",
            Self::Icon => "icon",
            Self::Heatmap => "heatmap",
            Self::H3 => "h3",
            Self::Trip => "trip",
            Self::S2 => "s2",
            Self::Other(name) => name,
        };
        f.write_str(name)
    }
}

const fn default_visible() -> bool {
    true
}

/// Per-layer configuration bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerConfig {
    /// Display label
    pub label: String,
    /// Owning dataset
    #[serde(default)]
    pub data_id: String,
    /// Whether the layer is drawn in non-split mode
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    /// Whether the layer's configuration panel is expanded
    #[serde(default)]
    pub is_config_active: bool,
    /// Base color as RGB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<[u8; 3]>,
}

impl LayerConfig {
    /// Creates a visible, collapsed configuration.
    #[must_use]
    pub fn new(label: impl Into<String>, data_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data_id: data_id.into(),
            is_visible: true,
            is_config_active: false,
            color: None,
        }
    }
}

/// A visual map layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    /// Layer identity
    pub id: LayerId,
    /// Layer kind
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    /// Configuration bag
    pub config: LayerConfig,
}

impl Layer {
    /// Creates a layer with a default configuration.
    #[must_use]
    pub fn new(id: impl Into<LayerId>, layer_type: LayerType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            layer_type,
            config: LayerConfig::new(label, ""),
        }
    }

    /// Sets the owning dataset.
    #[must_use]
    pub fn with_data_id(mut self, data_id: impl Into<String>) -> Self {
        self.config.data_id = data_id.into();
        self
    }

    /// Sets whether the configuration panel starts expanded.
    #[must_use]
    pub const fn with_config_active(mut self, active: bool) -> Self {
        self.config.is_config_active = active;
        self
    }

    /// Sets the non-split visibility flag.
    #[must_use]
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.config.is_visible = visible;
        self
    }
}

/// Looks a layer up by id.
#[must_use]
pub fn find_layer<'a>(layers: &'a [Layer], id: &LayerId) -> Option<&'a Layer> {
    layers.iter().find(|layer| &layer.id == id)
}
