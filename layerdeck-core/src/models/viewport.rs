//! Viewport state shared by the map panes

use serde::{Deserialize, Serialize};

/// Camera state of a map viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportState {
    /// Center latitude in degrees
    pub latitude: f64,
    /// Center longitude in degrees
    pub longitude: f64,
    /// Zoom level
    pub zoom: f64,
    /// Pitch in degrees
    #[serde(default)]
    pub pitch: f64,
    /// Bearing in degrees
    #[serde(default)]
    pub bearing: f64,
    /// Width in pixels
    #[serde(default)]
    pub width: u32,
    /// Height in pixels
    #[serde(default)]
    pub height: u32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            latitude: 37.75,
            longitude: -122.4,
            zoom: 9.0,
            pitch: 0.0,
            bearing: 0.0,
            width: 800,
            height: 800,
        }
    }
}

impl ViewportState {
    /// Returns this state with every field set in `pane` replacing ours.
    #[must_use]
    pub fn overlay(&self, pane: &ViewportOverride) -> Self {
        Self {
            latitude: pane.latitude.unwrap_or(self.latitude),
            longitude: pane.longitude.unwrap_or(self.longitude),
            zoom: pane.zoom.unwrap_or(self.zoom),
            pitch: pane.pitch.unwrap_or(self.pitch),
            bearing: pane.bearing.unwrap_or(self.bearing),
            width: pane.width.unwrap_or(self.width),
            height: pane.height.unwrap_or(self.height),
        }
    }
}

/// Pane-specific viewport fields.
///
/// Unset fields fall back to the shared base viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportOverride {
    /// Center latitude in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Center longitude in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Zoom level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    /// Pitch in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
    /// Bearing in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearing: Option<f64>,
    /// Width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl ViewportOverride {
    /// Returns true if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.latitude.is_none()
            && self.longitude.is_none()
            && self.zoom.is_none()
            && self.pitch.is_none()
            && self.bearing.is_none()
            && self.width.is_none()
            && self.height.is_none()
    }
}
