//! Core data structures: layers, split-map panes and viewports.

mod layer;
mod split_map;
mod viewport;

pub use layer::{Layer, LayerConfig, LayerId, LayerType, find_layer};
pub use split_map::SplitMap;
pub use viewport::{ViewportOverride, ViewportState};
