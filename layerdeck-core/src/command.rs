//! Commands emitted by the drag-and-drop core
//!
//! The core never mutates shared state. It returns [`Command`] values that
//! the host applies through [`MapState::apply`](crate::state::MapState::apply).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::LayerId;

/// A mutation request for the shared map state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// Replace the global layer order.
    #[serde(rename_all = "camelCase")]
    ReorderLayers {
        /// The complete new order
        new_order: Vec<LayerId>,
    },
    /// Flip a layer's membership in a split pane.
    #[serde(rename_all = "camelCase")]
    ToggleLayerMembership {
        /// Pane index
        pane: usize,
        /// Layer to toggle
        layer_id: LayerId,
    },
    /// Expand or collapse a layer's configuration panel.
    #[serde(rename_all = "camelCase")]
    SetLayerConfigActive {
        /// Target layer
        layer_id: LayerId,
        /// New state
        active: bool,
    },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReorderLayers { new_order } => {
                write!(f, "reorder layers [")?;
                for (i, id) in new_order.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{id}")?;
                }
                write!(f, "]")
            }
            Self::ToggleLayerMembership { pane, layer_id } => {
                write!(f, "toggle layer {layer_id} in pane {pane}")
            }
            Self::SetLayerConfigActive { layer_id, active } => {
                write!(f, "set config active of {layer_id} to {active}")
            }
        }
    }
}
