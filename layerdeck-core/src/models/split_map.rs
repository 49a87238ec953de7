//! Split-map pane descriptors

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::layer::LayerId;
use super::viewport::ViewportOverride;

/// One pane of the split map view.
///
/// `layers` records membership: a layer is a member of the pane when its
/// entry is `true`. Membership is not exclusive across panes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitMap {
    /// Layer membership
    #[serde(default)]
    pub layers: BTreeMap<LayerId, bool>,
    /// Pane-specific viewport fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<ViewportOverride>,
}

impl SplitMap {
    /// Creates an empty pane.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pane with the given members.
    #[must_use]
    pub fn with_members<I>(members: I) -> Self
    where
        I: IntoIterator<Item = LayerId>,
    {
        Self {
            layers: members.into_iter().map(|id| (id, true)).collect(),
            viewport: None,
        }
    }

    /// Returns true if the layer is a member of this pane.
    #[must_use]
    pub fn contains(&self, id: &LayerId) -> bool {
        self.layers.get(id).copied().unwrap_or(false)
    }

    /// Iterates over member layer ids in id order.
    pub fn members(&self) -> impl Iterator<Item = &LayerId> {
        self.layers
            .iter()
            .filter_map(|(id, member)| member.then_some(id))
    }

    /// Flips the membership of a layer and returns the new state.
    pub fn toggle(&mut self, id: &LayerId) -> bool {
        let member = !self.contains(id);
        self.layers.insert(id.clone(), member);
        member
    }

    /// Removes a layer from this pane. Returns true if it was a member.
    pub fn remove(&mut self, id: &LayerId) -> bool {
        self.layers.remove(id).unwrap_or(false)
    }
}
