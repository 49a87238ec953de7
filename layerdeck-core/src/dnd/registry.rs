//! Container registry: which layers each drop container shows
//!
//! [`build_dnd_items`] derives, from the authoritative layer order and the
//! split-map membership, the ordered layer list of every container.
//! [`ContainerRegistry`] caches that derivation and only rebuilds it when
//! the host state's revision token changes.

use std::collections::HashSet;

use serde::Serialize;
use serde::ser::SerializeMap;

use super::error::DndError;
use super::types::{ContainerId, DndId};
use crate::models::{Layer, LayerId, SplitMap};
use crate::state::{MapState, RevisionToken};
use crate::tracing::span_names;

/// Derived container → ordered layer ids map.
///
/// The master list always equals the global layer order. Each pane list is
/// the subsequence of the global order restricted to that pane's members.
/// Pane lists exist only in split mode (two or more panes).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DndItems {
    sortable_list: Vec<LayerId>,
    panes: Vec<Vec<LayerId>>,
}

impl DndItems {
    /// Items of the master list.
    #[must_use]
    pub fn sortable_list(&self) -> &[LayerId] {
        &self.sortable_list
    }

    /// Items of a pane, if that pane container exists.
    #[must_use]
    pub fn pane(&self, index: usize) -> Option<&[LayerId]> {
        self.panes.get(index).map(Vec::as_slice)
    }

    /// Number of pane containers.
    #[must_use]
    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    /// Items of any container.
    #[must_use]
    pub fn get(&self, container: ContainerId) -> Option<&[LayerId]> {
        match container {
            ContainerId::SortableList => Some(&self.sortable_list),
            ContainerId::Pane(index) => self.pane(index),
        }
    }

    /// Iterates over containers in lookup order: master list, then panes by index.
    pub fn containers(&self) -> impl Iterator<Item = (ContainerId, &[LayerId])> {
        std::iter::once((ContainerId::SortableList, self.sortable_list.as_slice())).chain(
            self.panes
                .iter()
                .enumerate()
                .map(|(index, items)| (ContainerId::Pane(index), items.as_slice())),
        )
    }

    /// Resolves the container a drag id belongs to.
    ///
    /// A container key resolves to itself when that container exists. A
    /// layer id resolves to the first container listing it, master list
    /// first and then panes by index. Since the master list holds every
    /// layer, that is where any known layer resolves; pane containers are
    /// reached through their own keys.
    #[must_use]
    pub fn find_container(&self, id: &DndId) -> Option<ContainerId> {
        match id {
            DndId::Container(container) => self.get(*container).map(|_| *container),
            DndId::Layer(layer) => self
                .containers()
                .find(|(_, items)| items.contains(layer))
                .map(|(container, _)| container),
        }
    }
}

impl Serialize for DndItems {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.panes.len()))?;
        for (container, items) in self.containers() {
            map.serialize_entry(&container, items)?;
        }
        map.end()
    }
}

/// Builds the container map from the shared state inputs.
///
/// # Errors
///
/// Returns [`DndError::BrokenReference`] if `layer_order` names a layer
/// missing from `layers`. That means the shared state is corrupt; the
/// error is logged and no partial result is produced.
pub fn build_dnd_items(
    layers: &[Layer],
    layer_order: &[LayerId],
    split_maps: &[SplitMap],
) -> Result<DndItems, DndError> {
    let known: HashSet<&LayerId> = layers.iter().map(|layer| &layer.id).collect();
    if let Some(missing) = layer_order.iter().find(|id| !known.contains(id)) {
        tracing::error!(
            layer_id = %missing,
            "Layer order references a layer that does not exist"
        );
        return Err(DndError::BrokenReference(missing.clone()));
    }

    let panes = if split_maps.len() > 1 {
        split_maps
            .iter()
            .map(|pane| {
                layer_order
                    .iter()
                    .filter(|id| pane.contains(id))
                    .cloned()
                    .collect()
            })
            .collect()
    } else {
        Vec::new()
    };

    Ok(DndItems {
        sortable_list: layer_order.to_vec(),
        panes,
    })
}

/// Memoized [`build_dnd_items`] keyed by the host state's revision token.
#[derive(Debug, Default)]
pub struct ContainerRegistry {
    cached: Option<(RevisionToken, DndItems)>,
    rebuilds: u64,
}

impl ContainerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the container map for `state`, rebuilding only if the
    /// layers, the order or the split maps changed since the last call.
    ///
    /// # Errors
    ///
    /// Propagates [`DndError::BrokenReference`] from the rebuild.
    pub fn items(&mut self, state: &MapState) -> Result<&DndItems, DndError> {
        let token = state.revision();
        let entry = match self.cached.take() {
            Some((cached_token, items)) if cached_token == token => (cached_token, items),
            _ => {
                let _span = crate::trace_operation_debug!(
                    span_names::DND_REBUILD,
                    layer_count = state.layer_order().len(),
                    pane_count = state.split_maps().len()
                )
                .entered();
                let items =
                    build_dnd_items(state.layers(), state.layer_order(), state.split_maps())?;
                self.rebuilds += 1;
                tracing::debug!(
                    containers = 1 + items.pane_count(),
                    "Rebuilt drag-and-drop containers"
                );
                (token, items)
            }
        };
        let (_, items) = self.cached.insert(entry);
        Ok(items)
    }

    /// Drops the cached result.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Number of rebuilds performed so far.
    #[must_use]
    pub const fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }
}
