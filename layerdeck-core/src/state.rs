//! Authoritative map state
//!
//! [`MapState`] owns the layers, the global layer order, the split-map
//! panes and the viewport flags. It is mutated only through its methods,
//! each of which either applies fully or returns an error without touching
//! anything. Every effective mutation bumps a revision counter so derived
//! data (the drag-and-drop containers) knows when to rebuild.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use crate::command::Command;
use crate::models::{Layer, LayerId, SplitMap, ViewportOverride, ViewportState};
use crate::tracing::span_names;
use crate::viewport_sync::ViewportSyncPolicy;

/// Errors returned when a mutation is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// The proposed order is not a permutation of the current one.
    #[error("new layer order is not a permutation of the current order")]
    InvalidOrder,

    /// The pane index is out of range.
    #[error("pane not found: {0}")]
    PaneNotFound(usize),

    /// The layer does not exist.
    #[error("layer not found: {0}")]
    LayerNotFound(LayerId),

    /// A layer with this id already exists.
    #[error("duplicate layer id: {0}")]
    DuplicateLayer(LayerId),

    /// Split mode needs at least two panes.
    #[error("invalid pane count: {0} (split mode needs at least 2)")]
    InvalidPaneCount(usize),

    /// The id collides with a drop container key.
    #[error("layer id is reserved for containers: {0}")]
    ReservedId(LayerId),
}

/// Result type for state mutations
pub type StateResult<T> = Result<T, StateError>;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

fn next_instance() -> u64 {
    NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed)
}

/// Version stamp of the inputs of the drag-and-drop containers.
///
/// Tokens of different [`MapState`] instances never compare equal, so a
/// cache keyed by the token cannot serve one state's containers for
/// another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RevisionToken {
    /// Identity of the owning state; fresh for every new or cloned state
    pub instance: u64,
    /// Bumped when the layer collection changes
    pub layers: u64,
    /// Bumped when the global order changes
    pub order: u64,
    /// Bumped when pane membership or the pane set changes
    pub splits: u64,
}

/// The shared application state the drag-and-drop core reads from.
///
/// Equality compares content only; the revision token is ignored.
#[derive(Debug)]
pub struct MapState {
    layers: Vec<Layer>,
    layer_order: Vec<LayerId>,
    split_maps: Vec<SplitMap>,
    viewport: ViewportState,
    is_viewport_synced: bool,
    is_zoom_locked: bool,
    revision: RevisionToken,
}

impl Clone for MapState {
    fn clone(&self) -> Self {
        Self {
            layers: self.layers.clone(),
            layer_order: self.layer_order.clone(),
            split_maps: self.split_maps.clone(),
            viewport: self.viewport,
            is_viewport_synced: self.is_viewport_synced,
            is_zoom_locked: self.is_zoom_locked,
            revision: RevisionToken {
                instance: next_instance(),
                ..self.revision
            },
        }
    }
}

impl PartialEq for MapState {
    fn eq(&self, other: &Self) -> bool {
        self.layers == other.layers
            && self.layer_order == other.layer_order
            && self.split_maps == other.split_maps
            && self.viewport == other.viewport
            && self.is_viewport_synced == other.is_viewport_synced
            && self.is_zoom_locked == other.is_zoom_locked
    }
}

impl MapState {
    /// Creates an unsplit state with a synced default viewport.
    #[must_use]
    pub fn new(layers: Vec<Layer>, layer_order: Vec<LayerId>) -> Self {
        Self {
            layers,
            layer_order,
            split_maps: Vec::new(),
            viewport: ViewportState::default(),
            is_viewport_synced: true,
            is_zoom_locked: false,
            revision: RevisionToken {
                instance: next_instance(),
                ..RevisionToken::default()
            },
        }
    }

    /// Creates a state whose order is the layers in collection order.
    #[must_use]
    pub fn from_layers(layers: Vec<Layer>) -> Self {
        let order = layers.iter().map(|layer| layer.id.clone()).collect();
        Self::new(layers, order)
    }

    /// Sets the split-map panes.
    #[must_use]
    pub fn with_split_maps(mut self, split_maps: Vec<SplitMap>) -> Self {
        self.split_maps = split_maps;
        self
    }

    /// Sets the base viewport.
    #[must_use]
    pub const fn with_viewport(mut self, viewport: ViewportState) -> Self {
        self.viewport = viewport;
        self
    }

    /// Sets whether panes share one viewport.
    #[must_use]
    pub const fn with_viewport_synced(mut self, synced: bool) -> Self {
        self.is_viewport_synced = synced;
        self
    }

    /// Sets whether zoom is shared by unsynced panes.
    #[must_use]
    pub const fn with_zoom_locked(mut self, locked: bool) -> Self {
        self.is_zoom_locked = locked;
        self
    }

    /// All layers.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Looks a layer up by id.
    #[must_use]
    pub fn layer(&self, id: &LayerId) -> Option<&Layer> {
        self.layers.iter().find(|layer| &layer.id == id)
    }

    /// The global layer order.
    #[must_use]
    pub fn layer_order(&self) -> &[LayerId] {
        &self.layer_order
    }

    /// The split-map panes; empty when not split.
    #[must_use]
    pub fn split_maps(&self) -> &[SplitMap] {
        &self.split_maps
    }

    /// Number of panes.
    #[must_use]
    pub fn pane_count(&self) -> usize {
        self.split_maps.len()
    }

    /// Returns true in split mode (two or more panes).
    #[must_use]
    pub fn is_split(&self) -> bool {
        self.split_maps.len() > 1
    }

    /// The shared base viewport.
    #[must_use]
    pub const fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Whether panes share one viewport.
    #[must_use]
    pub const fn is_viewport_synced(&self) -> bool {
        self.is_viewport_synced
    }

    /// Whether zoom is shared by unsynced panes.
    #[must_use]
    pub const fn is_zoom_locked(&self) -> bool {
        self.is_zoom_locked
    }

    /// Current revision token.
    #[must_use]
    pub const fn revision(&self) -> RevisionToken {
        self.revision
    }

    /// Viewport policy inputs derived from this state.
    #[must_use]
    pub fn sync_policy(&self) -> ViewportSyncPolicy {
        ViewportSyncPolicy {
            is_split: self.is_split(),
            is_viewport_synced: self.is_viewport_synced,
            is_zoom_locked: self.is_zoom_locked,
            pane_count: self.pane_count(),
        }
    }

    /// Applies a command from the drag-and-drop core.
    ///
    /// Returns `Ok(true)` if the state changed and `Ok(false)` for a
    /// redundant command.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] if the command does not fit the current
    /// state. Nothing is mutated in that case.
    pub fn apply(&mut self, command: &Command) -> StateResult<bool> {
        let _span =
            crate::trace_operation_debug!(span_names::STATE_APPLY, command = %command).entered();
        match command {
            Command::ReorderLayers { new_order } => self.reorder_layers(new_order.clone()),
            Command::ToggleLayerMembership { pane, layer_id } => {
                self.toggle_layer_membership(*pane, layer_id)
            }
            Command::SetLayerConfigActive { layer_id, active } => {
                self.set_layer_config_active(layer_id, *active)
            }
        }
    }

    /// Replaces the global order.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidOrder`] unless `new_order` holds exactly
    /// the ids of the current order.
    pub fn reorder_layers(&mut self, new_order: Vec<LayerId>) -> StateResult<bool> {
        if new_order == self.layer_order {
            return Ok(false);
        }
        if !is_permutation(&self.layer_order, &new_order) {
            return Err(StateError::InvalidOrder);
        }
        self.layer_order = new_order;
        self.revision.order += 1;
        Ok(true)
    }

    /// Flips a layer's membership in a pane.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::PaneNotFound`] or [`StateError::LayerNotFound`].
    pub fn toggle_layer_membership(&mut self, pane: usize, layer_id: &LayerId) -> StateResult<bool> {
        self.ensure_layer(layer_id)?;
        let split_map = self
            .split_maps
            .get_mut(pane)
            .ok_or(StateError::PaneNotFound(pane))?;
        let member = split_map.toggle(layer_id);
        self.revision.splits += 1;
        tracing::debug!(pane, layer_id = %layer_id, member, "Toggled pane membership");
        Ok(true)
    }

    /// Removes a layer from a pane.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::PaneNotFound`] if the pane does not exist.
    pub fn remove_layer_from_pane(&mut self, pane: usize, layer_id: &LayerId) -> StateResult<bool> {
        let split_map = self
            .split_maps
            .get_mut(pane)
            .ok_or(StateError::PaneNotFound(pane))?;
        let removed = split_map.remove(layer_id);
        if removed {
            self.revision.splits += 1;
        }
        Ok(removed)
    }

    /// Expands or collapses a layer's configuration panel.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::LayerNotFound`] if the layer does not exist.
    pub fn set_layer_config_active(&mut self, layer_id: &LayerId, active: bool) -> StateResult<bool> {
        let layer = self
            .layers
            .iter_mut()
            .find(|layer| &layer.id == layer_id)
            .ok_or_else(|| StateError::LayerNotFound(layer_id.clone()))?;
        if layer.config.is_config_active == active {
            return Ok(false);
        }
        layer.config.is_config_active = active;
        self.revision.layers += 1;
        Ok(true)
    }

    /// Adds a layer on top of the order. In split mode it joins every pane.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::DuplicateLayer`] if the id is taken and
    /// [`StateError::ReservedId`] if it reads as a container key.
    pub fn add_layer(&mut self, layer: Layer) -> StateResult<()> {
        if layer.id.is_reserved() {
            return Err(StateError::ReservedId(layer.id));
        }
        if self.layer(&layer.id).is_some() {
            return Err(StateError::DuplicateLayer(layer.id));
        }
        for split_map in &mut self.split_maps {
            split_map.layers.insert(layer.id.clone(), true);
        }
        if !self.split_maps.is_empty() {
            self.revision.splits += 1;
        }
        self.layer_order.insert(0, layer.id.clone());
        self.layers.push(layer);
        self.revision.layers += 1;
        self.revision.order += 1;
        Ok(())
    }

    /// Removes a layer from the collection, the order and every pane.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::LayerNotFound`] if the layer does not exist.
    pub fn remove_layer(&mut self, layer_id: &LayerId) -> StateResult<Layer> {
        let index = self
            .layers
            .iter()
            .position(|layer| &layer.id == layer_id)
            .ok_or_else(|| StateError::LayerNotFound(layer_id.clone()))?;
        let layer = self.layers.remove(index);
        self.layer_order.retain(|id| id != layer_id);
        for split_map in &mut self.split_maps {
            split_map.layers.remove(layer_id);
        }
        self.revision.layers += 1;
        self.revision.order += 1;
        self.revision.splits += 1;
        Ok(layer)
    }

    /// Enters or leaves split mode.
    ///
    /// Entering creates `pane_count` panes, each holding every currently
    /// visible layer. Leaving takes layer visibility from pane 0.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidPaneCount`] when entering split mode
    /// with fewer than two panes.
    pub fn toggle_split(&mut self, pane_count: usize) -> StateResult<()> {
        let _span =
            crate::trace_operation!(span_names::SPLIT_TOGGLE, pane_count = pane_count).entered();
        if self.is_split() {
            let first = self.split_maps.swap_remove(0);
            self.collapse_into(&first);
            tracing::info!("Left split mode");
            return Ok(());
        }
        if pane_count < 2 {
            return Err(StateError::InvalidPaneCount(pane_count));
        }
        let visible = SplitMap::with_members(
            self.layers
                .iter()
                .filter(|layer| layer.config.is_visible)
                .map(|layer| layer.id.clone()),
        );
        self.split_maps = vec![visible; pane_count];
        self.revision.splits += 1;
        tracing::info!(pane_count, "Entered split mode");
        Ok(())
    }

    /// Closes one pane. Closing down to a single pane leaves split mode,
    /// taking layer visibility from the pane that remains.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::PaneNotFound`] if the pane does not exist.
    pub fn close_pane(&mut self, pane: usize) -> StateResult<()> {
        if pane >= self.split_maps.len() {
            return Err(StateError::PaneNotFound(pane));
        }
        self.split_maps.remove(pane);
        if self.split_maps.len() == 1 {
            let remaining = self.split_maps.remove(0);
            self.collapse_into(&remaining);
            tracing::info!(closed = pane, "Closed pane and left split mode");
        } else {
            self.revision.splits += 1;
            tracing::info!(closed = pane, "Closed pane");
        }
        Ok(())
    }

    /// Sets whether panes share one viewport.
    pub fn set_viewport_synced(&mut self, synced: bool) {
        self.is_viewport_synced = synced;
    }

    /// Sets whether zoom is shared by unsynced panes.
    pub fn set_zoom_locked(&mut self, locked: bool) {
        self.is_zoom_locked = locked;
    }

    /// Replaces the shared base viewport.
    pub fn set_viewport(&mut self, viewport: ViewportState) {
        self.viewport = viewport;
    }

    /// Replaces a pane's own viewport fields.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::PaneNotFound`] if the pane does not exist.
    pub fn set_pane_viewport(&mut self, pane: usize, fields: ViewportOverride) -> StateResult<()> {
        let split_map = self
            .split_maps
            .get_mut(pane)
            .ok_or(StateError::PaneNotFound(pane))?;
        split_map.viewport = (!fields.is_empty()).then_some(fields);
        Ok(())
    }

    fn ensure_layer(&self, layer_id: &LayerId) -> StateResult<()> {
        if self.layer(layer_id).is_some() {
            Ok(())
        } else {
            Err(StateError::LayerNotFound(layer_id.clone()))
        }
    }

    fn collapse_into(&mut self, pane: &SplitMap) {
        for layer in &mut self.layers {
            layer.config.is_visible = pane.contains(&layer.id);
        }
        self.split_maps.clear();
        self.revision.layers += 1;
        self.revision.splits += 1;
    }
}

fn is_permutation(current: &[LayerId], proposed: &[LayerId]) -> bool {
    if current.len() != proposed.len() {
        return false;
    }
    let expected: HashSet<&LayerId> = current.iter().collect();
    let mut seen = HashSet::with_capacity(proposed.len());
    proposed
        .iter()
        .all(|id| expected.contains(id) && seen.insert(id))
}
