//! Drag session state machine
//!
//! A [`DragSession`] lives for the whole application and is either idle or
//! tracking one drag gesture. It reacts to [`DragEvent`]s and answers with
//! the [`Command`]s the host should apply. Every lookup that fails turns the
//! gesture into a no-op; a drag never leaves shared state half updated.

use super::registry::DndItems;
use super::reorder::compute_order;
use super::types::{ContainerId, DndId};
use crate::command::Command;
use crate::models::{Layer, LayerId, find_layer};
use crate::tracing::span_names;

/// Input events from the host's drag-and-drop toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// A drag started on `item_id`.
    Start {
        /// Id of the item under the pointer
        item_id: DndId,
    },
    /// The dragged item was released.
    End {
        /// Id of the dragged item
        active_id: DndId,
        /// Id of the drop target, `None` when released over empty space
        over_id: Option<DndId>,
    },
    /// The toolkit aborted the drag (e.g. Escape pressed).
    Cancel,
}

/// State of the drag session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,
    /// A layer is being dragged
    Dragging {
        /// Snapshot of the dragged layer, for the drag overlay
        layer: Layer,
    },
}

/// The application's single drag session.
#[derive(Debug, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns true while a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The layer being dragged, for rendering a drag preview.
    #[must_use]
    pub const fn active_layer(&self) -> Option<&Layer> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging { layer } => Some(layer),
        }
    }

    /// Handles one drag event.
    ///
    /// `items` must be the container map from before the drop.
    pub fn handle(&mut self, event: DragEvent, layers: &[Layer], items: &DndItems) -> Vec<Command> {
        match event {
            DragEvent::Start { item_id } => self.on_drag_start(&item_id, layers),
            DragEvent::End { active_id, over_id } => {
                self.on_drag_end(&active_id, over_id.as_ref(), items)
            }
            DragEvent::Cancel => {
                if self.is_dragging() {
                    tracing::debug!("Drag cancelled");
                }
                self.reset();
                Vec::new()
            }
        }
    }

    /// Drops any in-progress drag without emitting commands.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    fn on_drag_start(&mut self, item_id: &DndId, layers: &[Layer]) -> Vec<Command> {
        let _span = crate::trace_operation_debug!(span_names::DND_DRAG_START, item_id = %item_id)
            .entered();

        let Some(layer) = item_id.as_layer().and_then(|id| find_layer(layers, id)) else {
            tracing::debug!("Drag start on unknown item, ignoring");
            return Vec::new();
        };
        if let DragState::Dragging { layer: previous } = &self.state {
            tracing::warn!(previous = %previous.id, "Drag started while another drag was active");
        }

        let mut commands = Vec::new();
        if layer.config.is_config_active {
            commands.push(Command::SetLayerConfigActive {
                layer_id: layer.id.clone(),
                active: false,
            });
        }

        let mut snapshot = layer.clone();
        snapshot.config.is_config_active = false;
        self.state = DragState::Dragging { layer: snapshot };
        commands
    }

    fn on_drag_end(
        &mut self,
        active_id: &DndId,
        over_id: Option<&DndId>,
        items: &DndItems,
    ) -> Vec<Command> {
        let _span = crate::trace_operation_debug!(
            span_names::DND_DRAG_END,
            active_id = %active_id,
            over_id = ?over_id
        )
        .entered();

        if !self.is_dragging() {
            tracing::debug!("Drag end without an active drag, ignoring");
            return Vec::new();
        }
        self.state = DragState::Idle;

        let Some(over_id) = over_id else {
            tracing::debug!("Dropped outside any target");
            return Vec::new();
        };
        let (Some(active_container), Some(over_container)) =
            (items.find_container(active_id), items.find_container(over_id))
        else {
            tracing::debug!("Drop references an unknown container, ignoring");
            return Vec::new();
        };
        let Some(active_layer) = active_id.as_layer() else {
            return Vec::new();
        };

        let command = if active_container == over_container {
            Self::same_container_drop(items, active_container, active_layer, over_id)
        } else {
            Self::cross_container_drop(items, over_container, active_layer)
        };
        command.into_iter().collect()
    }

    fn same_container_drop(
        items: &DndItems,
        container: ContainerId,
        active: &LayerId,
        over_id: &DndId,
    ) -> Option<Command> {
        let over = over_id.as_layer()?;
        let container_items = items.get(container)?;
        let global = items.sortable_list();
        let new_order = compute_order(global, container_items, active, over);
        if new_order.as_slice() == global {
            tracing::debug!(%container, "Reorder left the order unchanged");
            return None;
        }
        tracing::debug!(%container, %active, %over, "Reordering layers");
        Some(Command::ReorderLayers { new_order })
    }

    fn cross_container_drop(
        items: &DndItems,
        target: ContainerId,
        active: &LayerId,
    ) -> Option<Command> {
        let Some(pane) = target.pane_index() else {
            tracing::debug!("Cross-container drop into the master list, ignoring");
            return None;
        };
        if items.pane(pane)?.contains(active) {
            tracing::debug!(pane, %active, "Layer already in target pane");
            return None;
        }
        tracing::debug!(pane, %active, "Adding layer to pane");
        Some(Command::ToggleLayerMembership {
            pane,
            layer_id: active.clone(),
        })
    }
}
