//! Host-side controller tying state, containers and the drag session together
//!
//! [`LayerDeck`] is what a UI host embeds: it forwards toolkit drag events
//! to the [`DragSession`], applies the resulting commands to its
//! [`MapState`] and exposes the derived props (containers, drag overlay,
//! per-viewport panels) for rendering.

use crate::command::Command;
use crate::dnd::{ContainerRegistry, DndItems, DragEvent, DragSession};
use crate::error::LayerDeckResult;
use crate::models::{Layer, ViewportState};
use crate::state::MapState;
use crate::viewport_sync::AuxPanelProps;

/// Layer ordering controller for one map application instance.
#[derive(Debug)]
pub struct LayerDeck {
    state: MapState,
    registry: ContainerRegistry,
    session: DragSession,
}

impl LayerDeck {
    /// Creates a controller over `state`.
    #[must_use]
    pub fn new(state: MapState) -> Self {
        Self {
            state,
            registry: ContainerRegistry::new(),
            session: DragSession::new(),
        }
    }

    /// The current map state.
    #[must_use]
    pub const fn state(&self) -> &MapState {
        &self.state
    }

    /// Mutable access for host actions outside the drag path (split
    /// toggles, viewport changes). Revision tracking keeps the container
    /// cache consistent.
    pub fn state_mut(&mut self) -> &mut MapState {
        &mut self.state
    }

    /// Consumes the controller and returns its state.
    #[must_use]
    pub fn into_state(self) -> MapState {
        self.state
    }

    /// The drag-and-drop containers for the current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the layer order references a missing layer.
    pub fn dnd_items(&mut self) -> LayerDeckResult<&DndItems> {
        Ok(self.registry.items(&self.state)?)
    }

    /// Number of container rebuilds so far.
    #[must_use]
    pub const fn rebuild_count(&self) -> u64 {
        self.registry.rebuild_count()
    }

    /// The layer being dragged, if any.
    #[must_use]
    pub const fn active_layer(&self) -> Option<&Layer> {
        self.session.active_layer()
    }

    /// Handles a drag event and applies the commands it produces.
    ///
    /// Returns the commands that changed the state.
    ///
    /// # Errors
    ///
    /// Returns an error if the shared state is corrupt (broken layer
    /// reference) or a command is rejected. The drag session is reset in
    /// that case and no command is applied.
    pub fn handle_drag(&mut self, event: DragEvent) -> LayerDeckResult<Vec<Command>> {
        let items = match self.registry.items(&self.state) {
            Ok(items) => items,
            Err(e) => {
                self.session.reset();
                return Err(e.into());
            }
        };
        let commands = self.session.handle(event, self.state.layers(), items);

        let mut applied = Vec::with_capacity(commands.len());
        for command in commands {
            match self.state.apply(&command) {
                Ok(true) => applied.push(command),
                Ok(false) => tracing::debug!(%command, "Command was redundant"),
                Err(e) => {
                    tracing::error!(%command, error = %e, "Command rejected by map state");
                    self.session.reset();
                    return Err(e.into());
                }
            }
        }
        Ok(applied)
    }

    /// Whether split panes are viewed independently.
    #[must_use]
    pub fn is_disjoint(&self) -> bool {
        self.state.sync_policy().is_disjoint()
    }

    /// Effective viewport of every pane (the base viewport when unsplit).
    #[must_use]
    pub fn effective_viewports(&self) -> Vec<ViewportState> {
        self.state
            .sync_policy()
            .effective_viewports(self.state.viewport(), self.state.split_maps())
    }

    /// Props of the auxiliary per-viewport panels to render.
    #[must_use]
    pub fn aux_panels(&self) -> Vec<AuxPanelProps> {
        self.state
            .sync_policy()
            .aux_panels(self.state.viewport(), self.state.split_maps())
    }
}
