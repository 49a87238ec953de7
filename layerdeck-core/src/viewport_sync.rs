//! Split-viewport synchronization policy
//!
//! Decides whether split panes share one viewport ("synced") or have
//! diverged ("disjoint"), how many instances of the per-viewport auxiliary
//! panels (e.g. a geocoder) to render, and which viewport each pane uses.

use serde::Serialize;

use crate::models::{SplitMap, ViewportState};

/// Returns true iff split panes are viewed independently.
#[must_use]
pub const fn is_disjoint(is_split: bool, is_viewport_synced: bool, pane_count: usize) -> bool {
    is_split && !is_viewport_synced && pane_count > 1
}

/// Number of auxiliary per-viewport panel instances to render.
#[must_use]
pub const fn aux_panel_count(is_split: bool, is_viewport_synced: bool, pane_count: usize) -> usize {
    if is_disjoint(is_split, is_viewport_synced, pane_count) {
        pane_count
    } else {
        1
    }
}

/// Effective viewport of every pane.
///
/// Disjoint panes get the base state overlaid with their own fields; with
/// `zoom_locked` the base zoom is kept for all of them. Otherwise every
/// pane uses the base state. Without panes the result is the base state
/// alone.
#[must_use]
pub fn effective_viewports(
    base: &ViewportState,
    split_maps: &[SplitMap],
    disjoint: bool,
    zoom_locked: bool,
) -> Vec<ViewportState> {
    if split_maps.is_empty() {
        return vec![*base];
    }
    split_maps
        .iter()
        .map(|pane| match (&pane.viewport, disjoint) {
            (Some(fields), true) => {
                let mut merged = base.overlay(fields);
                if zoom_locked {
                    merged.zoom = base.zoom;
                }
                merged
            }
            _ => *base,
        })
        .collect()
}

/// Props for one auxiliary per-viewport panel instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuxPanelProps {
    /// Pane the instance belongs to; `None` for the single shared instance
    pub pane: Option<usize>,
    /// Viewport the instance operates on
    pub viewport: ViewportState,
}

/// Inputs of the synchronization policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSyncPolicy {
    /// Whether the map is split
    pub is_split: bool,
    /// Whether the panes share one viewport
    pub is_viewport_synced: bool,
    /// Whether the zoom is shared by unsynced panes
    pub is_zoom_locked: bool,
    /// Number of panes
    pub pane_count: usize,
}

impl ViewportSyncPolicy {
    /// See [`is_disjoint`].
    #[must_use]
    pub const fn is_disjoint(&self) -> bool {
        is_disjoint(self.is_split, self.is_viewport_synced, self.pane_count)
    }

    /// See [`aux_panel_count`].
    #[must_use]
    pub const fn aux_panel_count(&self) -> usize {
        aux_panel_count(self.is_split, self.is_viewport_synced, self.pane_count)
    }

    /// Per-pane viewports; see [`effective_viewports`].
    #[must_use]
    pub fn effective_viewports(
        &self,
        base: &ViewportState,
        split_maps: &[SplitMap],
    ) -> Vec<ViewportState> {
        effective_viewports(base, split_maps, self.is_disjoint(), self.is_zoom_locked)
    }

    /// Props for every auxiliary panel instance to render.
    #[must_use]
    pub fn aux_panels(&self, base: &ViewportState, split_maps: &[SplitMap]) -> Vec<AuxPanelProps> {
        if !self.is_disjoint() {
            return vec![AuxPanelProps {
                pane: None,
                viewport: *base,
            }];
        }
        self.effective_viewports(base, split_maps)
            .into_iter()
            .enumerate()
            .map(|(index, viewport)| AuxPanelProps {
                pane: Some(index),
                viewport,
            })
            .collect()
    }
}
