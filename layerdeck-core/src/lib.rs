//! `LayerDeck` Core Library
//!
//! This crate provides the layer-ordering core of a map visualization
//! application: which drop container (the master layer list or a split-map
//! pane) lists which layers, how a drag within or between containers
//! rewrites the global layer order or pane membership, and whether split
//! panes share one viewport.
//!
//! # Crate Structure
//!
//! - [`models`] - Layers, split-map panes, viewports
//! - [`dnd`] - Container registry, reorder algorithm, drag session
//! - [`viewport_sync`] - Synced vs disjoint split viewports
//! - [`command`] - Commands emitted by the core
//! - [`state`] - Authoritative map state that applies commands
//! - [`controller`] - `LayerDeck`, the host-facing entry point
//! - [`scene`] - Scene files (JSON, TOML, YAML)
//! - [`config`] - Application settings
//! - [`tracing`] - Structured logging setup

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod command;
pub mod config;
pub mod controller;
pub mod dnd;
pub mod error;
pub mod models;
pub mod scene;
pub mod state;
pub mod tracing;
pub mod viewport_sync;

pub use command::Command;
pub use config::{AppSettings, ConfigError, ConfigManager, ConfigResult};
pub use controller::LayerDeck;
pub use dnd::{
    ContainerId, ContainerRegistry, DndError, DndId, DndItems, DragEvent, DragSession, DragState,
    SORTABLE_LIST_KEY, array_move, build_dnd_items, compute_order,
};
pub use error::{LayerDeckError, LayerDeckResult};
pub use models::{
    Layer, LayerConfig, LayerId, LayerType, SplitMap, ViewportOverride, ViewportState,
};
pub use scene::{Scene, SceneError, SceneFormat, SceneResult};
pub use state::{MapState, RevisionToken, StateError, StateResult};
pub use tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, get_tracing_config,
    init_tracing, is_tracing_initialized, span_names,
};
pub use viewport_sync::{
    AuxPanelProps, ViewportSyncPolicy, aux_panel_count, effective_viewports, is_disjoint,
};
