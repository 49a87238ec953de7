//! Drag-and-drop layer ordering
//!
//! This module provides a pure model of the layer drag-and-drop surface,
//! independent of any UI toolkit.
//!
//! # Module Structure
//!
//! - `types` - Container keys and drag ids (`ContainerId`, `DndId`)
//! - `registry` - Container membership map (`DndItems`, `ContainerRegistry`)
//! - `reorder` - Same-container reorder (`compute_order`)
//! - `session` - Drag state machine (`DragSession`, `DragEvent`)
//! - `error` - Error types (`DndError`)
//!
//! # Example
//!
//! ```
//! use layerdeck_core::dnd::{DndId, DragEvent, DragSession, build_dnd_items};
//! use layerdeck_core::models::{Layer, LayerId, LayerType};
//! use layerdeck_core::Command;
//!
//! let layers = vec![
//!     Layer::new("a", LayerType::Point, "A"),
//!     Layer::new("b", LayerType::Point, "B"),
//!     Layer::new("c", LayerType::Point, "C"),
//! ];
//! let order: Vec<LayerId> = layers.iter().map(|l| l.id.clone()).collect();
//! let items = build_dnd_items(&layers, &order, &[]).unwrap();
//!
//! let mut session = DragSession::new();
//! session.handle(DragEvent::Start { item_id: DndId::parse("a") }, &layers, &items);
//! let commands = session.handle(
//!     DragEvent::End { active_id: DndId::parse("a"), over_id: Some(DndId::parse("c")) },
//!     &layers,
//!     &items,
//! );
//! assert_eq!(
//!     commands,
//!     vec![Command::ReorderLayers {
//!         new_order: vec!["b".into(), "c".into(), "a".into()],
//!     }]
//! );
//! ```

mod error;
mod registry;
mod reorder;
mod session;
mod types;

pub use error::DndError;
pub use registry::{ContainerRegistry, DndItems, build_dnd_items};
pub use reorder::{array_move, compute_order};
pub use session::{DragEvent, DragSession, DragState};
pub use types::{ContainerId, DndId, SORTABLE_LIST_KEY};
