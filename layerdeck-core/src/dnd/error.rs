//! Error types for the drag-and-drop core

use crate::models::LayerId;

/// Errors raised while deriving drag-and-drop containers.
///
/// Unresolvable drag ids and redundant operations are not errors; they are
/// silent no-ops. What remains here are broken invariants of the shared
/// state that must reach a developer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DndError {
    /// The layer order references a layer that does not exist.
    #[error("layer order references unknown layer: {0}")]
    BrokenReference(LayerId),
}
