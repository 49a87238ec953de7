//! Crate-level error type
//!
//! Each module has its own error enum; [`LayerDeckError`] wraps them for
//! callers that drive several modules at once (the controller, the CLI).

use thiserror::Error;

use crate::config::ConfigError;
use crate::dnd::DndError;
use crate::scene::SceneError;
use crate::state::StateError;
use crate::tracing::TracingError;

/// Any error produced by `layerdeck-core`.
#[derive(Debug, Error)]
pub enum LayerDeckError {
    /// Drag-and-drop container derivation failed
    #[error(transparent)]
    Dnd(#[from] DndError),

    /// A state mutation was rejected
    #[error(transparent)]
    State(#[from] StateError),

    /// Scene file error
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Settings error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logging setup error
    #[error(transparent)]
    Tracing(#[from] TracingError),
}

/// Result type for `layerdeck-core` operations
pub type LayerDeckResult<T> = Result<T, LayerDeckError>;
