//! CLI error types and exit codes.

use layerdeck_core::{ConfigError, LayerDeckError, SceneError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, output, or other non-scene errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Scene failure - scene file missing, malformed or inconsistent
    pub const SCENE_FAILURE: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scene file not found
    #[error("Scene not found: {0}")]
    SceneNotFound(String),

    /// Scene file malformed or breaking a state invariant
    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    /// Scene could not be written
    #[error("Scene error: {0}")]
    Scene(String),

    /// A drag or split operation was rejected
    #[error("State error: {0}")]
    State(String),

    /// Logging setup error
    #[error("Logging error: {0}")]
    Logging(String),

    /// Output formatting error
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SceneError> for CliError {
    fn from(err: SceneError) -> Self {
        match err {
            SceneError::Io { ref source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                Self::SceneNotFound(err.to_string())
            }
            SceneError::Parse { .. } | SceneError::Invalid(_) => {
                Self::InvalidScene(err.to_string())
            }
            SceneError::Io { .. } | SceneError::UnsupportedFormat(_) | SceneError::Serialize { .. } => {
                Self::Scene(err.to_string())
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<LayerDeckError> for CliError {
    fn from(err: LayerDeckError) -> Self {
        match err {
            LayerDeckError::Scene(e) => e.into(),
            LayerDeckError::Config(e) => e.into(),
            LayerDeckError::Tracing(e) => Self::Logging(e.to_string()),
            LayerDeckError::Dnd(e) => Self::InvalidScene(e.to_string()),
            LayerDeckError::State(e) => Self::State(e.to_string()),
        }
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, state, output, IO)
    /// - 2: Scene failure (not found, malformed, inconsistent)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::SceneNotFound(_) | Self::InvalidScene(_) => exit_codes::SCENE_FAILURE,
            Self::Config(_)
            | Self::Scene(_)
            | Self::State(_)
            | Self::Logging(_)
            | Self::Output(_)
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
