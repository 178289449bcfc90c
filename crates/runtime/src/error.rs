//! Error types surfaced by the runtime.
//!
//! Nothing inside a simulation step can fail; errors only come out of
//! building a [`crate::Runtime`] or reading its configuration.
use thiserror::Error;

use game_core::{ConfigError, ErrorSeverity, GameError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid game configuration")]
    Config(#[from] ConfigError),

    #[error("simulation timestep must be positive")]
    ZeroTimestep,

    #[error("environment variable {key} has unparsable value {value:?}")]
    InvalidEnv { key: &'static str, value: String },

    #[error("runtime requires a player controller before building")]
    MissingController,

    #[error("failed to encode frame snapshot")]
    Snapshot(#[from] serde_json::Error),

    #[error("failed to write frame")]
    Io(#[from] std::io::Error),
}

impl RuntimeError {
    /// Severity of the underlying failure, reusing the game-core scale.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Config(inner) => inner.severity(),
            RuntimeError::InvalidEnv { .. } => ErrorSeverity::Validation,
            RuntimeError::ZeroTimestep | RuntimeError::MissingController => ErrorSeverity::Fatal,
            RuntimeError::Snapshot(_) => ErrorSeverity::Internal,
            RuntimeError::Io(_) => ErrorSeverity::Recoverable,
        }
    }
}
