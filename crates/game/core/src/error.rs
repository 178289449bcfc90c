//! Common error infrastructure for game-core.
//!
//! Nothing that happens inside a simulation step is an error: missing patrol
//! routes resolve to `Failure`, damaging a dead enemy or starting waves twice
//! are silent no-ops. Errors only exist at construction time, when a config
//! is validated before the encounter is built.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each validation site has its own error enum
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: The caller may fall back to defaults and continue
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors, the encounter cannot be built
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - a default can stand in for the rejected value.
    ///
    /// Examples: zero spawn margin on a tiny world
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: empty wave table, deadlines out of order
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - the simulation cannot be built at all.
    ///
    /// Examples: zero tile size
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Rejected [`crate::GameConfig`] or [`crate::SpawnerConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("tile size must be positive, got {0}")]
    ZeroTileSize(i32),

    #[error("world must be at least one tile in each direction ({columns}x{rows})")]
    EmptyWorld { columns: u32, rows: u32 },

    #[error("wave table is empty")]
    EmptyWaveTable,

    #[error("wave {wave} ends at {deadline_ms}ms, not after the previous wave ({previous_ms}ms)")]
    NonIncreasingDeadline {
        wave: u32,
        deadline_ms: u64,
        previous_ms: u64,
    },

    #[error("batch size must be at least one enemy")]
    ZeroBatch,

    #[error("no enemy kinds configured for waves")]
    NoWaveKinds,

    #[error("spawn margin {margin} leaves no room inside a {width}x{height} world")]
    MarginTooLarge { margin: i32, width: i32, height: i32 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ZeroTileSize(_) | Self::EmptyWorld { .. } => ErrorSeverity::Fatal,
            Self::MarginTooLarge { .. } => ErrorSeverity::Recoverable,
            Self::EmptyWaveTable
            | Self::NonIncreasingDeadline { .. }
            | Self::ZeroBatch
            | Self::NoWaveKinds => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroTileSize(_) => "CONFIG_ZERO_TILE_SIZE",
            Self::EmptyWorld { .. } => "CONFIG_EMPTY_WORLD",
            Self::EmptyWaveTable => "CONFIG_EMPTY_WAVE_TABLE",
            Self::NonIncreasingDeadline { .. } => "CONFIG_NON_INCREASING_DEADLINE",
            Self::ZeroBatch => "CONFIG_ZERO_BATCH",
            Self::NoWaveKinds => "CONFIG_NO_WAVE_KINDS",
            Self::MarginTooLarge { .. } => "CONFIG_MARGIN_TOO_LARGE",
        }
    }
}
