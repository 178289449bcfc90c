//! Status returned by behavior nodes.

/// The result of evaluating a behavior node for one simulation tick.
///
/// # Real-time Semantics
///
/// The tree is ticked once per fixed timestep:
/// - Conditions evaluate immediately (e.g., "Can the enemy see the player?")
/// - Actions either finish within the tick or report [`Status::Running`] and
///   are ticked again next frame. Nodes never remember how far along they are;
///   progress is re-derived from the entity (e.g., distance to a waypoint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action finished this tick.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be performed (e.g., entity missing).
    Failure,

    /// The behavior is still in progress and must be ticked again next frame.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Maps a boolean predicate result onto `Success`/`Failure`.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

impl From<bool> for Status {
    fn from(value: bool) -> Self {
        Status::from_bool(value)
    }
}
