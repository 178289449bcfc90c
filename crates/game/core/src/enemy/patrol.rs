use crate::geometry::Position;

/// Cyclic list of waypoints with a cursor on the one being walked to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatrolRoute {
    waypoints: Vec<Position>,
    current: usize,
}

impl PatrolRoute {
    /// Distance at which a waypoint counts as reached.
    pub const ARRIVAL_RADIUS: f32 = 4.0;

    /// Returns `None` for an empty list; an enemy without waypoints has no
    /// route at all.
    pub fn new(waypoints: Vec<Position>) -> Option<Self> {
        if waypoints.is_empty() {
            return None;
        }
        Some(Self {
            waypoints,
            current: 0,
        })
    }

    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Position {
        self.waypoints[self.current]
    }

    /// Moves the cursor to the next waypoint, wrapping to the first.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.waypoints.len();
    }
}
