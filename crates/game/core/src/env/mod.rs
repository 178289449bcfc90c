//! Services the core consumes from the surrounding game.
//!
//! Rendering, input, audio, asset loading and persistence live outside this
//! crate. The simulation reaches them only through the small traits below so
//! that tests and headless drivers can supply their own implementations:
//!
//! - [`TileMap`] / [`ObjectSource`]: static map geometry for collision queries
//! - [`PlayerHandle`]: the one entity enemies target and damage
//! - [`MessageSink`]: fire-and-forget announcements (wave started, boss)
//! - [`Clock`]: monotonic milliseconds driving wave timing and attack cycles
mod clock;
mod player;
mod rng;

pub use clock::{Clock, ManualClock, SystemClock};
pub use player::PlayerBody;
pub use rng::{PcgRng, RngOracle, compute_seed};

use crate::geometry::{Hitbox, Position, Rect};
use crate::world::{MapDimensions, PlacedObject};

/// Read access to the tile layer of the active map.
pub trait TileMap {
    /// Size of the grid in tiles.
    fn dimensions(&self) -> MapDimensions;

    /// Returns `true` if the tile at `(col, row)` blocks movement.
    ///
    /// Only called for coordinates inside [`TileMap::dimensions`].
    fn is_tile_blocked(&self, col: i32, row: i32) -> bool;
}

/// Placed objects (furniture, props, doors) of the active map.
pub trait ObjectSource {
    /// Every placed object; the collision query skips those without the
    /// collision flag.
    fn placed(&self) -> &[PlacedObject];

    /// Iterates over the bounds of collision-flagged objects only.
    fn colliders(&self) -> Box<dyn Iterator<Item = Rect> + '_> {
        Box::new(
            self.placed()
                .iter()
                .filter(|object| object.collision)
                .map(|object| object.bounds),
        )
    }
}

/// The controllable player as seen by enemies.
pub trait PlayerHandle {
    fn position(&self) -> Position;

    fn hitbox(&self) -> Hitbox;

    /// Applies `amount` damage to the player's health pool.
    fn damage(&mut self, amount: i32);

    fn is_dead(&self) -> bool;
}

/// Notification channel for on-screen announcements.
pub trait MessageSink {
    fn show_message(&mut self, text: &str);
}

/// Collects messages in memory; used by headless drivers and tests.
impl MessageSink for Vec<String> {
    fn show_message(&mut self, text: &str) {
        self.push(text.to_owned());
    }
}
