//! Minimal player body used by headless drivers.

use crate::geometry::{Hitbox, Position};

use super::PlayerHandle;

/// Position, hitbox and health of the player.
///
/// The full player (inventory, sprites, input) lives outside the core; this is
/// the slice of it the simulation needs to move and be attacked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerBody {
    pub position: Position,
    pub hitbox: Hitbox,
    health: i32,
    max_health: i32,
}

impl PlayerBody {
    pub fn new(position: Position, hitbox: Hitbox, max_health: i32) -> Self {
        let max_health = max_health.max(1);
        Self {
            position,
            hitbox,
            health: max_health,
            max_health,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }
}

impl PlayerHandle for PlayerBody {
    fn position(&self) -> Position {
        self.position
    }

    fn hitbox(&self) -> Hitbox {
        self.hitbox
    }

    fn damage(&mut self, amount: i32) {
        if amount <= 0 || self.is_dead() {
            return;
        }
        self.health = (self.health - amount).max(0);
    }

    fn is_dead(&self) -> bool {
        self.health == 0
    }
}
