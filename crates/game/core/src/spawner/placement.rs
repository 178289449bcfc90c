//! Where spawned enemies appear.

use crate::config::{GameConfig, SpawnerConfig};
use crate::enemy::EnemyKind;
use crate::env::{RngOracle, compute_seed};
use crate::geometry::Position;

const AXIS_X: u32 = 0;
const AXIS_Y: u32 = 1;

/// Deterministic position for `slot` of `wave`.
///
/// The whole hitbox of `kind` lands inside the world bounds shrunk by the
/// configured margin. Worlds too small for that collapse onto the margin.
pub fn wave_slot(
    rng: &dyn RngOracle,
    world: &GameConfig,
    config: &SpawnerConfig,
    kind: EnemyKind,
    wave: u32,
    slot: u32,
) -> Position {
    let hitbox = kind.stats().hitbox;
    let margin = config.spawn_margin;
    let max_x = world.world_width() - margin - (hitbox.offset_x + hitbox.width);
    let max_y = world.world_height() - margin - (hitbox.offset_y + hitbox.height);

    let x = rng.range_i32(compute_seed(config.seed, wave, slot, AXIS_X), margin, max_x);
    let y = rng.range_i32(compute_seed(config.seed, wave, slot, AXIS_Y), margin, max_y);
    Position::new(x, y)
}

/// Position that puts the center of `kind`'s hitbox on the world center.
pub fn world_center(world: &GameConfig, kind: EnemyKind) -> Position {
    let hitbox = kind.stats().hitbox;
    let center = world.world_center();
    center.offset(
        -(hitbox.offset_x + hitbox.width / 2),
        -(hitbox.offset_y + hitbox.height / 2),
    )
}
