//! Collision query over the tile grid and placed objects.

use crate::env::{ObjectSource, TileMap};
use crate::geometry::{Hitbox, Position, Rect};

/// Answers "would this hitbox at this position overlap anything solid?".
///
/// A move is legal only if both checks pass:
/// 1. every tile touched by the candidate hitbox is walkable (tiles outside
///    the grid count as solid), and
/// 2. the candidate hitbox does not intersect a collision-flagged object.
///
/// The query never mutates anything, so callers may probe as many candidate
/// destinations as they like before committing one.
#[derive(Clone, Copy)]
pub struct CollisionQuery<'a> {
    tiles: &'a dyn TileMap,
    objects: &'a dyn ObjectSource,
    tile_size: i32,
}

impl<'a> CollisionQuery<'a> {
    /// `tile_size` must be positive; it is validated by [`crate::GameConfig`].
    pub fn new(tiles: &'a dyn TileMap, objects: &'a dyn ObjectSource, tile_size: i32) -> Self {
        Self {
            tiles,
            objects,
            tile_size: tile_size.max(1),
        }
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// Returns `true` if `hitbox`, with its owner at `(x, y)`, would collide.
    pub fn will_collide(&self, hitbox: &Hitbox, x: i32, y: i32) -> bool {
        let area = hitbox.at(x, y);
        self.touches_blocked_tile(&area) || self.touches_solid_object(&area)
    }

    /// Returns the first candidate position that does not collide.
    pub fn first_free(
        &self,
        hitbox: &Hitbox,
        candidates: impl IntoIterator<Item = Position>,
    ) -> Option<Position> {
        candidates
            .into_iter()
            .find(|candidate| !self.will_collide(hitbox, candidate.x, candidate.y))
    }

    /// Inclusive corner test: the right/bottom edges themselves are sampled,
    /// so a box whose edge lies on a tile boundary also touches the next tile.
    fn touches_blocked_tile(&self, area: &Rect) -> bool {
        let left_col = area.x.div_euclid(self.tile_size);
        let right_col = area.right().div_euclid(self.tile_size);
        let top_row = area.y.div_euclid(self.tile_size);
        let bottom_row = area.bottom().div_euclid(self.tile_size);

        let dimensions = self.tiles.dimensions();
        (top_row..=bottom_row).any(|row| {
            (left_col..=right_col).any(|col| {
                !dimensions.contains(col, row) || self.tiles.is_tile_blocked(col, row)
            })
        })
    }

    fn touches_solid_object(&self, area: &Rect) -> bool {
        self.objects
            .colliders()
            .any(|bounds| bounds.intersects(area))
    }
}

impl std::fmt::Debug for CollisionQuery<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollisionQuery")
            .field("dimensions", &self.tiles.dimensions())
            .field("objects", &self.objects.placed().len())
            .field("tile_size", &self.tile_size)
            .finish()
    }
}
