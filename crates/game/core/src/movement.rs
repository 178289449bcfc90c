//! Collision-checked movement for the player.
//!
//! Enemies steer without consulting collision and rely on the separation
//! pass; the player always goes through these helpers so it can never end a
//! step inside a wall or a solid object.

use crate::geometry::{Hitbox, Position};
use crate::world::CollisionQuery;

/// Moves by `(dx, dy)` if the destination is free, otherwise tries each axis
/// alone so the mover slides along walls. Returns the new position, which is
/// `from` when every option collides.
pub fn try_move(
    query: &CollisionQuery<'_>,
    hitbox: &Hitbox,
    from: Position,
    dx: i32,
    dy: i32,
) -> Position {
    if dx == 0 && dy == 0 {
        return from;
    }
    let candidates = [from.offset(dx, dy), from.offset(dx, 0), from.offset(0, dy)];
    query
        .first_free(
            hitbox,
            candidates.into_iter().filter(|candidate| *candidate != from),
        )
        .unwrap_or(from)
}

/// Jumps up to `distance` units along `(dir_x, dir_y)`.
///
/// Candidate landing spots are probed from the farthest inwards in `step`
/// decrements; the first free one wins. Nothing in between is checked, so a
/// dash may cross a thin wall. Returns `from` when no spot is free.
pub fn dash(
    query: &CollisionQuery<'_>,
    hitbox: &Hitbox,
    from: Position,
    (dir_x, dir_y): (i32, i32),
    distance: i32,
    step: i32,
) -> Position {
    let (dir_x, dir_y) = (dir_x.signum(), dir_y.signum());
    if (dir_x == 0 && dir_y == 0) || distance <= 0 {
        return from;
    }
    let step = step.max(1);
    let candidates = (1..=distance / step)
        .rev()
        .map(|n| n * step)
        .map(|reach| from.offset(dir_x * reach, dir_y * reach));
    query.first_free(hitbox, candidates).unwrap_or(from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::world::{MapDimensions, ObjectLayer, PlacedObject, TileGrid};

    const TILE: i32 = 32;
    const BODY: Hitbox = Hitbox::new(0, 0, 16, 16);

    /// 8x8 open room with solid border and a solid column at x = 4.
    fn room() -> TileGrid {
        let mut grid = TileGrid::walled(MapDimensions::new(8, 8));
        for row in 0..8 {
            grid.set_blocked(4, row, true);
        }
        grid
    }

    #[test]
    fn free_move_takes_full_delta() {
        let grid = room();
        let objects = ObjectLayer::empty();
        let query = CollisionQuery::new(&grid, &objects, TILE);
        let to = try_move(&query, &BODY, Position::new(40, 40), 5, 7);
        assert_eq!(to, Position::new(45, 47));
    }

    #[test]
    fn blocked_diagonal_slides_along_wall() {
        let grid = room();
        let objects = ObjectLayer::empty();
        let query = CollisionQuery::new(&grid, &objects, TILE);
        // Right edge at 124; the full and x-only moves reach 132, inside column 4.
        let from = Position::new(108, 64);
        let to = try_move(&query, &BODY, from, 8, 4);
        assert_eq!(to, Position::new(108, 68));
    }

    #[test]
    fn fully_blocked_move_stays_put() {
        let grid = room();
        let objects =
            ObjectLayer::new(vec![PlacedObject::solid("crate", Rect::new(64, 60, 32, 40))]);
        let query = CollisionQuery::new(&grid, &objects, TILE);
        let from = Position::new(44, 64);
        assert_eq!(try_move(&query, &BODY, from, 8, 0), from);
    }

    #[test]
    fn dash_lands_on_farthest_free_spot() {
        let grid = room();
        let objects = ObjectLayer::empty();
        let query = CollisionQuery::new(&grid, &objects, TILE);
        let from = Position::new(60, 64);
        // Reaches of 64 and 56 put the right edge inside column 4 (x >= 128).
        let to = dash(&query, &BODY, from, (1, 0), 64, 8);
        assert_eq!(to, Position::new(108, 64));
        assert_eq!(dash(&query, &BODY, from, (0, 0), 64, 8), from);
    }
}
