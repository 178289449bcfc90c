use game_core::movement::try_move;
use game_core::{
    CollisionQuery, Hitbox, MapDimensions, ObjectLayer, PlacedObject, Position, Rect, TileGrid,
};

const TILE: i32 = 32;

/// Open 6x6 field with a single solid tile at (2, 2).
fn field() -> TileGrid {
    let mut grid = TileGrid::open(MapDimensions::new(6, 6));
    grid.set_blocked(2, 2, true);
    grid
}

#[test]
fn straddling_a_blocked_tile_collides() {
    let grid = field();
    let objects = ObjectLayer::empty();
    let query = CollisionQuery::new(&grid, &objects, TILE);
    let hitbox = Hitbox::new(2, 2, 12, 12);

    // Box spans 58..70 horizontally: columns 1 and 2 on row 2.
    assert!(query.will_collide(&hitbox, 56, 70));
    // Entirely inside tile (1, 1).
    assert!(!query.will_collide(&hitbox, 36, 36));
}

#[test]
fn objects_only_block_when_flagged() {
    let grid = field();
    let mut objects = ObjectLayer::new(vec![PlacedObject::decoration(
        "banner",
        Rect::new(130, 130, 20, 20),
    )]);
    let hitbox = Hitbox::new(0, 0, 10, 10);

    {
        let query = CollisionQuery::new(&grid, &objects, TILE);
        assert!(!query.will_collide(&hitbox, 135, 135));
    }

    objects.push(PlacedObject::solid("barrel", Rect::new(130, 130, 20, 20)));
    let query = CollisionQuery::new(&grid, &objects, TILE);
    assert!(query.will_collide(&hitbox, 135, 135));

    objects.remove_named("barrel");
    let query = CollisionQuery::new(&grid, &objects, TILE);
    assert!(!query.will_collide(&hitbox, 135, 135));
}

#[test]
fn player_slides_along_blocked_tile() {
    let grid = field();
    let objects = ObjectLayer::empty();
    let query = CollisionQuery::new(&grid, &objects, TILE);
    let hitbox = Hitbox::new(0, 0, 16, 16);

    // Directly left of tile (2, 2); moving right-down hits it, moving down
    // alone stays in column 1.
    let from = Position::new(40, 70);
    let to = try_move(&query, &hitbox, from, 12, 6);
    assert_eq!(to, Position::new(40, 76));
}
