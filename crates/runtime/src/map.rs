//! Static content of the map a session plays on.
use game_core::{
    EnemyKind, GameConfig, MapId, MobPlacement, ObjectLayer, PlacedObject, Position, Rect,
    TileGrid,
};

/// Everything the session needs to know about one map: solidity, placed
/// objects, level-placed mobs and where the player enters.
#[derive(Clone, Debug)]
pub struct MapLayout {
    pub id: MapId,
    pub tiles: TileGrid,
    pub objects: ObjectLayer,
    pub mobs: Vec<MobPlacement>,
    pub player_start: Position,
}

impl MapLayout {
    /// Open map with no objects or mobs; the player starts in the middle.
    pub fn empty(id: MapId, game: &GameConfig) -> Self {
        Self {
            id,
            tiles: TileGrid::open(game.map_dimensions()),
            objects: ObjectLayer::empty(),
            mobs: Vec::new(),
            player_start: game.world_center(),
        }
    }

    /// Walled arena used by the demo binary.
    ///
    /// Four pillars frame the centre, a few props are scattered around and two
    /// level mobs guard opposite corners.
    pub fn arena(game: &GameConfig) -> Self {
        let dims = game.map_dimensions();
        let mut tiles = TileGrid::walled(dims);

        let columns = dims.columns as i32;
        let rows = dims.rows as i32;
        let (left, right) = (columns / 4, columns - 1 - columns / 4);
        let (top, bottom) = (rows / 3, rows - 1 - rows / 3);
        for (col, row) in [(left, top), (right, top), (left, bottom), (right, bottom)] {
            tiles.set_blocked(col, row, true);
        }

        let tile = game.tile_size;
        let at = |col: i32, row: i32| Position::new(col * tile, row * tile);

        let objects = ObjectLayer::new(vec![
            PlacedObject::solid("crate", Rect::new(3 * tile, (rows - 4) * tile, 40, 40)),
            PlacedObject::solid("barrel", Rect::new((columns - 4) * tile, 3 * tile, 32, 32)),
            PlacedObject::decoration("banner", Rect::new(columns / 2 * tile, tile, 48, 96)),
        ]);

        let mobs = vec![
            MobPlacement::new(EnemyKind::Dog, at(3, 3)).with_patrol(vec![
                at(3, 3),
                at(left - 1, 3),
                at(left - 1, top - 1),
            ]),
            MobPlacement::new(EnemyKind::Tambay, at(columns - 5, rows - 5)),
        ];

        let center = game.world_center();
        let player_start = center.offset(-tile / 2, -tile / 2);

        tracing::debug!(
            "Built arena {}x{} with {} objects and {} mobs",
            columns,
            rows,
            objects.len(),
            mobs.len()
        );

        Self {
            id: MapId(1),
            tiles,
            objects,
            mobs,
            player_start,
        }
    }
}
