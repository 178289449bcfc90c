//! Enemies placed on maps by level data, outside the wave encounter.
//!
//! Loading placement data is the caller's job; the manager receives already
//! structured [`MobPlacement`]s per map. A map nobody populated simply has no
//! mobs, so a missing or unreadable map file degrades to an empty map.

use std::collections::HashMap;

use crate::enemy::{self, Enemy, EnemyIdAllocator, EnemyKind};
use crate::env::PlayerHandle;
use crate::geometry::{Position, Rect};
use crate::world::MapId;

/// One enemy as described by map data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MobPlacement {
    pub kind: EnemyKind,
    pub position: Position,
    /// Patrol waypoints; empty means the mob stands guard.
    #[cfg_attr(feature = "serde", serde(default))]
    pub patrol: Vec<Position>,
}

impl MobPlacement {
    pub fn new(kind: EnemyKind, position: Position) -> Self {
        Self {
            kind,
            position,
            patrol: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_patrol(mut self, waypoints: Vec<Position>) -> Self {
        self.patrol = waypoints;
        self
    }
}

/// Map-indexed enemy rosters.
#[derive(Debug, Default)]
pub struct MobManager {
    maps: HashMap<MapId, Vec<Enemy>>,
    ids: EnemyIdAllocator,
}

impl MobManager {
    pub fn new() -> Self {
        Self {
            maps: HashMap::new(),
            ids: EnemyIdAllocator::new(),
        }
    }

    /// Replaces the roster of `map` with freshly built enemies.
    pub fn populate(
        &mut self,
        map: MapId,
        placements: impl IntoIterator<Item = MobPlacement>,
    ) -> usize {
        let roster: Vec<Enemy> = placements
            .into_iter()
            .map(|placement| {
                Enemy::new(self.ids.allocate(), placement.kind, placement.position)
                    .with_patrol(placement.patrol)
            })
            .collect();
        let count = roster.len();
        tracing::debug!("Populated {} with {} mobs", map, count);
        self.maps.insert(map, roster);
        count
    }

    pub fn mobs(&self, map: MapId) -> &[Enemy] {
        self.maps.get(&map).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn mobs_mut(&mut self, map: MapId) -> &mut [Enemy] {
        self.maps
            .get_mut(&map)
            .map(Vec::as_mut_slice)
            .unwrap_or_default()
    }

    /// Live mobs across every map.
    pub fn total(&self) -> usize {
        self.maps.values().map(Vec::len).sum()
    }

    pub fn clear_map(&mut self, map: MapId) {
        self.maps.remove(&map);
    }

    /// Sweeps, ticks and separates the mobs of the active map. Other maps
    /// are frozen.
    pub fn update(&mut self, active: MapId, now_ms: u64, player: &mut dyn PlayerHandle) {
        let Some(roster) = self.maps.get_mut(&active) else {
            return;
        };
        enemy::sweep_dead(roster);
        for mob in roster.iter_mut() {
            mob.update(now_ms, player);
        }
        enemy::separate(roster);
    }

    /// See [`enemy::strike_area`]; only mobs of `map` are considered.
    pub fn strike_area(&mut self, map: MapId, area: Rect, amount: i32) -> usize {
        enemy::strike_area(self.mobs_mut(map), area, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PlayerBody;
    use crate::geometry::Hitbox;

    const TOWN: MapId = MapId(1);
    const CELLAR: MapId = MapId(2);

    fn far_player() -> PlayerBody {
        PlayerBody::new(Position::new(5_000, 5_000), Hitbox::new(0, 0, 16, 16), 50)
    }

    #[test]
    fn unknown_map_has_no_mobs() {
        let manager = MobManager::new();
        assert!(manager.mobs(MapId(9)).is_empty());
    }

    #[test]
    fn only_the_active_map_moves() {
        let mut manager = MobManager::new();
        let route = vec![Position::new(200, 0), Position::new(0, 0)];
        manager.populate(
            TOWN,
            [MobPlacement::new(EnemyKind::Dog, Position::ORIGIN).with_patrol(route.clone())],
        );
        manager.populate(
            CELLAR,
            [MobPlacement::new(EnemyKind::Dog, Position::ORIGIN).with_patrol(route)],
        );

        let mut player = far_player();
        manager.update(TOWN, 0, &mut player);

        assert_eq!(manager.mobs(TOWN)[0].position(), Position::new(3, 0));
        assert_eq!(manager.mobs(CELLAR)[0].position(), Position::ORIGIN);
        assert_eq!(manager.total(), 2);
    }

    #[test]
    fn killed_mobs_are_swept_on_next_update() {
        let mut manager = MobManager::new();
        manager.populate(
            TOWN,
            [
                MobPlacement::new(EnemyKind::Dummy, Position::new(100, 100)),
                MobPlacement::new(EnemyKind::Dummy, Position::new(400, 100)),
            ],
        );
        let hit = manager.strike_area(TOWN, Rect::new(110, 110, 8, 8), 100);
        assert_eq!(hit, 1);

        let mut player = far_player();
        manager.update(TOWN, 0, &mut player);
        assert_eq!(manager.mobs(TOWN).len(), 1);
    }
}
