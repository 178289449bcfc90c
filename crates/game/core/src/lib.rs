//! Decision-and-motion core of a real-time tile-world game.
//!
//! `game-core` owns the parts of the game with real rules: enemy AI driven by
//! behavior trees, the collision query that keeps the player out of walls,
//! and the wave spawner that escalates an encounter into a boss fight.
//! Rendering, input, audio and asset loading stay outside and are reached
//! through the traits in [`env`].
//!
//! Everything here is single-threaded and synchronous: the caller advances
//! the world one fixed step at a time.
pub mod ai;
pub mod config;
pub mod enemy;
pub mod env;
pub mod error;
pub mod geometry;
pub mod mobs;
pub mod movement;
pub mod spawner;
pub mod world;

pub use config::{GameConfig, SpawnerConfig};
pub use enemy::{Agent, Enemy, EnemyId, EnemyKind, EnemyStats};
pub use env::{
    Clock, ManualClock, MessageSink, ObjectSource, PlayerBody, PlayerHandle, SystemClock, TileMap,
};
pub use error::{ConfigError, ErrorSeverity, GameError};
pub use geometry::{Hitbox, Position, Rect, Vec2};
pub use mobs::{MobManager, MobPlacement};
pub use spawner::{SpawnerPhase, SpawnerSnapshot, WaveSpawner};
pub use world::{CollisionQuery, MapDimensions, MapId, ObjectLayer, PlacedObject, TileGrid};
