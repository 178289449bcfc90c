//! Runtime configuration and its environment loader.
use std::env;
use std::time::Duration;

use game_core::{EnemyKind, GameConfig, SpawnerConfig};

use crate::error::{Result, RuntimeError};

/// Configuration for the driver loop and the session it owns.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    pub spawner: SpawnerConfig,
    pub player: PlayerConfig,
    /// Simulated time per step.
    pub timestep: Duration,
    /// Accumulated time beyond this is dropped so a stalled loop does not
    /// replay a long backlog step by step.
    pub max_backlog: Duration,
    /// How often the async driver wakes up to check the accumulator.
    pub poll_interval: Duration,
    /// Render every n-th step; 1 renders after every step.
    pub render_every: u64,
    /// Size of the recent-message log kept for frames.
    pub message_capacity: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_TICK_HZ: u32 = 60;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WAVE_DEADLINES_MS` - Comma-separated wave deadlines (default: 10000,20000,30000)
    /// - `WAVE_BATCH_SIZE` - Enemies per wave (default: 5)
    /// - `WAVE_SPAWN_MARGIN` - Spawn-free border in world units (default: 64)
    /// - `WAVE_SEED` - Spawn placement seed
    /// - `WAVE_KINDS` - Comma-separated enemy kinds for waves (default: dummy,dog,tambay)
    /// - `SIM_TICK_HZ` - Simulation steps per second (default: 60)
    /// - `SIM_POLL_MS` - Driver wake-up interval (default: 4)
    /// - `SIM_TILE_SIZE` - Tile edge in world units (default: 48)
    /// - `SIM_WORLD_COLUMNS` / `SIM_WORLD_ROWS` - World size in tiles (default: 40x30)
    /// - `SIM_RENDER_EVERY` - Steps between render passes (default: 1)
    /// - `SIM_MESSAGE_CAPACITY` - Recent messages kept (default: 16)
    ///
    /// Unset variables keep their defaults; set but unparsable ones are
    /// rejected.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(deadlines) = read_env_list::<u64>("WAVE_DEADLINES_MS")? {
            config.spawner.wave_deadlines_ms = deadlines;
        }
        if let Some(batch) = read_env::<u32>("WAVE_BATCH_SIZE")? {
            config.spawner.batch_size = batch;
        }
        if let Some(margin) = read_env::<i32>("WAVE_SPAWN_MARGIN")? {
            config.spawner.spawn_margin = margin;
        }
        if let Some(seed) = read_env::<u64>("WAVE_SEED")? {
            config.spawner.seed = seed;
        }
        if let Some(kinds) = read_env_list::<EnemyKind>("WAVE_KINDS")? {
            config.spawner.wave_kinds = kinds;
        }

        if let Some(hz) = read_env::<u32>("SIM_TICK_HZ")? {
            if hz == 0 {
                return Err(RuntimeError::ZeroTimestep);
            }
            config.timestep = Duration::from_secs(1) / hz;
        }
        if let Some(poll_ms) = read_env::<u64>("SIM_POLL_MS")? {
            config.poll_interval = Duration::from_millis(poll_ms.max(1));
        }
        if let Some(tile_size) = read_env::<i32>("SIM_TILE_SIZE")? {
            config.game.tile_size = tile_size;
        }
        if let Some(columns) = read_env::<u32>("SIM_WORLD_COLUMNS")? {
            config.game.world_columns = columns;
        }
        if let Some(rows) = read_env::<u32>("SIM_WORLD_ROWS")? {
            config.game.world_rows = rows;
        }
        if let Some(every) = read_env::<u64>("SIM_RENDER_EVERY")? {
            config.render_every = every.max(1);
        }
        if let Some(capacity) = read_env::<usize>("SIM_MESSAGE_CAPACITY")? {
            config.message_capacity = capacity.max(1);
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    #[must_use]
    pub fn with_spawner(mut self, spawner: SpawnerConfig) -> Self {
        self.spawner = spawner;
        self
    }

    #[must_use]
    pub fn with_player(mut self, player: PlayerConfig) -> Self {
        self.player = player;
        self
    }

    #[must_use]
    pub fn with_timestep(mut self, timestep: Duration) -> Self {
        self.timestep = timestep;
        self
    }

    #[must_use]
    pub fn with_render_every(mut self, render_every: u64) -> Self {
        self.render_every = render_every.max(1);
        self
    }

    /// Checks every nested config; called by the runtime builder.
    pub fn validate(&self) -> Result<()> {
        if self.timestep.is_zero() {
            return Err(RuntimeError::ZeroTimestep);
        }
        self.game.validate()?;
        self.spawner.validate(&self.game)?;
        Ok(())
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            spawner: SpawnerConfig::default(),
            player: PlayerConfig::default(),
            timestep: Duration::from_secs(1) / Self::DEFAULT_TICK_HZ,
            max_backlog: Duration::from_millis(250),
            poll_interval: Duration::from_millis(4),
            render_every: 1,
            message_capacity: 16,
        }
    }
}

/// Player body and abilities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerConfig {
    pub max_health: i32,
    /// World units per step.
    pub speed: i32,
    pub dash_distance: i32,
    pub dash_step: i32,
    pub dash_cooldown_ms: u64,
    pub attack_damage: i32,
    pub attack_cooldown_ms: u64,
    /// How far the attack box reaches beyond the player's hitbox.
    pub attack_reach: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: 100,
            speed: 3,
            dash_distance: 96,
            dash_step: 8,
            dash_cooldown_ms: 1500,
            attack_damage: 10,
            attack_cooldown_ms: 400,
            attack_reach: 24,
        }
    }
}

fn read_env<T>(key: &'static str) -> Result<Option<T>>
where
    T: std::str::FromStr,
{
    let Ok(value) = env::var(key) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| RuntimeError::InvalidEnv { key, value })
}

fn read_env_list<T>(key: &'static str) -> Result<Option<Vec<T>>>
where
    T: std::str::FromStr,
{
    let Ok(value) = env::var(key) else {
        return Ok(None);
    };
    parse_list(&value)
        .map(Some)
        .ok_or(RuntimeError::InvalidEnv { key, value })
}

fn parse_list<T: std::str::FromStr>(value: &str) -> Option<Vec<T>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_at_sixty_hertz() {
        let config = RuntimeConfig::default();
        assert_eq!(config.timestep, Duration::from_nanos(16_666_666));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn lists_parse_with_spaces() {
        assert_eq!(parse_list::<u64>("100, 200 ,300"), Some(vec![100, 200, 300]));
        assert_eq!(
            parse_list::<EnemyKind>("dog,Boss"),
            Some(vec![EnemyKind::Dog, EnemyKind::Boss])
        );
        assert_eq!(parse_list::<u64>("100,abc"), None);
    }

    #[test]
    fn invalid_nested_config_is_reported() {
        let mut config = RuntimeConfig::default();
        config.spawner.batch_size = 0;
        assert!(matches!(
            config.validate(),
            Err(RuntimeError::Config(game_core::ConfigError::ZeroBatch))
        ));
    }
}
