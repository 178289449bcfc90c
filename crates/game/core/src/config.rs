use crate::enemy::EnemyKind;
use crate::error::ConfigError;
use crate::geometry::Position;
use crate::world::MapDimensions;

/// World geometry shared by collision queries and the spawner.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Edge length of one tile in world units.
    pub tile_size: i32,
    pub world_columns: u32,
    pub world_rows: u32,
}

impl GameConfig {
    pub const DEFAULT_TILE_SIZE: i32 = 48;
    pub const DEFAULT_WORLD_COLUMNS: u32 = 40;
    pub const DEFAULT_WORLD_ROWS: u32 = 30;

    pub fn new() -> Self {
        Self {
            tile_size: Self::DEFAULT_TILE_SIZE,
            world_columns: Self::DEFAULT_WORLD_COLUMNS,
            world_rows: Self::DEFAULT_WORLD_ROWS,
        }
    }

    pub fn with_world(tile_size: i32, world_columns: u32, world_rows: u32) -> Self {
        Self {
            tile_size,
            world_columns,
            world_rows,
        }
    }

    pub fn map_dimensions(&self) -> MapDimensions {
        MapDimensions::new(self.world_columns, self.world_rows)
    }

    pub fn world_width(&self) -> i32 {
        self.tile_size.saturating_mul(self.world_columns as i32)
    }

    pub fn world_height(&self) -> i32 {
        self.tile_size.saturating_mul(self.world_rows as i32)
    }

    pub fn world_center(&self) -> Position {
        Position::new(self.world_width() / 2, self.world_height() / 2)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size <= 0 {
            return Err(ConfigError::ZeroTileSize(self.tile_size));
        }
        if self.world_columns == 0 || self.world_rows == 0 {
            return Err(ConfigError::EmptyWorld {
                columns: self.world_columns,
                rows: self.world_rows,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Tunables of the wave encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnerConfig {
    /// End of each wave in milliseconds after waves started. Wave `n` gives
    /// way to wave `n + 1` (or the boss, after the last) at entry `n - 1`.
    pub wave_deadlines_ms: Vec<u64>,
    /// Enemies spawned at the start of every wave.
    pub batch_size: u32,
    /// Distance from the world edge kept free of spawns.
    pub spawn_margin: i32,
    /// Seed for spawn placement; equal seeds replay equal encounters.
    pub seed: u64,
    /// Kinds cycled through when filling a batch.
    pub wave_kinds: Vec<EnemyKind>,
}

impl SpawnerConfig {
    pub const DEFAULT_WAVE_DEADLINES_MS: [u64; 3] = [10_000, 20_000, 30_000];
    pub const DEFAULT_BATCH_SIZE: u32 = 5;
    pub const DEFAULT_SPAWN_MARGIN: i32 = 64;
    pub const DEFAULT_SEED: u64 = 0x5eed_c0de;

    pub fn new() -> Self {
        Self {
            wave_deadlines_ms: Self::DEFAULT_WAVE_DEADLINES_MS.to_vec(),
            batch_size: Self::DEFAULT_BATCH_SIZE,
            spawn_margin: Self::DEFAULT_SPAWN_MARGIN,
            seed: Self::DEFAULT_SEED,
            wave_kinds: EnemyKind::BASIC.to_vec(),
        }
    }

    #[must_use]
    pub fn with_wave_deadlines(mut self, deadlines_ms: Vec<u64>) -> Self {
        self.wave_deadlines_ms = deadlines_ms;
        self
    }

    #[must_use]
    pub fn with_batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = batch_size;
        self
    }

    #[must_use]
    pub fn with_spawn_margin(mut self, spawn_margin: i32) -> Self {
        self.spawn_margin = spawn_margin;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_wave_kinds(mut self, wave_kinds: Vec<EnemyKind>) -> Self {
        self.wave_kinds = wave_kinds;
        self
    }

    /// Number of regular waves before the boss.
    pub fn wave_count(&self) -> u32 {
        u32::try_from(self.wave_deadlines_ms.len()).unwrap_or(u32::MAX)
    }

    /// Deadline of wave `wave` (1-based).
    pub fn deadline_of(&self, wave: u32) -> Option<u64> {
        let index = usize::try_from(wave.checked_sub(1)?).ok()?;
        self.wave_deadlines_ms.get(index).copied()
    }

    /// Kind spawned in `slot` of `wave`. Each wave starts one step further
    /// along the kind list so consecutive waves open differently.
    pub fn kind_for(&self, wave: u32, slot: u32) -> EnemyKind {
        if self.wave_kinds.is_empty() {
            return EnemyKind::default();
        }
        let step = wave.saturating_sub(1) as usize + slot as usize;
        self.wave_kinds[step % self.wave_kinds.len()]
    }

    pub fn validate(&self, world: &GameConfig) -> Result<(), ConfigError> {
        if self.wave_deadlines_ms.is_empty() {
            return Err(ConfigError::EmptyWaveTable);
        }
        let mut previous_ms = 0;
        for (index, &deadline_ms) in self.wave_deadlines_ms.iter().enumerate() {
            if deadline_ms <= previous_ms {
                return Err(ConfigError::NonIncreasingDeadline {
                    wave: index as u32 + 1,
                    deadline_ms,
                    previous_ms,
                });
            }
            previous_ms = deadline_ms;
        }
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroBatch);
        }
        if self.wave_kinds.is_empty() {
            return Err(ConfigError::NoWaveKinds);
        }

        let (width, height) = (world.world_width(), world.world_height());
        if self.spawn_margin < 0
            || self.spawn_margin.saturating_mul(2) >= width
            || self.spawn_margin.saturating_mul(2) >= height
        {
            return Err(ConfigError::MarginTooLarge {
                margin: self.spawn_margin,
                width,
                height,
            });
        }
        Ok(())
    }
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self::new()
    }
}
