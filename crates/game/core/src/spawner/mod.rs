//! Timed wave encounter ending in a boss fight.
//!
//! ```text
//!   start_waves        deadline 1           deadline N-1         deadline N
//! Idle ───────► Wave(1) ───────► Wave(2) ··· ─────────► Wave(N) ─────────► BossPhase
//! ```
//!
//! Deadlines are read from [`SpawnerConfig::wave_deadlines_ms`] and measured
//! from the moment waves started. Each entry into a wave spawns a batch of
//! regular enemies; entering the boss phase spawns exactly one boss at the
//! world center.
//!
//! # Per-tick order
//!
//! 1. wave transition check (may spawn a batch or the boss)
//! 2. sweep dead regular enemies
//! 3. tick every live regular enemy
//! 4. separation pass over regular enemies
//! 5. tick the boss (a boss spawned in step 1 is ticked here too)
mod phase;
mod placement;

pub use phase::{SpawnerPhase, SpawnerSnapshot};

use crate::config::{GameConfig, SpawnerConfig};
use crate::enemy::{self, Enemy, EnemyIdAllocator, EnemyKind};
use crate::env::{Clock, MessageSink, PcgRng, PlayerHandle};
use crate::error::ConfigError;
use crate::geometry::Rect;

pub struct WaveSpawner {
    world: GameConfig,
    config: SpawnerConfig,
    rng: PcgRng,
    ids: EnemyIdAllocator,
    enemies: Vec<Enemy>,
    boss: Option<Enemy>,
    wave: u32,
    waves_started: bool,
    boss_spawned: bool,
    boss_defeated: bool,
    started_at_ms: u64,
    wave_started_at_ms: u64,
}

impl WaveSpawner {
    /// Validates both configs and builds an idle spawner.
    pub fn new(world: GameConfig, config: SpawnerConfig) -> Result<Self, ConfigError> {
        world.validate()?;
        config.validate(&world)?;
        Ok(Self {
            world,
            config,
            rng: PcgRng,
            ids: EnemyIdAllocator::new(),
            enemies: Vec::new(),
            boss: None,
            wave: 0,
            waves_started: false,
            boss_spawned: false,
            boss_defeated: false,
            started_at_ms: 0,
            wave_started_at_ms: 0,
        })
    }

    pub fn config(&self) -> &SpawnerConfig {
        &self.config
    }

    pub fn world(&self) -> &GameConfig {
        &self.world
    }

    pub fn phase(&self) -> SpawnerPhase {
        if !self.waves_started {
            SpawnerPhase::Idle
        } else if self.boss_spawned {
            SpawnerPhase::BossPhase
        } else {
            SpawnerPhase::Wave(self.wave)
        }
    }

    /// Current wave number; 0 before waves start.
    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn waves_started(&self) -> bool {
        self.waves_started
    }

    /// Set once when the boss appears; only [`WaveSpawner::reset`] clears it.
    pub fn boss_spawned(&self) -> bool {
        self.boss_spawned
    }

    pub fn boss_defeated(&self) -> bool {
        self.boss_defeated
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    pub fn boss(&self) -> Option<&Enemy> {
        self.boss.as_ref()
    }

    pub fn boss_mut(&mut self) -> Option<&mut Enemy> {
        self.boss.as_mut()
    }

    /// Timestamp at which the current wave (or boss phase) began.
    pub fn wave_started_at_ms(&self) -> u64 {
        self.wave_started_at_ms
    }

    pub fn snapshot(&self, now_ms: u64) -> SpawnerSnapshot {
        let next_transition_in_ms = if self.waves_started && !self.boss_spawned {
            self.config
                .deadline_of(self.wave)
                .map(|deadline| deadline.saturating_sub(now_ms.saturating_sub(self.started_at_ms)))
        } else {
            None
        };
        SpawnerSnapshot {
            phase: self.phase(),
            enemies_alive: self.enemies.iter().filter(|enemy| !enemy.is_dead()).count(),
            boss_health: self
                .boss
                .as_ref()
                .filter(|boss| !boss.is_dead())
                .map(|boss| (boss.health(), boss.agent().max_health())),
            boss_spawned: self.boss_spawned,
            boss_defeated: self.boss_defeated,
            next_transition_in_ms,
        }
    }

    /// Idle → Wave(1). Later calls are silent no-ops.
    pub fn start_waves(&mut self, clock: &dyn Clock, messages: &mut dyn MessageSink) {
        if self.waves_started {
            return;
        }
        let now = clock.now_ms();
        self.waves_started = true;
        self.started_at_ms = now;
        self.begin_wave(1, now, messages);
    }

    /// Advances the encounter by one simulation step.
    pub fn update(
        &mut self,
        clock: &dyn Clock,
        player: &mut dyn PlayerHandle,
        messages: &mut dyn MessageSink,
    ) {
        if !self.waves_started {
            return;
        }
        let now = clock.now_ms();

        self.check_transition(now, messages);

        let swept = enemy::sweep_dead(&mut self.enemies);
        if swept > 0 {
            tracing::debug!("Swept {} dead enemies, {} remain", swept, self.enemies.len());
        }
        for enemy in &mut self.enemies {
            enemy.update(now, player);
        }
        enemy::separate(&mut self.enemies);

        self.update_boss(now, player, messages);
    }

    /// Damages every live enemy (boss included) whose hitbox intersects
    /// `area`. Returns how many were hit.
    pub fn strike_area(&mut self, area: Rect, amount: i32) -> usize {
        enemy::strike_area(self.enemies.iter_mut().chain(self.boss.as_mut()), area, amount)
    }

    /// Back to `Idle` with an empty roster and cleared flags.
    pub fn reset(&mut self) {
        self.enemies.clear();
        self.boss = None;
        self.ids = EnemyIdAllocator::new();
        self.wave = 0;
        self.waves_started = false;
        self.boss_spawned = false;
        self.boss_defeated = false;
        self.started_at_ms = 0;
        self.wave_started_at_ms = 0;
        tracing::debug!("Wave spawner reset");
    }

    fn check_transition(&mut self, now: u64, messages: &mut dyn MessageSink) {
        if self.boss_spawned {
            return;
        }
        let Some(deadline) = self.config.deadline_of(self.wave) else {
            return;
        };
        if now.saturating_sub(self.started_at_ms) < deadline {
            return;
        }

        if self.wave < self.config.wave_count() {
            self.begin_wave(self.wave + 1, now, messages);
        } else {
            self.spawn_boss(now, messages);
        }
    }

    fn begin_wave(&mut self, wave: u32, now: u64, messages: &mut dyn MessageSink) {
        self.wave = wave;
        self.wave_started_at_ms = now;

        for slot in 0..self.config.batch_size {
            let kind = self.config.kind_for(wave, slot);
            let position =
                placement::wave_slot(&self.rng, &self.world, &self.config, kind, wave, slot);
            self.enemies.push(Enemy::new(self.ids.allocate(), kind, position));
        }

        tracing::info!(
            "Wave {} started at {}ms with {} enemies",
            wave,
            now,
            self.config.batch_size
        );
        messages.show_message(&format!("Wave {wave} started"));
    }

    fn spawn_boss(&mut self, now: u64, messages: &mut dyn MessageSink) {
        let position = placement::world_center(&self.world, EnemyKind::Boss);
        self.boss = Some(Enemy::new(self.ids.allocate(), EnemyKind::Boss, position));
        self.boss_spawned = true;
        self.wave_started_at_ms = now;

        tracing::info!("Boss spawned at {} ({}ms)", position, now);
        messages.show_message("The boss has appeared!");
    }

    fn update_boss(
        &mut self,
        now: u64,
        player: &mut dyn PlayerHandle,
        messages: &mut dyn MessageSink,
    ) {
        let Some(boss) = self.boss.as_mut() else {
            return;
        };
        if !boss.is_dead() {
            boss.update(now, player);
            return;
        }

        self.boss = None;
        self.boss_defeated = true;
        tracing::info!("Boss defeated at {}ms", now);
        messages.show_message("The boss has been defeated!");
    }
}

impl std::fmt::Debug for WaveSpawner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaveSpawner")
            .field("phase", &self.phase())
            .field("enemies", &self.enemies.len())
            .field("boss", &self.boss.as_ref().map(Enemy::id))
            .field("boss_defeated", &self.boss_defeated)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ManualClock, PlayerBody};
    use crate::geometry::{Hitbox, Position};

    fn spawner() -> WaveSpawner {
        WaveSpawner::new(GameConfig::default(), SpawnerConfig::default()).unwrap()
    }

    /// A player parked in a corner, far from every spawn.
    fn bystander() -> PlayerBody {
        PlayerBody::new(Position::new(0, 0), Hitbox::new(0, 0, 16, 16), 1_000)
    }

    #[test]
    fn start_is_idempotent() {
        let mut spawner = spawner();
        let clock = ManualClock::starting_at(0);
        let mut messages: Vec<String> = Vec::new();

        spawner.start_waves(&clock, &mut messages);
        spawner.start_waves(&clock, &mut messages);

        assert_eq!(spawner.phase(), SpawnerPhase::Wave(1));
        assert_eq!(spawner.enemies().len(), 5);
        assert_eq!(messages, vec!["Wave 1 started".to_owned()]);
    }

    #[test]
    fn update_before_start_does_nothing() {
        let mut spawner = spawner();
        let clock = ManualClock::starting_at(50_000);
        let mut player = bystander();
        let mut messages: Vec<String> = Vec::new();

        spawner.update(&clock, &mut player, &mut messages);
        assert_eq!(spawner.phase(), SpawnerPhase::Idle);
        assert!(messages.is_empty());
    }

    #[test]
    fn dead_enemies_are_swept_on_update() {
        let mut spawner = spawner();
        let clock = ManualClock::starting_at(0);
        let mut player = bystander();
        let mut messages: Vec<String> = Vec::new();
        spawner.start_waves(&clock, &mut messages);

        spawner.enemies_mut()[0].damage(1_000);
        spawner.update(&clock, &mut player, &mut messages);
        assert_eq!(spawner.enemies().len(), 4);
        assert!(spawner.enemies().iter().all(|enemy| !enemy.is_dead()));
    }

    #[test]
    fn strike_area_hits_overlapping_enemies_only() {
        let mut spawner = spawner();
        let clock = ManualClock::starting_at(0);
        let mut messages: Vec<String> = Vec::new();
        spawner.start_waves(&clock, &mut messages);

        let target = spawner.enemies()[0].position();
        let area = Rect::new(target.x + 10, target.y + 10, 4, 4);
        let before = spawner.enemies()[0].health();
        assert!(spawner.strike_area(area, 3) >= 1);
        assert_eq!(spawner.enemies()[0].health(), before - 3);
        assert_eq!(spawner.strike_area(Rect::new(-100, -100, 1, 1), 3), 0);
    }

    #[test]
    fn snapshot_counts_down_to_next_wave() {
        let mut spawner = spawner();
        let mut clock = ManualClock::starting_at(1_000);
        let mut messages: Vec<String> = Vec::new();
        spawner.start_waves(&clock, &mut messages);

        clock.advance(4_000);
        let snapshot = spawner.snapshot(clock.now_ms());
        assert_eq!(snapshot.phase, SpawnerPhase::Wave(1));
        assert_eq!(snapshot.enemies_alive, 5);
        assert_eq!(snapshot.next_transition_in_ms, Some(6_000));
        assert_eq!(snapshot.boss_health, None);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut spawner = spawner();
        let clock = ManualClock::starting_at(0);
        let mut messages: Vec<String> = Vec::new();
        spawner.start_waves(&clock, &mut messages);
        spawner.reset();

        assert_eq!(spawner.phase(), SpawnerPhase::Idle);
        assert!(spawner.enemies().is_empty());
        assert!(!spawner.boss_spawned());

        spawner.start_waves(&clock, &mut messages);
        assert_eq!(spawner.phase(), SpawnerPhase::Wave(1));
    }
}
