use std::fmt;

/// Coarse state of the encounter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpawnerPhase {
    /// Waves have not been started (or the spawner was reset).
    #[default]
    Idle,
    /// Regular wave `n`, 1-based.
    Wave(u32),
    /// Terminal phase; lasts until reset even after the boss dies.
    BossPhase,
}

impl fmt::Display for SpawnerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnerPhase::Idle => f.write_str("idle"),
            SpawnerPhase::Wave(n) => write!(f, "wave {n}"),
            SpawnerPhase::BossPhase => f.write_str("boss"),
        }
    }
}

/// Read-only summary for HUD consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnerSnapshot {
    pub phase: SpawnerPhase,
    pub enemies_alive: usize,
    /// `(health, max_health)` of the boss while it lives.
    pub boss_health: Option<(i32, i32)>,
    pub boss_spawned: bool,
    pub boss_defeated: bool,
    /// Time until the next wave or the boss, if one is still pending.
    pub next_transition_in_ms: Option<u64>,
}
