//! Enemy variants and their stat blocks.

use crate::geometry::Hitbox;

/// Closed set of hostile actor variants.
///
/// Every variant runs the same capability surface and AI shape; they differ
/// only in the numbers returned by [`EnemyKind::stats`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EnemyKind {
    /// Slow training target; strikes instantly with no cooldown.
    #[default]
    Dummy,
    /// Fast, fragile biter.
    Dog,
    /// Sluggish brawler with a telegraphed swing.
    Tambay,
    /// Encounter finale; spawned once per encounter by the wave spawner.
    Boss,
}

impl EnemyKind {
    /// Kinds the wave spawner may place in a regular wave.
    pub const BASIC: [EnemyKind; 3] = [EnemyKind::Dummy, EnemyKind::Dog, EnemyKind::Tambay];

    pub const fn is_boss(self) -> bool {
        matches!(self, EnemyKind::Boss)
    }

    pub const fn stats(self) -> EnemyStats {
        match self {
            EnemyKind::Dummy => EnemyStats {
                hitbox: Hitbox::new(8, 8, 32, 32),
                speed: 1.0,
                max_health: 30,
                damage: 1,
                attack_range: 40.0,
                vision_range: 240.0,
                windup_ms: 0,
                cooldown_ms: 0,
            },
            EnemyKind::Dog => EnemyStats {
                hitbox: Hitbox::new(6, 12, 28, 20),
                speed: 3.0,
                max_health: 20,
                damage: 4,
                attack_range: 36.0,
                vision_range: 320.0,
                windup_ms: 0,
                cooldown_ms: 800,
            },
            EnemyKind::Tambay => EnemyStats {
                hitbox: Hitbox::new(8, 4, 32, 40),
                speed: 1.5,
                max_health: 60,
                damage: 10,
                attack_range: 48.0,
                vision_range: 260.0,
                windup_ms: 400,
                cooldown_ms: 1200,
            },
            EnemyKind::Boss => EnemyStats {
                hitbox: Hitbox::new(16, 16, 64, 64),
                speed: 1.5,
                max_health: 400,
                damage: 20,
                attack_range: 80.0,
                vision_range: 600.0,
                windup_ms: 600,
                cooldown_ms: 1500,
            },
        }
    }
}

/// Numbers that distinguish one [`EnemyKind`] from another.
///
/// Ranges are Euclidean distances between hitbox centers, in world units.
/// `speed` is world units per tick and never below 1.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyStats {
    pub hitbox: Hitbox,
    pub speed: f32,
    pub max_health: i32,
    pub damage: i32,
    pub attack_range: f32,
    pub vision_range: f32,
    pub windup_ms: u64,
    pub cooldown_ms: u64,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(EnemyKind::from_str("tambay"), Ok(EnemyKind::Tambay));
        assert_eq!(EnemyKind::from_str("BOSS"), Ok(EnemyKind::Boss));
        assert!(EnemyKind::from_str("dragon").is_err());
        assert_eq!(EnemyKind::Dog.to_string(), "dog");
    }

    #[test]
    fn every_kind_sees_further_than_it_strikes() {
        for kind in EnemyKind::iter() {
            let stats = kind.stats();
            assert!(stats.attack_range < stats.vision_range, "{kind}");
            assert!(stats.speed >= 1.0, "{kind}");
            assert!(stats.max_health > 0, "{kind}");
        }
    }

    #[test]
    fn only_the_boss_is_a_boss() {
        assert!(EnemyKind::Boss.is_boss());
        assert!(EnemyKind::BASIC.iter().all(|kind| !kind.is_boss()));
    }
}
