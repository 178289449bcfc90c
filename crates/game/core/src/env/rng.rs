//! Deterministic random numbers for spawn placement.
//!
//! Spawn positions are derived from a seed plus the identity of the draw
//! (wave number, slot in the batch, axis) instead of a mutable generator, so
//! an encounter replays identically no matter how many other draws happened
//! in between.

/// Stateless random source keyed by a seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Random value in `[min, max]` inclusive. Returns `min` for empty ranges.
    fn range_i32(&self, seed: u64, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let offset = u64::from(self.next_u32(seed)) % span;
        (i64::from(min) + offset as i64) as i32
    }
}

/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
    const INCREMENT: u64 = 1_442_695_040_888_963_407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Mixes the encounter seed with the identity of a single draw.
///
/// `wave` and `slot` locate the spawned enemy; `axis` separates the x and y
/// draws of the same enemy (0 and 1).
pub fn compute_seed(encounter_seed: u64, wave: u32, slot: u32, axis: u32) -> u64 {
    let mut hash = encounter_seed;
    hash ^= u64::from(wave).wrapping_mul(0x9e37_79b9_7f4a_7c15);
    hash ^= u64::from(slot).wrapping_mul(0x517c_c1b7_2722_0a95);
    hash ^= u64::from(axis).wrapping_mul(0x85eb_ca6b);

    // SplitMix64-style avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51_afd7_ed55_8ccd);
    hash ^= hash >> 33;
    hash
}
