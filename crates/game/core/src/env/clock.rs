//! Millisecond clocks.

use std::time::Instant;

/// Monotonic millisecond source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from the moment it was created.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Clock advanced explicitly by the caller.
///
/// Fixed-step drivers advance it by one timestep per simulation step so that
/// wave timing is reproducible regardless of real frame pacing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    pub const fn starting_at(now: u64) -> Self {
        Self { now }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now = self.now.saturating_add(ms);
    }

    /// Moves the clock to `now`; earlier values are ignored to stay monotonic.
    pub fn set(&mut self, now: u64) {
        self.now = self.now.max(now);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_counts_from_creation() {
        let clock = SystemClock::new();
        let start = clock.now_ms();
        assert!(start < 1_000);

        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(clock.now_ms() >= start + 5);
    }

    #[test]
    fn manual_clock_never_goes_backwards() {
        let mut clock = ManualClock::starting_at(100);
        clock.advance(50);
        clock.set(120);
        assert_eq!(clock.now_ms(), 150);
    }
}
