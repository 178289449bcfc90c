//! Attack timing state machine.
//!
//! ```text
//!          strike requested           windup elapsed, strike
//!   Idle ───────────────────► Windup ─────────────────────────► Cooldown
//!    ▲                          │                                  │
//!    │   target left range      │                                  │
//!    ├──────────────────────────┘                                  │
//!    └──────────────────────── cooldown elapsed ◄─────────────────┘
//! ```
//!
//! With zero windup the strike lands on the request itself; with zero
//! cooldown the cycle drops straight back to `Idle`.

/// Where the cycle currently is. Deadlines are clock milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AttackPhase {
    #[default]
    Idle,
    Windup {
        until: u64,
    },
    Cooldown {
        until: u64,
    },
}

/// Result of asking the cycle for a strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrikeOutcome {
    /// The strike lands now.
    Struck,
    /// A windup is in progress (or was just started).
    WindingUp,
    /// The previous strike is still recovering.
    CoolingDown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackCycle {
    phase: AttackPhase,
    windup_ms: u64,
    cooldown_ms: u64,
}

impl AttackCycle {
    pub const fn new(windup_ms: u64, cooldown_ms: u64) -> Self {
        Self {
            phase: AttackPhase::Idle,
            windup_ms,
            cooldown_ms,
        }
    }

    pub const fn phase(&self) -> AttackPhase {
        self.phase
    }

    /// `true` while a windup deadline lies in the future; movement is frozen.
    pub fn is_winding_up(&self, now: u64) -> bool {
        matches!(self.phase, AttackPhase::Windup { until } if now < until)
    }

    /// Expires elapsed phases before the tree runs.
    ///
    /// A finished cooldown returns to `Idle`. A finished windup whose target
    /// is no longer in range is dropped without striking.
    pub fn observe(&mut self, now: u64, target_in_range: bool) {
        match self.phase {
            AttackPhase::Cooldown { until } if now >= until => self.phase = AttackPhase::Idle,
            AttackPhase::Windup { until } if now >= until && !target_in_range => {
                self.phase = AttackPhase::Idle;
            }
            _ => {}
        }
    }

    /// Requests a strike at `now`.
    pub fn try_strike(&mut self, now: u64) -> StrikeOutcome {
        match self.phase {
            AttackPhase::Idle if self.windup_ms == 0 => self.strike(now),
            AttackPhase::Idle => {
                self.phase = AttackPhase::Windup {
                    until: now.saturating_add(self.windup_ms),
                };
                StrikeOutcome::WindingUp
            }
            AttackPhase::Windup { until } if now >= until => self.strike(now),
            AttackPhase::Windup { .. } => StrikeOutcome::WindingUp,
            AttackPhase::Cooldown { until } if now >= until => {
                self.phase = AttackPhase::Idle;
                self.try_strike(now)
            }
            AttackPhase::Cooldown { .. } => StrikeOutcome::CoolingDown,
        }
    }

    pub fn reset(&mut self) {
        self.phase = AttackPhase::Idle;
    }

    fn strike(&mut self, now: u64) -> StrikeOutcome {
        self.phase = if self.cooldown_ms == 0 {
            AttackPhase::Idle
        } else {
            AttackPhase::Cooldown {
                until: now.saturating_add(self.cooldown_ms),
            }
        };
        StrikeOutcome::Struck
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timing_strikes_every_request() {
        let mut cycle = AttackCycle::new(0, 0);
        assert_eq!(cycle.try_strike(0), StrikeOutcome::Struck);
        assert_eq!(cycle.try_strike(0), StrikeOutcome::Struck);
        assert_eq!(cycle.phase(), AttackPhase::Idle);
    }

    #[test]
    fn windup_delays_then_cooldown_blocks() {
        let mut cycle = AttackCycle::new(400, 1000);
        assert_eq!(cycle.try_strike(100), StrikeOutcome::WindingUp);
        assert!(cycle.is_winding_up(300));
        assert_eq!(cycle.try_strike(300), StrikeOutcome::WindingUp);
        assert_eq!(cycle.try_strike(500), StrikeOutcome::Struck);
        assert!(!cycle.is_winding_up(500));
        assert_eq!(cycle.try_strike(900), StrikeOutcome::CoolingDown);
        // Cooldown ends at 1500; the next request starts a fresh windup.
        assert_eq!(cycle.try_strike(1500), StrikeOutcome::WindingUp);
    }

    #[test]
    fn expired_windup_is_cancelled_when_target_leaves() {
        let mut cycle = AttackCycle::new(200, 0);
        cycle.try_strike(0);
        cycle.observe(100, false);
        assert!(cycle.is_winding_up(100), "still committed before deadline");
        cycle.observe(200, false);
        assert_eq!(cycle.phase(), AttackPhase::Idle);
    }

    #[test]
    fn observe_clears_finished_cooldown() {
        let mut cycle = AttackCycle::new(0, 500);
        cycle.try_strike(0);
        cycle.observe(499, true);
        assert!(matches!(cycle.phase(), AttackPhase::Cooldown { .. }));
        cycle.observe(500, true);
        assert_eq!(cycle.phase(), AttackPhase::Idle);
    }
}
