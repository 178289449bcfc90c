use std::time::Duration;

use crate::error::{Result, RuntimeError};

/// Fixed-timestep accumulator.
///
/// Elapsed wall-clock time is accumulated; each call to [`FixedStep::try_step`]
/// consumes one timestep if enough time has built up. Leftover time carries
/// over to the next iteration. The backlog is clamped so a stalled host does
/// not trigger a long burst of catch-up steps.
#[derive(Clone, Debug)]
pub struct FixedStep {
    timestep: Duration,
    max_backlog: Duration,
    accumulator: Duration,
    steps: u64,
}

impl FixedStep {
    pub fn new(timestep: Duration, max_backlog: Duration) -> Result<Self> {
        if timestep.is_zero() {
            return Err(RuntimeError::ZeroTimestep);
        }
        Ok(Self {
            timestep,
            max_backlog: max_backlog.max(timestep),
            accumulator: Duration::ZERO,
            steps: 0,
        })
    }

    pub fn timestep(&self) -> Duration {
        self.timestep
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Time accumulated but not yet consumed by a step.
    pub fn pending(&self) -> Duration {
        self.accumulator
    }

    /// Simulated milliseconds covered by the steps taken.
    pub fn sim_time_ms(&self) -> u64 {
        let nanos = self.timestep.as_nanos() * u128::from(self.steps);
        u64::try_from(nanos / 1_000_000).unwrap_or(u64::MAX)
    }

    pub fn accumulate(&mut self, elapsed: Duration) {
        self.accumulator = (self.accumulator + elapsed).min(self.max_backlog);
    }

    /// Consumes one timestep if available.
    pub fn try_step(&mut self) -> bool {
        if self.accumulator < self.timestep {
            return false;
        }
        self.accumulator -= self.timestep;
        self.steps += 1;
        true
    }

    /// One loop iteration: accumulate, then take at most one step.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.accumulate(elapsed);
        self.try_step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(16);

    #[test]
    fn zero_timestep_is_rejected() {
        assert!(matches!(
            FixedStep::new(Duration::ZERO, STEP),
            Err(RuntimeError::ZeroTimestep)
        ));
    }

    #[test]
    fn leftover_time_carries_over() {
        let mut stepper = FixedStep::new(STEP, Duration::from_secs(1)).unwrap();
        assert!(!stepper.advance(Duration::from_millis(10)));
        assert!(stepper.advance(Duration::from_millis(10)));
        assert_eq!(stepper.pending(), Duration::from_millis(4));
        assert_eq!(stepper.steps(), 1);
    }

    #[test]
    fn one_step_per_iteration_even_with_backlog() {
        let mut stepper = FixedStep::new(STEP, Duration::from_secs(1)).unwrap();
        assert!(stepper.advance(Duration::from_millis(48)));
        assert_eq!(stepper.steps(), 1);
        assert!(stepper.advance(Duration::ZERO));
        assert!(stepper.advance(Duration::ZERO));
        assert!(!stepper.advance(Duration::ZERO));
        assert_eq!(stepper.sim_time_ms(), 48);
    }

    #[test]
    fn backlog_is_clamped() {
        let mut stepper = FixedStep::new(STEP, Duration::from_millis(32)).unwrap();
        stepper.accumulate(Duration::from_secs(5));
        assert_eq!(stepper.pending(), Duration::from_millis(32));
    }
}
