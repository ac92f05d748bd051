use super::constants::{MAX_CATCH_UP_BATCHES, MIN_STEP_INTERVAL_SEC, STEP_INTERVAL_SEC};
use super::policy::StepPolicy;
use super::population::{StepBatch, WalkerPopulation};
use rand::RngCore;
use std::time::Duration;

/// How many walker batches run when the accumulator reaches the interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepMode {
    /// One batch per threshold crossing, however much time has passed.
    #[default]
    Single,
    /// One batch per whole elapsed interval, capped at `MAX_CATCH_UP_BATCHES`.
    CatchUp,
}

/// Time accumulator that turns per-frame deltas into walker batches.
///
/// Time is kept as whole nanoseconds so frame deltas that add up to exactly
/// one interval always cross it. After every `advance`/`tick` the accumulator
/// lies in `[0, interval)`.
#[derive(Clone, Debug)]
pub struct FixedStepScheduler {
    interval: Duration,
    accumulator: Duration,
    mode: StepMode,
}

impl Default for FixedStepScheduler {
    fn default() -> Self {
        Self::new(Duration::from_secs_f64(STEP_INTERVAL_SEC), StepMode::Single)
    }
}

impl FixedStepScheduler {
    pub fn new(interval: Duration, mode: StepMode) -> Self {
        Self {
            interval: interval.max(Duration::from_secs_f64(MIN_STEP_INTERVAL_SEC)),
            accumulator: Duration::ZERO,
            mode,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn interval_sec(&self) -> f64 {
        self.interval.as_secs_f64()
    }

    #[inline]
    pub fn accumulated(&self) -> Duration {
        self.accumulator
    }

    #[inline]
    pub fn accumulator(&self) -> f64 {
        self.accumulator.as_secs_f64()
    }

    #[inline]
    pub fn mode(&self) -> StepMode {
        self.mode
    }

    /// Add `dt` and return how many batches are due now.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accumulator = self.accumulator.saturating_add(dt);
        if self.accumulator < self.interval {
            return 0;
        }
        let acc = self.accumulator.as_nanos();
        let interval = self.interval.as_nanos();
        let due = match self.mode {
            StepMode::Single => 1,
            StepMode::CatchUp => {
                (acc / interval).clamp(1, MAX_CATCH_UP_BATCHES as u128) as u32
            }
        };
        // The remainder is below the interval, so it fits in u64 nanoseconds
        self.accumulator = Duration::from_nanos((acc % interval) as u64);
        due
    }

    /// Advance by `dt` and step the whole population for every due batch,
    /// pushing the resulting events into `out`. Returns the number of batches run.
    pub fn tick(
        &mut self,
        dt: Duration,
        population: &mut WalkerPopulation,
        policy: &mut dyn StepPolicy,
        rng: &mut dyn RngCore,
        out: &mut StepBatch,
    ) -> u32 {
        let due = self.advance(dt);
        for _ in 0..due {
            population.step_all(policy, rng, out);
        }
        due
    }
}
