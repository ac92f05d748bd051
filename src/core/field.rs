use super::constants::{SPAWN_BOUND, STEP_INTERVAL_SEC, WALKER_COUNT};
use super::policy::{StepPolicy, UniformStepPolicy};
use super::population::{StepBatch, WalkerPopulation};
use super::scheduler::{FixedStepScheduler, StepMode};
use rand::prelude::*;
use std::time::Duration;

/// Parameters for building a `WalkerField`.
///
/// - `walker_count` is fixed for the session
/// - `step_interval` is the time between walker batches
/// - `spawn_bound` limits initial coordinates to `[-spawn_bound, spawn_bound]`
/// - `seed` makes spawn positions, moves, colors and cues reproducible; `None`
///   draws from entropy
#[derive(Clone, Debug)]
pub struct WalkConfig {
    pub walker_count: usize,
    pub step_interval: Duration,
    pub spawn_bound: i32,
    pub step_mode: StepMode,
    pub seed: Option<u64>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            walker_count: WALKER_COUNT,
            step_interval: Duration::from_secs_f64(STEP_INTERVAL_SEC),
            spawn_bound: SPAWN_BOUND,
            step_mode: StepMode::Single,
            seed: None,
        }
    }
}

/// The walk simulation as one context object: population, scheduler, policy and RNG.
///
/// Typical usage:
/// - Construct with `WalkerField::new(WalkConfig::default())`
/// - Call `tick(dt, &mut batch)` once per frame
/// - Hand `batch` to `sinks::dispatch` and clear it
pub struct WalkerField {
    population: WalkerPopulation,
    scheduler: FixedStepScheduler,
    policy: Box<dyn StepPolicy>,
    rng: StdRng,
}

impl WalkerField {
    pub fn new(config: WalkConfig) -> Self {
        Self::with_policy(config, Box::new(UniformStepPolicy))
    }

    pub fn with_policy(config: WalkConfig, policy: Box<dyn StepPolicy>) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let population =
            WalkerPopulation::initialize(config.walker_count, config.spawn_bound, &mut rng);
        let scheduler = FixedStepScheduler::new(config.step_interval, config.step_mode);
        Self {
            population,
            scheduler,
            policy,
            rng,
        }
    }

    #[inline]
    pub fn population(&self) -> &WalkerPopulation {
        &self.population
    }

    #[inline]
    pub fn scheduler(&self) -> &FixedStepScheduler {
        &self.scheduler
    }

    /// Advance the field by `dt`, appending any walker steps to `out`.
    pub fn tick(&mut self, dt: Duration, out: &mut StepBatch) -> u32 {
        self.scheduler.tick(
            dt,
            &mut self.population,
            self.policy.as_mut(),
            &mut self.rng,
            out,
        )
    }
}
