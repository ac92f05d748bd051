use super::lattice::{Axis, StepDelta};
use rand::{Rng, RngCore};

/// Source of lattice moves for walkers.
///
/// Implementations receive the field's RNG so a seeded session stays
/// reproducible regardless of which policy is installed.
pub trait StepPolicy {
    fn next_delta(&mut self, rng: &mut dyn RngCore) -> StepDelta;
}

/// Axis uniform over x/y/z, direction uniform over {-1, 0, +1}, independently.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformStepPolicy;

impl StepPolicy for UniformStepPolicy {
    fn next_delta(&mut self, rng: &mut dyn RngCore) -> StepDelta {
        let axis = Axis::ALL[rng.gen_range(0..Axis::ALL.len())];
        let direction = rng.gen_range(-1..=1);
        StepDelta::new(axis, direction)
    }
}

/// Replays a fixed list of deltas in order, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct ScriptedStepPolicy {
    script: Vec<StepDelta>,
    cursor: usize,
}

impl ScriptedStepPolicy {
    /// An empty script yields no-op deltas along X.
    pub fn new(script: Vec<StepDelta>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Round-robin over X, Y, Z with a fixed direction.
    pub fn round_robin(direction: i32) -> Self {
        Self::new(
            Axis::ALL
                .iter()
                .map(|&axis| StepDelta::new(axis, direction))
                .collect(),
        )
    }
}

impl StepPolicy for ScriptedStepPolicy {
    fn next_delta(&mut self, _rng: &mut dyn RngCore) -> StepDelta {
        if self.script.is_empty() {
            return StepDelta::new(Axis::X, 0);
        }
        let delta = self.script[self.cursor % self.script.len()];
        self.cursor = (self.cursor + 1) % self.script.len();
        delta
    }
}
