use super::lattice::Position3;
use super::policy::StepPolicy;
use super::walker::{StepEvent, Walker};
use rand::{Rng, RngCore};
use smallvec::SmallVec;

/// Step events produced by one frame; sized so a default batch stays inline.
pub type StepBatch = SmallVec<[StepEvent; 8]>;

/// Fixed, ordered set of walkers. Order of construction is order of stepping.
#[derive(Clone, Debug)]
pub struct WalkerPopulation {
    walkers: Vec<Walker>,
}

impl WalkerPopulation {
    /// Spawn `count` walkers with each coordinate uniform in `[-bound, bound]`.
    ///
    /// Spawn positions may coincide.
    pub fn initialize(count: usize, bound: i32, rng: &mut dyn RngCore) -> Self {
        let bound = bound.abs();
        let walkers = (0..count)
            .map(|i| {
                let position = Position3::new(
                    rng.gen_range(-bound..=bound),
                    rng.gen_range(-bound..=bound),
                    rng.gen_range(-bound..=bound),
                );
                log::info!(
                    "[walker] {} spawn at ({}, {}, {})",
                    i,
                    position.x,
                    position.y,
                    position.z
                );
                Walker::new(i, position)
            })
            .collect();
        Self { walkers }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.walkers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walkers.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Walker> {
        self.walkers.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Walker> {
        self.walkers.iter()
    }

    pub fn positions(&self) -> Vec<Position3> {
        self.walkers.iter().map(Walker::position).collect()
    }

    /// Step every walker once, in population order.
    pub fn step_all(
        &mut self,
        policy: &mut dyn StepPolicy,
        rng: &mut dyn RngCore,
        out: &mut StepBatch,
    ) {
        for walker in &mut self.walkers {
            out.push(walker.step(policy, rng));
        }
    }
}
