use super::constants::{CUE_DURATION_SEC, CUE_OFFSET_MAX_SEC, CUE_VOLUME_MAX, CUE_VOLUME_MIN};
use super::lattice::{Position3, StepDelta};
use super::policy::StepPolicy;
use rand::{Rng, RngCore};

/// Linear RGB color, each channel in [0, 1).
pub type Rgb = [f32; 3];

/// Parameters for one playback of the shared cue voice.
///
/// Fields:
/// - `volume`: gain applied to the voice, in [0.8, 0.9)
/// - `offset_sec`: start offset into the sample, in [0, 0.05)
/// - `duration_sec`: how much of the sample to play
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cue {
    pub volume: f32,
    pub offset_sec: f64,
    pub duration_sec: f64,
}

/// Everything a single walker step asks of the outside world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepEvent {
    pub walker_index: usize,
    pub delta: StepDelta,
    pub position: Position3,
    pub color: Rgb,
    pub cue: Cue,
}

/// A lattice agent. Its identity is its slot in the population.
#[derive(Clone, Debug)]
pub struct Walker {
    index: usize,
    position: Position3,
    steps: u64,
}

impl Walker {
    pub fn new(index: usize, position: Position3) -> Self {
        Self {
            index,
            position,
            steps: 0,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn position(&self) -> Position3 {
        self.position
    }

    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Move by one policy delta and describe the marker and cue this step requests.
    ///
    /// Only the walker's own state changes here; performing the requests is up
    /// to the caller (see `sinks::dispatch`).
    pub fn step(&mut self, policy: &mut dyn StepPolicy, rng: &mut dyn RngCore) -> StepEvent {
        let delta = policy.next_delta(rng);
        self.position += delta.offset();
        self.steps += 1;

        let cue = Cue {
            volume: rng.gen_range(CUE_VOLUME_MIN..CUE_VOLUME_MAX),
            offset_sec: rng.gen_range(0.0..CUE_OFFSET_MAX_SEC),
            duration_sec: CUE_DURATION_SEC,
        };
        let color = [rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>()];

        StepEvent {
            walker_index: self.index,
            delta,
            position: self.position,
            color,
            cue,
        }
    }
}
