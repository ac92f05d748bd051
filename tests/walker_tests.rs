// Host-side tests for walkers, step policies and the population.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod walk {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod lattice {
        include!("../src/core/lattice.rs");
    }
    pub mod policy {
        include!("../src/core/policy.rs");
    }
    pub mod walker {
        include!("../src/core/walker.rs");
    }
    pub mod population {
        include!("../src/core/population.rs");
    }
    pub mod sinks {
        include!("../src/core/sinks.rs");
    }
}

use glam::IVec3;
use rand::prelude::*;
use walk::constants::*;
use walk::lattice::*;
use walk::policy::*;
use walk::population::*;
use walk::sinks::*;
use walk::walker::*;

#[derive(Default)]
struct Recorder {
    markers: Vec<(Position3, Rgb)>,
    cues: Vec<Cue>,
}

impl MarkerSink for Recorder {
    fn place_marker(&mut self, position: Position3, color: Rgb) {
        self.markers.push((position, color));
    }
}

impl CueSink for Recorder {
    fn play_cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}

#[test]
fn forced_step_moves_down_y_and_requests_one_marker() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut policy = ScriptedStepPolicy::new(vec![StepDelta::new(Axis::Y, -1)]);
    let mut walker = Walker::new(0, IVec3::ZERO);

    let ev = walker.step(&mut policy, &mut rng);
    assert_eq!(walker.position(), IVec3::new(0, -1, 0));
    assert_eq!(ev.position, IVec3::new(0, -1, 0));
    assert_eq!(ev.delta, StepDelta::new(Axis::Y, -1));
    assert_eq!(walker.steps(), 1);

    let mut markers = Recorder::default();
    let mut cues = Recorder::default();
    dispatch(std::iter::once(&ev), &mut markers, &mut cues);
    assert_eq!(markers.markers.len(), 1);
    assert_eq!(markers.markers[0].0, IVec3::new(0, -1, 0));
    assert_eq!(markers.markers[0].1, ev.color);
    assert_eq!(cues.cues, vec![ev.cue]);
}

#[test]
fn round_robin_policy_increments_x_then_y_then_z() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut policy = ScriptedStepPolicy::round_robin(1);
    let mut walker = Walker::new(3, IVec3::new(2, -4, 6));

    walker.step(&mut policy, &mut rng);
    assert_eq!(walker.position(), IVec3::new(3, -4, 6));
    walker.step(&mut policy, &mut rng);
    assert_eq!(walker.position(), IVec3::new(3, -3, 6));
    walker.step(&mut policy, &mut rng);
    assert_eq!(walker.position(), IVec3::new(3, -3, 7));
    // Script wraps around
    walker.step(&mut policy, &mut rng);
    assert_eq!(walker.position(), IVec3::new(4, -3, 7));
}

#[test]
fn consecutive_positions_are_at_most_one_apart() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut policy = UniformStepPolicy;
    let mut walker = Walker::new(0, IVec3::new(5, 5, 5));
    let mut noops = 0;
    for _ in 0..2000 {
        let before = walker.position();
        let ev = walker.step(&mut policy, &mut rng);
        let d = manhattan(before, walker.position());
        assert!(d == 0 || d == 1, "moved {d} in one step");
        if ev.delta.is_noop() {
            assert_eq!(d, 0);
            noops += 1;
        }
    }
    assert_eq!(walker.steps(), 2000);
    // A third of the draws have direction 0
    assert!(noops > 500 && noops < 850, "noops={noops}");
}

#[test]
fn uniform_policy_reaches_every_axis_and_direction() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut policy = UniformStepPolicy;
    let mut seen = [[0u32; 3]; 3];
    for _ in 0..3000 {
        let d = policy.next_delta(&mut rng);
        assert!((-1..=1).contains(&d.direction));
        seen[d.axis.index()][(d.direction + 1) as usize] += 1;
    }
    for axis in 0..3 {
        for dir in 0..3 {
            assert!(seen[axis][dir] > 200, "axis {axis} dir {dir} seen {}", seen[axis][dir]);
        }
    }
}

#[test]
fn cue_and_color_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut policy = UniformStepPolicy;
    let mut walker = Walker::new(1, IVec3::ZERO);
    for _ in 0..1000 {
        let ev = walker.step(&mut policy, &mut rng);
        assert!(ev.cue.volume >= CUE_VOLUME_MIN && ev.cue.volume < CUE_VOLUME_MAX);
        assert!(ev.cue.offset_sec >= 0.0 && ev.cue.offset_sec < CUE_OFFSET_MAX_SEC);
        assert_eq!(ev.cue.duration_sec, CUE_DURATION_SEC);
        assert!(ev.color.iter().all(|c| (0.0..1.0).contains(c)));
        assert_eq!(ev.walker_index, 1);
    }
}

#[test]
fn step_delta_direction_is_clamped_to_unit() {
    assert_eq!(StepDelta::new(Axis::Z, 7).direction, 1);
    assert_eq!(StepDelta::new(Axis::Z, -3).direction, -1);
    assert_eq!(StepDelta::new(Axis::X, 0).offset(), IVec3::ZERO);
    assert_eq!(StepDelta::new(Axis::Y, -1).offset(), IVec3::new(0, -1, 0));
    assert_eq!(Axis::from_index(2), Some(Axis::Z));
    assert_eq!(Axis::from_index(3), None);
}

#[test]
fn empty_script_yields_noop() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut policy = ScriptedStepPolicy::new(Vec::new());
    let mut walker = Walker::new(0, IVec3::new(1, 2, 3));
    let ev = walker.step(&mut policy, &mut rng);
    assert!(ev.delta.is_noop());
    assert_eq!(walker.position(), IVec3::new(1, 2, 3));
    assert_eq!(walker.steps(), 1);
}

#[test]
fn population_spawns_within_bounds_in_order() {
    let mut rng = StdRng::seed_from_u64(42);
    let pop = WalkerPopulation::initialize(WALKER_COUNT, SPAWN_BOUND, &mut rng);
    assert_eq!(pop.len(), 5);
    for (i, w) in pop.iter().enumerate() {
        assert_eq!(w.index(), i);
        assert_eq!(w.steps(), 0);
        let p = w.position();
        for c in [p.x, p.y, p.z] {
            assert!((-10..=10).contains(&c), "coordinate {c} out of bounds");
        }
    }
}

#[test]
fn population_bounds_hold_across_many_seeds() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let pop = WalkerPopulation::initialize(5, 10, &mut rng);
        assert!(pop
            .positions()
            .iter()
            .all(|p| p.abs().max_element() <= 10));
    }
}

#[test]
fn zero_bound_spawns_everyone_at_origin() {
    let mut rng = StdRng::seed_from_u64(3);
    let pop = WalkerPopulation::initialize(4, 0, &mut rng);
    assert_eq!(pop.positions(), vec![IVec3::ZERO; 4]);
}

#[test]
fn step_all_runs_in_population_order() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut pop = WalkerPopulation::initialize(5, 10, &mut rng);
    let before = pop.positions();
    let mut policy = ScriptedStepPolicy::new(vec![StepDelta::new(Axis::X, 1)]);
    let mut out = StepBatch::new();
    pop.step_all(&mut policy, &mut rng, &mut out);

    let order: Vec<usize> = out.iter().map(|e| e.walker_index).collect();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
    for (i, ev) in out.iter().enumerate() {
        assert_eq!(ev.position, before[i] + IVec3::X);
        assert_eq!(pop.get(i).map(|w| w.steps()), Some(1));
    }
}

#[test]
fn absent_sinks_swallow_requests() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut walker = Walker::new(0, IVec3::ZERO);
    let ev = walker.step(&mut UniformStepPolicy, &mut rng);
    let mut markers: Option<Recorder> = None;
    let mut cues: Option<Recorder> = Some(Recorder::default());
    dispatch([ev, ev].iter(), &mut markers, &mut cues);
    assert!(markers.is_none());
    assert_eq!(cues.map(|c| c.cues.len()), Some(2));
}
