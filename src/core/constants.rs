// Walk tuning constants shared by the core and the web frontend.

// Population
pub const WALKER_COUNT: usize = 5;
pub const SPAWN_BOUND: i32 = 10; // initial coordinates are drawn from [-SPAWN_BOUND, SPAWN_BOUND]

// Scheduling
pub const STEP_INTERVAL_SEC: f64 = 0.5; // two walker batches per second
pub const MIN_STEP_INTERVAL_SEC: f64 = 1e-3; // keeps the accumulator modulo well defined
pub const MAX_CATCH_UP_BATCHES: u32 = 8; // only used by StepMode::CatchUp

// Cue ranges (half-open)
pub const CUE_VOLUME_MIN: f32 = 0.8;
pub const CUE_VOLUME_MAX: f32 = 0.9;
pub const CUE_OFFSET_MAX_SEC: f64 = 0.05;
pub const CUE_DURATION_SEC: f64 = 0.1;
