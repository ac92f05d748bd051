pub mod constants;
pub mod field;
pub mod lattice;
pub mod orbit;
pub mod policy;
pub mod population;
pub mod scheduler;
pub mod sinks;
pub mod spin;
pub mod walker;

pub use constants::*;
pub use field::*;
pub use lattice::*;
pub use orbit::*;
pub use policy::*;
pub use population::*;
pub use scheduler::*;
pub use sinks::*;
pub use spin::*;
pub use walker::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
