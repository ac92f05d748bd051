use glam::Vec3;

// Scene, camera and audio tuning constants used by the web frontend.

// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const OVERLAY_ID: &str = "overlay";
pub const START_BUTTON_ID: &str = "startButton";

// Scene
pub const CLEAR_COLOR_SRGB: [f32; 3] = [223.0 / 255.0, 223.0 / 255.0, 223.0 / 255.0]; // #dfdfdf
pub const ICOSA_RADIUS: f32 = 1.0;
pub const ICOSA_SPIN_PER_FRAME: Vec3 = Vec3::new(0.01, 0.04, -0.01); // radians per rendered frame
pub const MARKER_SIZE: f32 = 1.0; // edge length of a marker cube
pub const MARKER_INITIAL_CAPACITY: usize = 256; // instance buffer grows by doubling
pub const MSAA_SAMPLE_COUNT: u32 = 4; // WebGPU guarantees 1 and 4 for renderable formats

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;

// Lighting
pub const LIGHT_POSITION: Vec3 = Vec3::new(-1.0, 2.0, 4.0); // directional, pointing at the origin
pub const LIGHT_INTENSITY: f32 = 1.0;
pub const AMBIENT_INTENSITY: f32 = 0.5;

// Cue voice
pub const CUE_SAMPLE_URL: &str = "./sounds/Gabriele100_Keyboard_Various-Keys_02.mp3";
pub const CUE_INITIAL_VOLUME: f32 = 0.5;
pub const CUE_PLAYBACK_RATE: f32 = 10.0;
pub const CUE_REF_DISTANCE: f64 = 100.0;
pub const CUE_ROLLOFF_FACTOR: f64 = 0.9;
pub const CUE_CONE_INNER_DEG: f64 = 180.0;
pub const CUE_CONE_OUTER_DEG: f64 = 230.0;
pub const CUE_CONE_OUTER_GAIN: f64 = 0.1;
