// Sanity checks on tuning constants shared by the walk and the web front-end.

#![allow(dead_code)]
mod walk_constants {
    include!("../src/core/constants.rs");
}
mod web_constants {
    include!("../src/constants.rs");
}

use walk_constants::*;
use web_constants::*;

#[test]
fn walk_defaults() {
    assert_eq!(WALKER_COUNT, 5);
    assert_eq!(SPAWN_BOUND, 10);
    assert_eq!(STEP_INTERVAL_SEC, 0.5);
    assert!(MIN_STEP_INTERVAL_SEC > 0.0 && MIN_STEP_INTERVAL_SEC < STEP_INTERVAL_SEC);
    assert!(MAX_CATCH_UP_BATCHES >= 1);
}

#[test]
fn cue_ranges_are_well_formed() {
    assert!(CUE_VOLUME_MIN < CUE_VOLUME_MAX);
    assert!(CUE_VOLUME_MAX <= 1.0);
    assert!(CUE_OFFSET_MAX_SEC > 0.0);
    assert!(CUE_DURATION_SEC > 0.0);
    assert!((0.0..=1.0).contains(&CUE_INITIAL_VOLUME));
    assert!(CUE_PLAYBACK_RATE > 0.0);
    assert!(CUE_CONE_INNER_DEG <= CUE_CONE_OUTER_DEG);
    assert!((0.0..=1.0).contains(&CUE_CONE_OUTER_GAIN));
    assert!(CUE_REF_DISTANCE > 0.0 && CUE_ROLLOFF_FACTOR >= 0.0);
}

#[test]
fn camera_and_scene_are_sane() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
    assert!(CAMERA_Z > ICOSA_RADIUS);
    assert!(CLEAR_COLOR_SRGB.iter().all(|c| (0.0..=1.0).contains(c)));
    assert!(MARKER_SIZE > 0.0);
    assert!(MARKER_INITIAL_CAPACITY.is_power_of_two());
    // Sample counts every WebGPU device supports for renderable formats
    assert!(MSAA_SAMPLE_COUNT == 1 || MSAA_SAMPLE_COUNT == 4);
    assert!(LIGHT_POSITION.length() > 0.0);
    assert!(AMBIENT_INTENSITY >= 0.0 && LIGHT_INTENSITY >= 0.0);
}

#[test]
fn dom_ids_are_distinct() {
    assert_ne!(CANVAS_ID, OVERLAY_ID);
    assert_ne!(OVERLAY_ID, START_BUTTON_ID);
    assert_ne!(CANVAS_ID, START_BUTTON_ID);
    assert!(CUE_SAMPLE_URL.ends_with(".mp3"));
}
