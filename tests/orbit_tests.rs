// Host-side tests for the orbit camera and the centre-piece spin.

#![allow(dead_code)]
mod walk {
    pub mod orbit {
        include!("../src/core/orbit.rs");
    }
    pub mod spin {
        include!("../src/core/spin.rs");
    }
}

use glam::{Vec3, Vec4};
use std::f32::consts::{FRAC_PI_2, PI};
use walk::orbit::OrbitCamera;
use walk::spin::Spin;

const EPS: f32 = 1e-4;

fn start_camera() -> OrbitCamera {
    OrbitCamera::looking_at(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::ZERO,
        75f32.to_radians(),
        0.1,
        1000.0,
    )
}

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPS
}

#[test]
fn starts_on_positive_z_looking_at_origin() {
    let cam = start_camera();
    assert!((cam.radius - 5.0).abs() < EPS);
    assert!((cam.phi - FRAC_PI_2).abs() < EPS);
    assert!(close(cam.eye(), Vec3::new(0.0, 0.0, 5.0)), "eye={:?}", cam.eye());
    assert!(close(cam.forward(), Vec3::NEG_Z));
}

#[test]
fn full_height_drag_is_one_revolution() {
    let mut cam = start_camera();
    cam.rotate(600.0, 0.0, 600.0);
    assert!(close(cam.eye(), Vec3::new(0.0, 0.0, 5.0)), "eye={:?}", cam.eye());
}

#[test]
fn quarter_drag_right_swings_camera_to_negative_x() {
    let mut cam = start_camera();
    cam.rotate(150.0, 0.0, 600.0);
    assert!(close(cam.eye(), Vec3::new(-5.0, 0.0, 0.0)), "eye={:?}", cam.eye());
    // Distance to the target is preserved
    assert!((cam.eye().length() - 5.0).abs() < EPS);
}

#[test]
fn vertical_drag_is_clamped_at_the_poles() {
    let mut cam = start_camera();
    cam.rotate(0.0, 10_000.0, 600.0);
    assert!(cam.phi > 0.0 && cam.phi < PI);
    cam.rotate(0.0, -10_000.0, 600.0);
    assert!(cam.phi > 0.0 && cam.phi < PI);
    let view = cam.view_matrix();
    assert!(view.to_cols_array().iter().all(|v| v.is_finite()));
}

#[test]
fn wheel_zooms_by_fixed_ratio() {
    let mut cam = start_camera();
    cam.zoom(-100.0);
    assert!((cam.radius - 4.75).abs() < EPS);
    cam.zoom(100.0);
    assert!((cam.radius - 5.0).abs() < EPS);
    cam.zoom(3.0);
    assert!((cam.radius - 5.0 / 0.95).abs() < EPS);
}

#[test]
fn zoom_ignores_zero_delta_and_disabled_flag() {
    let mut cam = start_camera();
    cam.zoom(0.0);
    assert!((cam.radius - 5.0).abs() < EPS);
    cam.enable_zoom = false;
    cam.zoom(-50.0);
    assert!((cam.radius - 5.0).abs() < EPS);
}

#[test]
fn zoom_respects_radius_limits() {
    let mut cam = start_camera();
    cam.min_radius = 4.9;
    cam.max_radius = 5.1;
    for _ in 0..10 {
        cam.zoom(-1.0);
    }
    assert!((cam.radius - 4.9).abs() < EPS);
    for _ in 0..10 {
        cam.zoom(1.0);
    }
    assert!((cam.radius - 5.1).abs() < EPS);
}

#[test]
fn right_drag_pans_target_and_eye_together() {
    let mut cam = start_camera();
    let per_px = 2.0 * 5.0 * (37.5f32.to_radians()).tan() / 600.0;

    cam.pan(100.0, 0.0, 600.0);
    assert!(close(cam.target, Vec3::new(-100.0 * per_px, 0.0, 0.0)), "target={:?}", cam.target);
    assert!(close(cam.eye() - cam.target, Vec3::new(0.0, 0.0, 5.0)));
    assert!(close(cam.forward(), Vec3::NEG_Z));

    cam.pan(0.0, 60.0, 600.0);
    assert!((cam.target.y - 60.0 * per_px).abs() < EPS);
    assert!((cam.radius - 5.0).abs() < EPS);
}

#[test]
fn pan_follows_the_current_view_plane() {
    let mut cam = start_camera();
    // Quarter turn: camera sits on -X looking towards +X
    cam.rotate(150.0, 0.0, 600.0);
    cam.pan(100.0, 0.0, 600.0);
    assert!(cam.target.x.abs() < EPS && cam.target.y.abs() < EPS);
    assert!(cam.target.z.abs() > 0.1);
}

#[test]
fn pan_can_be_disabled() {
    let mut cam = start_camera();
    cam.enable_pan = false;
    cam.pan(300.0, 300.0, 600.0);
    assert!(close(cam.target, Vec3::ZERO));
}

#[test]
fn aspect_ignores_degenerate_sizes() {
    let mut cam = start_camera();
    cam.set_aspect(1600, 800);
    assert!((cam.aspect - 2.0).abs() < EPS);
    cam.set_aspect(0, 800);
    assert!((cam.aspect - 2.0).abs() < EPS);
}

#[test]
fn target_projects_to_screen_centre() {
    let mut cam = start_camera();
    cam.set_aspect(1280, 720);
    cam.rotate(37.0, -12.0, 720.0);
    let clip = cam.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(clip.w > 0.0);
    assert!((clip.x / clip.w).abs() < EPS);
    assert!((clip.y / clip.w).abs() < EPS);
    let depth = clip.z / clip.w;
    assert!((0.0..=1.0).contains(&depth), "depth={depth}");
}

#[test]
fn spin_accumulates_per_frame() {
    let rate = Vec3::new(0.01, 0.04, -0.01);
    let mut spin = Spin::new(rate);
    assert!(spin.model_matrix().abs_diff_eq(glam::Mat4::IDENTITY, 1e-6));
    for _ in 0..100 {
        spin.advance();
    }
    assert!(close(spin.angles, rate * 100.0), "angles={:?}", spin.angles);
    let m = spin.model_matrix();
    assert!((m.determinant() - 1.0).abs() < EPS);
    assert!(close(m.w_axis.truncate(), Vec3::ZERO));
}
