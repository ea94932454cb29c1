// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]

use plotter_geom::camera::{DEFAULT_DISTANCE, DEFAULT_Z_FAR, DEFAULT_Z_NEAR};
use plotter_geom::{Aabb, Camera, Viewport};
use plotter_math::{look_at, perspective, radians, transpose, Vec2, Vec3};

fn approx_eq(a: f32, b: f32) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-5, "expected {b}, got {a} (diff {diff})");
}

#[test]
fn update_centres_box_on_offset() {
    let aspect = 16.0 / 9.0;
    let mut cam = Camera::default();
    cam.fov = 45.0;
    cam.offset = Vec3::new(2.0, 3.0, 5.0);
    cam.update(aspect);

    let half_h = 5.0 * radians(22.5).tan();
    approx_eq(cam.y_render_border(), half_h);
    approx_eq(cam.x_render_border(), half_h * aspect);

    let b = cam.aabb();
    approx_eq(b.center().x(), 2.0);
    approx_eq(b.center().y(), 3.0);
    approx_eq(b.half_extents().x(), half_h * aspect);
    approx_eq(b.half_extents().y(), half_h);
}

#[test]
fn update_moves_eye_to_offset_and_looks_at_plane() {
    let mut cam = Camera::default();
    cam.offset = Vec3::new(-4.0, 1.5, 8.0);
    let vp = cam.update(1.25);
    assert_eq!(cam.position(), Vec3::new(-4.0, 1.5, 8.0));
    assert_eq!(cam.look_position(), Vec3::new(-4.0, 1.5, 0.0));
    assert_eq!(
        vp.view,
        transpose(&look_at(cam.position(), cam.look_position(), Vec3::UNIT_Y))
    );
    assert_eq!(
        vp.projection,
        perspective(radians(45.0), 1.25, DEFAULT_Z_NEAR, DEFAULT_Z_FAR)
    );
}

#[test]
fn zoom_is_read_in_the_same_update() {
    let mut cam = Camera::default();
    cam.update(1.0);
    let before = cam.y_render_border();
    cam.zoom_out(5.0);
    cam.update(1.0);
    // Twice the distance, twice the border; no frame of lag.
    approx_eq(cam.y_render_border(), before * 2.0);
}

#[test]
fn new_camera_has_bounds_before_first_update() {
    let cam = Camera::new(2.0, DEFAULT_DISTANCE, Vec3::UNIT_Y, 90.0);
    // tan(45°) = 1
    approx_eq(cam.y_render_border(), DEFAULT_DISTANCE);
    approx_eq(cam.x_render_border(), 2.0 * DEFAULT_DISTANCE);
    assert_eq!(cam.position(), Vec3::new(0.0, 0.0, DEFAULT_DISTANCE));
}

#[test]
fn visibility_uses_rebuilt_box() {
    let mut cam = Camera::new(1.0, 1.0, Vec3::UNIT_Y, 90.0);
    cam.update(1.0);
    let far_right = Aabb::new(Vec2::new(9.0, -0.5), Vec2::new(10.0, 0.5));
    assert!(!cam.is_visible(&far_right));

    cam.pan(9.0, 0.0);
    // Stale until the next update.
    assert!(!cam.is_visible(&far_right));
    cam.update(1.0);
    assert!(cam.is_visible(&far_right));
}

#[test]
fn edge_touching_box_is_visible() {
    let mut cam = Camera::new(1.0, 1.0, Vec3::UNIT_Y, 90.0);
    cam.update(1.0);
    let right = cam.aabb().max().position.x();
    let touching = Aabb::new(Vec2::new(right, 0.0), Vec2::new(right + 1.0, 1.0));
    assert!(cam.is_visible(&touching));
}

#[test]
fn cursor_maps_through_ndc_to_world() {
    let mut cam = Camera::default();
    cam.offset = Vec3::new(1.0, -1.0, 5.0);
    let viewport = Viewport::new(1920.0, 1000.0);
    cam.update(viewport.aspect_ratio());

    let centre = cam.screen_to_world(Vec2::new(960.0, 500.0), viewport);
    approx_eq(centre.x(), 1.0);
    approx_eq(centre.y(), -1.0);

    let top_left = cam.screen_to_world(Vec2::new(0.0, 0.0), viewport);
    approx_eq(top_left.x(), 1.0 - cam.x_render_border());
    approx_eq(top_left.y(), -1.0 + cam.y_render_border());

    // The screen corners land on the camera box corners.
    let bottom_right = cam.screen_to_world(Vec2::new(1920.0, 1000.0), viewport);
    approx_eq(bottom_right.x(), cam.aabb().p3().position.x());
    approx_eq(bottom_right.y(), cam.aabb().p3().position.y());
}
