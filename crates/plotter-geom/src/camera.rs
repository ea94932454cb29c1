// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pan/zoom camera and its world-space visibility box.
//!
//! The plotter draws with a perspective projection but only ever looks
//! straight down -Z at the plot plane. Moving along Z is the zoom; `offset`
//! carries the pan in x/y and the distance in z. The visible rectangle is
//! centred on the pan with half-height `offset.z * tan(fov / 2)` and
//! half-width that times the aspect ratio.

use plotter_math::{look_at, perspective, radians, transpose, Mat4, Vec2, Vec3};

use crate::types::aabb::{Aabb, DEFAULT_AABB_COLOR};

/// Default distance from the plot plane.
pub const DEFAULT_DISTANCE: f32 = 5.0;
/// Default vertical field of view, degrees.
pub const DEFAULT_FOV_DEG: f32 = 45.0;
/// Default near clip distance.
pub const DEFAULT_Z_NEAR: f32 = 0.1;
/// Default far clip distance.
pub const DEFAULT_Z_FAR: f32 = 1000.0;

/// Window size in pixels, as seen by cursor conversion.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Pixel (origin top-left, y down) to normalized device coordinates in `[-1, 1]`.
    pub fn to_ndc(&self, cursor: Vec2) -> Vec2 {
        Vec2::new(
            2.0 * cursor.x() / self.width - 1.0,
            1.0 - 2.0 * cursor.y() / self.height,
        )
    }
}

/// View and projection produced by [`Camera::update`] for the draw pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewProjection {
    /// World to camera space.
    pub view: Mat4,
    /// Camera to clip space.
    pub projection: Mat4,
}

/// The plotter camera.
///
/// `fov`, `up`, `offset` and the clip planes are inputs. `position`,
/// `look_position`, the render borders and the box are derived by
/// [`Camera::update`], which must run before any [`Camera::is_visible`] call
/// in the same frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Vertical field of view, degrees.
    pub fov: f32,
    /// Up vector for the view basis.
    pub up: Vec3,
    /// Pan (x, y) and distance from the plot plane (z).
    pub offset: Vec3,
    /// Near clip distance.
    pub z_near: f32,
    /// Far clip distance.
    pub z_far: f32,
    position: Vec3,
    look_position: Vec3,
    x_render_border: f32,
    y_render_border: f32,
    aabb: Aabb,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(1.0, DEFAULT_DISTANCE, Vec3::UNIT_Y, DEFAULT_FOV_DEG)
    }
}

impl Camera {
    /// Camera at `(0, 0, distance)` looking at the origin, borders computed
    /// for `aspect_ratio`.
    pub fn new(aspect_ratio: f32, distance: f32, up: Vec3, fov: f32) -> Self {
        let offset = Vec3::new(0.0, 0.0, distance);
        let mut camera = Self {
            fov,
            up,
            offset,
            z_near: DEFAULT_Z_NEAR,
            z_far: DEFAULT_Z_FAR,
            position: offset,
            look_position: Vec3::ZERO,
            x_render_border: 0.0,
            y_render_border: 0.0,
            aabb: Aabb::default(),
        };
        camera.refresh_bounds(aspect_ratio);
        camera
    }

    /// Recomputes borders and box from `offset`, then moves the eye to
    /// `offset` looking at `(offset.x, offset.y, 0)`.
    pub fn update(&mut self, aspect_ratio: f32) -> ViewProjection {
        self.refresh_bounds(aspect_ratio);
        self.position = self.offset;
        self.look_position = Vec3::new(self.offset.x(), self.offset.y(), 0.0);
        ViewProjection {
            view: self.view_matrix(),
            projection: self.projection_matrix(aspect_ratio),
        }
    }

    fn refresh_bounds(&mut self, aspect_ratio: f32) {
        self.y_render_border = self.offset.z() * (radians(self.fov) / 2.0).tan();
        self.x_render_border = self.y_render_border * aspect_ratio;

        let border = Vec2::new(self.x_render_border, self.y_render_border);
        let pan = Vec2::from(self.offset);
        self.aabb = Aabb::from_min_max(pan - border, pan + border, DEFAULT_AABB_COLOR);
    }

    /// Eye position as of the last update.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Look target as of the last update.
    pub fn look_position(&self) -> Vec3 {
        self.look_position
    }

    /// Half-width of the visible rectangle.
    pub fn x_render_border(&self) -> f32 {
        self.x_render_border
    }

    /// Half-height of the visible rectangle.
    pub fn y_render_border(&self) -> f32 {
        self.y_render_border
    }

    /// Visible rectangle in world space.
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// `transpose(look_at(position, look_position, up))`.
    pub fn view_matrix(&self) -> Mat4 {
        transpose(&look_at(self.position, self.look_position, self.up))
    }

    /// Perspective for the current fov and clip planes.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        perspective(radians(self.fov), aspect_ratio, self.z_near, self.z_far)
    }

    /// Coarse box-vs-box visibility against the last updated rectangle.
    pub fn is_visible(&self, world_aabb: &Aabb) -> bool {
        self.aabb.overlaps(world_aabb)
    }

    /// Moves the pan offset.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset.set_x(self.offset.x() + dx);
        self.offset.set_y(self.offset.y() + dy);
    }

    /// Moves towards the plane by `step` unless that would reach it.
    /// Returns whether the zoom was applied.
    pub fn zoom_in(&mut self, step: f32) -> bool {
        if self.offset.z() > step {
            self.offset.set_z(self.offset.z() - step);
            return true;
        }
        false
    }

    /// Moves away from the plane by `step`.
    pub fn zoom_out(&mut self, step: f32) {
        self.offset.set_z(self.offset.z() + step);
    }

    /// World coordinate under a cursor pixel: `offset.xy + ndc * borders`.
    pub fn screen_to_world(&self, cursor: Vec2, viewport: Viewport) -> Vec2 {
        let ndc = viewport.to_ndc(cursor);
        Vec2::new(
            self.offset.x() + ndc.x() * self.x_render_border,
            self.offset.y() + ndc.y() * self.y_render_border,
        )
    }
}
