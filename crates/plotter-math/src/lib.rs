// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! plotter-math: vector and matrix primitives for the Cartesian Plotter.
//!
//! Conventions (pinned once, tested in `tests/`):
//! - [`Mat4`] is stored row-major as four [`Vec4`] rows.
//! - Vectors are columns; transforms are always applied as `M * v`. There is
//!   no `v * M`.
//! - All arithmetic is `f32`. Angles are radians unless a name says degrees.
//!
//! Transform construction (translate, rotate, scale, look-at, perspective)
//! lives in [`transform`] as free functions and is re-exported at the root.
#![forbid(unsafe_code)]

use std::f32::consts::PI;

mod error;
mod mat4;
pub mod transform;
mod vec2;
mod vec3;
mod vec4;

pub use error::MathError;
pub use mat4::Mat4;
pub use transform::{
    look_at, look_at_up_y, model_matrix, multiply, perspective, rotate_x, rotate_y, rotate_z,
    scale, scale_xyz, transform, translate, transpose, try_look_at, try_perspective,
};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Degeneracy threshold used by normalisation and the checked constructors.
pub const EPSILON: f32 = 1e-6;

/// Converts degrees to radians (`degrees * pi / 180`).
pub fn radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Converts radians to degrees.
pub fn degrees(radians: f32) -> f32 {
    radians * 180.0 / PI
}
