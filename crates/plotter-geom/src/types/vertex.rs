// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use plotter_math::{Mat4, Vec2, Vec4};

/// A plot point: 2D position plus RGBA color.
///
/// Serves both as a renderable vertex and as a colored [`crate::Aabb`]
/// corner. Equality compares positions only; color is payload.
#[derive(Debug, Copy, Clone, Default)]
pub struct Vertex {
    /// Position in the shape's local space (or world space for box corners).
    pub position: Vec2,
    /// RGBA, each channel in `0..=1`.
    pub color: Vec4,
}

impl Vertex {
    /// Creates a vertex.
    pub const fn new(position: Vec2, color: Vec4) -> Self {
        Self { position, color }
    }

    /// Creates a vertex from raw coordinates and channels.
    pub const fn with_rgba(x: f32, y: f32, r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec4::new(r, g, b, a))
    }

    /// Maps the position through `mat` as `(x, y, 0, 1)`; color is kept.
    #[must_use]
    pub fn transformed(&self, mat: &Mat4) -> Self {
        Self::new(mat.transform_point2(self.position), self.color)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotter_math::{translate, Vec3};

    #[test]
    fn equality_ignores_color() {
        let a = Vertex::with_rgba(1.0, 2.0, 1.0, 0.0, 0.0, 1.0);
        let b = Vertex::with_rgba(1.0, 2.0, 0.0, 0.0, 1.0, 0.5);
        let c = Vertex::with_rgba(1.0, 2.5, 1.0, 0.0, 0.0, 1.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn transformed_moves_position_and_keeps_color() {
        let v = Vertex::with_rgba(1.0, 1.0, 0.2, 0.3, 0.4, 1.0);
        let t = translate(&Mat4::IDENTITY, Vec3::new(2.0, -1.0, 7.0));
        let out = v.transformed(&t);
        assert_eq!(out.position, Vec2::new(3.0, 0.0));
        assert_eq!(out.color, v.color);
    }

    #[test]
    fn display_prints_position() {
        assert_eq!(Vertex::with_rgba(1.5, -2.0, 0.0, 0.0, 0.0, 1.0).to_string(), "1.5, -2");
    }
}
