// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use plotter_math::{Mat4, Vec2, Vec4};

use crate::types::vertex::Vertex;

/// Fill color for boxes built without an explicit color (debug wireframe orange).
pub const DEFAULT_AABB_COLOR: Vec4 = Vec4::new(0.9, 0.6, 0.3, 1.0);

/// Axis-aligned bounding box stored as four colored corners.
///
/// ```text
///  p1 ------- max
///  |           |
///  |           |
///  min ------- p3
/// ```
///
/// Invariants:
/// - `p1 = (min.x, max.y)` and `p3 = (max.x, min.y)`.
/// - `min` components are less than or equal to `max` components.
/// - [`Aabb::transformed`] returns a new box aligned to the world axes that
///   tightly bounds the transformed quad; the receiver is never mutated.
///
/// `Default` is the all-zero box returned for an empty point list.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Aabb {
    p1: Vertex,
    max: Vertex,
    p3: Vertex,
    min: Vertex,
}

impl Aabb {
    /// Builds the box spanned by two opposite corners, all corners `color`.
    ///
    /// The corners may be given in either order (`(-3, 3)` and `(3, -3)`
    /// describe the same square as `(-3, -3)` and `(3, 3)`); they are sorted
    /// per axis so the invariants hold.
    #[must_use]
    pub fn from_min_max(min: Vec2, max: Vec2, color: Vec4) -> Self {
        let lo = min.min(&max);
        let hi = min.max(&max);
        Self {
            p1: Vertex::new(Vec2::new(lo.x(), hi.y()), color),
            max: Vertex::new(hi, color),
            p3: Vertex::new(Vec2::new(hi.x(), lo.y()), color),
            min: Vertex::new(lo, color),
        }
    }

    /// [`Aabb::from_min_max`] with [`DEFAULT_AABB_COLOR`].
    #[must_use]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self::from_min_max(min, max, DEFAULT_AABB_COLOR)
    }

    /// Builds the minimal box containing all `points` in one pass.
    ///
    /// An empty slice yields the all-zero default box. The `min`/`p1`
    /// corners take the color of the point that supplied the minimum x, the
    /// `max`/`p3` corners the color of the point that supplied the maximum x.
    #[must_use]
    pub fn from_points(points: &[Vertex]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::default();
        };
        let mut min = *first;
        let mut max = *first;
        for v in rest {
            let p = v.position;
            if p.x() < min.position.x() {
                min.position.set_x(p.x());
                min.color = v.color;
            } else if p.x() > max.position.x() {
                max.position.set_x(p.x());
                max.color = v.color;
            }
            if p.y() < min.position.y() {
                min.position.set_y(p.y());
            } else if p.y() > max.position.y() {
                max.position.set_y(p.y());
            }
        }
        Self {
            p1: Vertex::new(Vec2::new(min.position.x(), max.position.y()), min.color),
            max,
            p3: Vertex::new(Vec2::new(max.position.x(), min.position.y()), max.color),
            min,
        }
    }

    /// Top-left corner.
    pub fn p1(&self) -> Vertex {
        self.p1
    }

    /// Top-right corner (maximum x and y).
    pub fn max(&self) -> Vertex {
        self.max
    }

    /// Bottom-right corner.
    pub fn p3(&self) -> Vertex {
        self.p3
    }

    /// Bottom-left corner (minimum x and y).
    pub fn min(&self) -> Vertex {
        self.min
    }

    /// Corners in line-loop order `p1, max, p3, min`, ready for a debug wireframe.
    pub fn corners(&self) -> [Vertex; 4] {
        [self.p1, self.max, self.p3, self.min]
    }

    /// Width along x.
    pub fn width(&self) -> f32 {
        self.max.position.x() - self.min.position.x()
    }

    /// Height along y.
    pub fn height(&self) -> f32 {
        self.max.position.y() - self.min.position.y()
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Vec2 {
        (self.min.position + self.max.position) * 0.5
    }

    /// Half of width and height.
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width() * 0.5, self.height() * 0.5)
    }

    /// Returns a copy with every corner recolored.
    #[must_use]
    pub fn with_color(&self, color: Vec4) -> Self {
        let [p1, max, p3, min] = self.corners().map(|v| Vertex::new(v.position, color));
        Self { p1, max, p3, min }
    }

    /// Box bounding this one after `model` is applied to its four corners.
    ///
    /// The transformed quad may be rotated; the result is re-tightened with a
    /// per-axis min/max over the four mapped corners, so it is always aligned
    /// to the world axes. Each named corner keeps its own color.
    #[must_use]
    pub fn transformed(&self, model: &Mat4) -> Self {
        let [p1, max, p3, min] = self.corners().map(|v| v.transformed(model));
        let lo = p1
            .position
            .min(&max.position)
            .min(&p3.position)
            .min(&min.position);
        let hi = p1
            .position
            .max(&max.position)
            .max(&p3.position)
            .max(&min.position);
        Self {
            p1: Vertex::new(Vec2::new(lo.x(), hi.y()), p1.color),
            max: Vertex::new(hi, max.color),
            p3: Vertex::new(Vec2::new(hi.x(), lo.y()), p3.color),
            min: Vertex::new(lo, min.color),
        }
    }

    /// Point-in-box test, inclusive on every edge.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let (lo, hi) = (self.min.position, self.max.position);
        (point.x() >= lo.x() && point.x() <= hi.x()) && (point.y() >= lo.y() && point.y() <= hi.y())
    }

    /// [`Aabb::contains_point`] on a vertex position.
    pub fn contains_vertex(&self, vertex: &Vertex) -> bool {
        self.contains_point(vertex.position)
    }

    /// Returns `true` if this box overlaps `other`; touching edges count.
    pub fn overlaps(&self, other: &Self) -> bool {
        let (a_min, a_max) = (self.min.position, self.max.position);
        let (b_min, b_max) = (other.min.position, other.max.position);
        (b_min.x() <= a_max.x() && b_max.x() >= a_min.x())
            && (b_min.y() <= a_max.y() && b_max.y() >= a_min.y())
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.p1)?;
        writeln!(f, "{}", self.max)?;
        writeln!(f, "{}", self.p3)?;
        writeln!(f, "{}", self.min)
    }
}
