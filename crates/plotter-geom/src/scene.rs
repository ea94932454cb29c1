// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use plotter_math::{Vec2, Vec4};
use tracing::warn;

use crate::types::shape::Shape;
use crate::types::vertex::Vertex;

/// Grid line color of the demo scene.
pub const GRID_COLOR: Vec4 = Vec4::new(0.4, 0.5, 0.7, 0.3);
/// Axis color of the demo scene.
pub const AXIS_COLOR: Vec4 = Vec4::new(0.9, 0.9, 0.9, 0.5);

/// Position of a shape inside its [`Scene`].
///
/// Ids are indices: removing a shape shifts the ids of every later shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub usize);

/// Ordered shape storage. Draw order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shape and returns its id.
    pub fn add(&mut self, shape: Shape) -> ShapeId {
        self.shapes.push(shape);
        ShapeId(self.shapes.len() - 1)
    }

    /// Shape at `id`, if present.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.0)
    }

    /// Mutable shape at `id`, if present.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id.0)
    }

    /// Removes and returns the shape at `id`; out-of-range ids are a no-op.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        if id.0 >= self.shapes.len() {
            warn!(id = id.0, len = self.shapes.len(), "remove out of range; ignored");
            return None;
        }
        Some(self.shapes.remove(id.0))
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// `true` when the scene holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes with their ids, in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> + '_ {
        self.shapes.iter().enumerate().map(|(i, s)| (ShapeId(i), s))
    }

    /// Mutable shapes with their ids, in draw order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ShapeId, &mut Shape)> + '_ {
        self.shapes.iter_mut().enumerate().map(|(i, s)| (ShapeId(i), s))
    }

    /// The default plot: a sealed, non-colliding grid with arrowed axes,
    /// plus a white 6×6 quad centred at the origin.
    pub fn demo() -> Self {
        let mut scene = Self::new();
        scene.add(grid_and_axes());
        let white = Vec4::splat(1.0);
        scene.add(Shape::new(vec![
            Vertex::new(Vec2::new(-3.0, 3.0), white),
            Vertex::new(Vec2::new(3.0, 3.0), white),
            Vertex::new(Vec2::new(3.0, -3.0), white),
            Vertex::new(Vec2::new(-3.0, -3.0), white),
        ]));
        scene
    }
}

/// Line-list vertices: vertical lines at x = -19..=19 spanning y ±10,
/// horizontal lines at y = -9..=9 spanning x ±20, then both axes with
/// arrow heads.
fn grid_and_axes() -> Shape {
    let line = |a: (f32, f32), b: (f32, f32), color: Vec4| {
        [
            Vertex::new(Vec2::new(a.0, a.1), color),
            Vertex::new(Vec2::new(b.0, b.1), color),
        ]
    };

    let mut shape = Shape::new(Vec::new()).with_collider(false).sealed();
    // Starting inside the border keeps it reading as a grid rather than a board.
    for i in -19i16..=19 {
        let x = f32::from(i);
        shape.add_vertices(line((x, -10.0), (x, 10.0), GRID_COLOR));
    }
    for i in -9i16..=9 {
        let y = f32::from(i);
        shape.add_vertices(line((-20.0, y), (20.0, y), GRID_COLOR));
    }

    shape.add_vertices(line((-21.0, 0.0), (21.0, 0.0), AXIS_COLOR));
    shape.add_vertices(line((20.8, 0.2), (21.0, 0.0), AXIS_COLOR));
    shape.add_vertices(line((20.8, -0.2), (21.0, 0.0), AXIS_COLOR));
    shape.add_vertices(line((0.0, -11.0), (0.0, 11.0), AXIS_COLOR));
    shape.add_vertices(line((-0.2, 10.8), (0.0, 11.0), AXIS_COLOR));
    shape.add_vertices(line((0.2, 10.8), (0.0, 11.0), AXIS_COLOR));
    shape.rebuild_aabb();
    shape
}
