// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use plotter_math::{model_matrix, rotate_z, scale_xyz, translate, Mat4, Vec3, Vec4};

use crate::types::aabb::Aabb;
use crate::types::vertex::Vertex;

/// An editable polyline placed in the plot by translation, Z rotation and scale.
///
/// Conventions:
/// - `translation` in world units, `angle` in radians (counter-clockwise),
///   `scale` per axis and applied first.
/// - The local box is computed from the vertex list at construction and by
///   [`Shape::rebuild_aabb`]. [`Shape::add_vertices`] does not rebuild it;
///   callers batch their edits and rebuild once.
/// - `sealed` shapes (the background grid) are not editable from the UI and
///   are built non-colliding.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    vertices: Vec<Vertex>,
    /// World-space offset.
    pub translation: Vec3,
    /// Rotation about Z, radians.
    pub angle: f32,
    /// Per-axis scale factors.
    pub scale: Vec3,
    /// Whether the shape takes part in overlap highlighting.
    pub collider: bool,
    /// Whether the debug wireframe of the world box is drawn.
    pub render_aabb: bool,
    sealed: bool,
    aabb: Aabb,
}

impl Shape {
    /// Creates a colliding, unsealed shape with identity placement.
    pub fn new(vertices: Vec<Vertex>) -> Self {
        let aabb = Aabb::from_points(&vertices);
        Self {
            vertices,
            translation: Vec3::ZERO,
            angle: 0.0,
            scale: Vec3::splat(1.0),
            collider: true,
            render_aabb: false,
            sealed: false,
            aabb,
        }
    }

    /// Sets the collider flag.
    #[must_use]
    pub fn with_collider(mut self, collider: bool) -> Self {
        self.collider = collider;
        self
    }

    /// Marks the shape as sealed.
    #[must_use]
    pub fn sealed(mut self) -> Self {
        self.sealed = true;
        self
    }

    /// Whether the shape is sealed against UI edits.
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// `true` when the shape has no vertices and so no extent.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex list in local space.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Appends vertices. Call [`Shape::rebuild_aabb`] afterwards.
    pub fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = Vertex>,
    {
        self.vertices.extend(vertices);
    }

    /// Recolors every vertex.
    pub fn fill_color(&mut self, color: Vec4) {
        for v in &mut self.vertices {
            v.color = color;
        }
    }

    /// Recomputes the local box from the current vertex list.
    pub fn rebuild_aabb(&mut self) {
        self.aabb = Aabb::from_points(&self.vertices);
    }

    /// Box in local space, as of the last rebuild.
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// `translate(I, translation)`.
    pub fn translation_matrix(&self) -> Mat4 {
        translate(&Mat4::IDENTITY, self.translation)
    }

    /// `rotate_z(angle)`.
    pub fn rotation_matrix(&self) -> Mat4 {
        rotate_z(self.angle)
    }

    /// `scale_xyz(scale)`.
    pub fn scale_matrix(&self) -> Mat4 {
        scale_xyz(self.scale)
    }

    /// `T * R * S`.
    pub fn model_matrix(&self) -> Mat4 {
        model_matrix(self.translation, self.angle, self.scale)
    }

    /// Local box mapped through [`Shape::model_matrix`].
    pub fn world_aabb(&self) -> Aabb {
        self.aabb.transformed(&self.model_matrix())
    }
}
