// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON scene files.
//!
//! ```json
//! { "shapes": [ { "vertices": [[-1, 1], [1, 1], [1, -1], [-1, -1]],
//!                 "position": [2, 0], "angle_deg": 30, "collider": true } ] }
//! ```
//!
//! Omitted fields take the shape defaults: white, at the origin, unrotated,
//! unit scale, colliding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use plotter_geom::{Scene, Shape, Vertex};
use plotter_math::{radians, Vec2, Vec3, Vec4};
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneFile {
    pub shapes: Vec<ShapeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShapeEntry {
    pub vertices: Vec<[f32; 2]>,
    #[serde(default = "white")]
    pub color: [f32; 4],
    #[serde(default)]
    pub position: [f32; 2],
    #[serde(default)]
    pub angle_deg: f32,
    #[serde(default = "unit_scale")]
    pub scale: [f32; 2],
    #[serde(default = "colliding")]
    pub collider: bool,
}

const fn white() -> [f32; 4] {
    [1.0; 4]
}

const fn unit_scale() -> [f32; 2] {
    [1.0; 2]
}

const fn colliding() -> bool {
    true
}

impl ShapeEntry {
    fn is_finite(&self) -> bool {
        self.vertices.iter().flatten().all(|c| c.is_finite())
            && self.color.iter().all(|c| c.is_finite())
            && self.position.iter().all(|c| c.is_finite())
            && self.scale.iter().all(|c| c.is_finite())
            && self.angle_deg.is_finite()
    }

    fn into_shape(self) -> Shape {
        let color = Vec4::from(self.color);
        let vertices = self
            .vertices
            .iter()
            .map(|&p| Vertex::new(Vec2::from(p), color))
            .collect();
        let mut shape = Shape::new(vertices).with_collider(self.collider);
        shape.translation = Vec3::from_xy_z(Vec2::from(self.position), 0.0);
        shape.angle = radians(self.angle_deg);
        shape.scale = Vec3::from_xy_z(Vec2::from(self.scale), 1.0);
        shape
    }
}

impl SceneFile {
    /// Validates and builds the scene in file order.
    pub fn into_scene(self) -> Result<Scene> {
        let mut scene = Scene::new();
        for (index, entry) in self.shapes.into_iter().enumerate() {
            if !entry.is_finite() {
                bail!("shape {index}: non-finite number");
            }
            if entry.vertices.is_empty() {
                warn!(index, "shape has no vertices; it is never drawn or paired");
            }
            scene.add(entry.into_shape());
        }
        Ok(scene)
    }
}

/// Reads and parses a scene file.
pub fn load(path: &Path) -> Result<Scene> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene file {}", path.display()))?;
    let file: SceneFile = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse scene file {}", path.display()))?;
    let scene = file
        .into_scene()
        .with_context(|| format!("invalid scene file {}", path.display()))?;
    debug!(path = %path.display(), shapes = scene.len(), "loaded scene");
    Ok(scene)
}
