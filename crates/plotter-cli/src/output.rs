// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rendering of command results as tables or JSON.

use std::io::Write;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use plotter_geom::{Camera, FrameReport, Scene};
use plotter_math::{Vec2, Vec4};
use serde::Serialize;

/// Pretty JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to encode JSON")?;
    writeln!(out).context("failed to write output")
}

fn point(v: Vec2) -> String {
    format!("({:.2}, {:.2})", v.x(), v.y())
}

/// Debug wireframe of a shape's world box, `p1, max, p3, min` line loop.
#[derive(Debug, Serialize)]
pub struct Wireframe {
    pub color: [f32; 4],
    pub corners: [[f32; 2]; 4],
}

#[derive(Debug, Serialize)]
pub struct ShapeRow {
    pub id: usize,
    pub vertices: usize,
    pub collider: bool,
    pub visible: bool,
    pub colliding: bool,
    pub min: [f32; 2],
    pub max: [f32; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wireframe: Option<Wireframe>,
}

#[derive(Debug, Serialize)]
pub struct CameraSummary {
    pub offset: [f32; 3],
    pub x_render_border: f32,
    pub y_render_border: f32,
    pub min: [f32; 2],
    pub max: [f32; 2],
}

/// Everything `plotter frame` reports.
#[derive(Debug, Serialize)]
pub struct FrameSummary {
    pub aspect_ratio: f32,
    pub camera: CameraSummary,
    pub shapes: Vec<ShapeRow>,
    pub pairs: Vec<[usize; 2]>,
}

impl FrameSummary {
    pub fn new(
        camera: &Camera,
        scene: &Scene,
        report: &FrameReport,
        aspect_ratio: f32,
        aabb_color: [f32; 4],
    ) -> Self {
        let shapes = report
            .shapes
            .iter()
            .filter_map(|frame| {
                let shape = scene.get(frame.id)?;
                let wireframe = shape.render_aabb.then(|| {
                    let boxed = frame.world_aabb.with_color(Vec4::from(aabb_color));
                    Wireframe {
                        color: aabb_color,
                        corners: boxed.corners().map(|c| c.position.to_array()),
                    }
                });
                Some(ShapeRow {
                    id: frame.id.0,
                    vertices: shape.vertices().len(),
                    collider: shape.collider,
                    visible: frame.visible,
                    colliding: frame.colliding,
                    min: frame.world_aabb.min().position.to_array(),
                    max: frame.world_aabb.max().position.to_array(),
                    wireframe,
                })
            })
            .collect();

        Self {
            aspect_ratio,
            camera: CameraSummary {
                offset: camera.offset.to_array(),
                x_render_border: camera.x_render_border(),
                y_render_border: camera.y_render_border(),
                min: report.camera_aabb.min().position.to_array(),
                max: report.camera_aabb.max().position.to_array(),
            },
            shapes,
            pairs: report.pairs.iter().map(|&(a, b)| [a.0, b.0]).collect(),
        }
    }

    pub fn camera_line(&self) -> String {
        let [x, y, z] = self.camera.offset;
        format!(
            "camera: offset ({x:.2}, {y:.2}, {z:.2})  view {} .. {}",
            point(Vec2::from(self.camera.min)),
            point(Vec2::from(self.camera.max)),
        )
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "id",
                "vertices",
                "visible",
                "colliding",
                "world min",
                "world max",
            ]);
        for row in &self.shapes {
            let colliding = if row.collider {
                row.colliding.to_string()
            } else {
                "-".to_owned()
            };
            table.add_row(vec![
                Cell::new(row.id),
                Cell::new(row.vertices),
                Cell::new(row.visible),
                Cell::new(colliding),
                Cell::new(point(Vec2::from(row.min))),
                Cell::new(point(Vec2::from(row.max))),
            ]);
        }
        table
    }

    pub fn pairs_line(&self) -> String {
        if self.pairs.is_empty() {
            return "overlapping pairs: none".to_owned();
        }
        let pairs: Vec<String> = self
            .pairs
            .iter()
            .map(|[a, b]| format!("({a}, {b})"))
            .collect();
        format!("overlapping pairs: {}", pairs.join(", "))
    }
}
