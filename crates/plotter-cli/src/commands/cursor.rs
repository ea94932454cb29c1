// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `plotter cursor`: pixel to world, plus the shapes whose box is under it.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use plotter_app_core::prefs::PlotterPrefs;
use plotter_geom::{ShapeId, Viewport};
use plotter_math::Vec2;
use serde::Serialize;

use super::{aspect_ratio, build_camera, load_scene, window_size, CameraArgs};
use crate::output;

#[derive(Args, Debug)]
pub struct CursorArgs {
    /// Cursor x in pixels from the left edge.
    #[arg(long)]
    pub x: f32,

    /// Cursor y in pixels from the top edge.
    #[arg(long)]
    pub y: f32,

    /// Window width in pixels.
    #[arg(long)]
    pub width: Option<f32>,

    /// Window height in pixels.
    #[arg(long)]
    pub height: Option<f32>,

    /// JSON scene file to hit-test against (defaults to the demo scene).
    #[arg(long, value_name = "FILE")]
    pub scene: Option<PathBuf>,

    #[command(flatten)]
    pub camera: CameraArgs,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CursorReport {
    world: [f32; 2],
    /// Unsealed, non-empty shapes whose world box contains the point.
    under_cursor: Vec<usize>,
}

pub fn run(args: &CursorArgs, prefs: &PlotterPrefs, out: &mut impl Write) -> Result<()> {
    let (width, height) = window_size(prefs);
    let viewport = Viewport::new(args.width.unwrap_or(width), args.height.unwrap_or(height));
    let aspect = aspect_ratio(viewport.width, viewport.height)?;
    let mut camera = build_camera(prefs, &args.camera, aspect)?;
    camera.update(aspect);

    let world = camera.screen_to_world(Vec2::new(args.x, args.y), viewport);
    let scene = load_scene(args.scene.as_deref())?;
    let under_cursor: Vec<usize> = scene
        .iter()
        .filter(|(_, shape)| {
            !shape.is_sealed() && !shape.is_empty() && shape.world_aabb().contains_point(world)
        })
        .map(|(ShapeId(id), _)| id)
        .collect();

    let report = CursorReport {
        world: world.to_array(),
        under_cursor,
    };
    if args.json {
        return output::write_json(out, &report);
    }
    writeln!(out, "Cursor position: {:.2}, {:.2}", world.x(), world.y())?;
    let ids: Vec<String> = report.under_cursor.iter().map(ToString::to_string).collect();
    writeln!(
        out,
        "under cursor: {}",
        if ids.is_empty() { "-".to_owned() } else { ids.join(", ") }
    )
    .context("failed to write output")
}
