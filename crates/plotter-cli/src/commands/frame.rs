// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `plotter frame`: one camera update, cull and highlight pass.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use plotter_app_core::prefs::PlotterPrefs;
use plotter_geom::FramePass;
use tracing::info;

use super::{aspect_ratio, build_camera, load_scene, window_size, CameraArgs};
use crate::output::{self, FrameSummary};

#[derive(Args, Debug)]
pub struct FrameArgs {
    /// JSON scene file (defaults to the demo grid and quad).
    #[arg(long, value_name = "FILE")]
    pub scene: Option<PathBuf>,

    /// Width over height; overrides the window size.
    #[arg(long, conflicts_with_all = ["width", "height"])]
    pub aspect: Option<f32>,

    /// Window width in pixels.
    #[arg(long)]
    pub width: Option<f32>,

    /// Window height in pixels.
    #[arg(long)]
    pub height: Option<f32>,

    #[command(flatten)]
    pub camera: CameraArgs,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &FrameArgs, prefs: &PlotterPrefs, out: &mut impl Write) -> Result<()> {
    let aspect = match args.aspect {
        Some(a) => aspect_ratio(a, 1.0)?,
        None => {
            let (width, height) = window_size(prefs);
            aspect_ratio(args.width.unwrap_or(width), args.height.unwrap_or(height))?
        }
    };

    let mut scene = load_scene(args.scene.as_deref())?;
    if prefs.debug.render_aabb {
        for (_, shape) in scene.iter_mut() {
            shape.render_aabb = true;
        }
    }

    let mut camera = build_camera(prefs, &args.camera, aspect)?;
    let report = FramePass::new().run(&mut camera, &scene, aspect);
    info!(
        visible = report.visible_ids().len(),
        colliding = report.colliding_ids().len(),
        "frame done"
    );

    let summary = FrameSummary::new(&camera, &scene, &report, aspect, prefs.debug.aabb_color);
    if args.json {
        output::write_json(out, &summary)
    } else {
        writeln!(out, "{}", summary.camera_line())?;
        writeln!(out, "{}", summary.table())?;
        writeln!(out, "{}", summary.pairs_line()).context("failed to write output")
    }
}
