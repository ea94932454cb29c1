// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Subcommand implementations and the flag handling they share.

use std::path::Path;

use anyhow::{ensure, Result};
use clap::Args;
use plotter_app_core::prefs::PlotterPrefs;
use plotter_geom::{Camera, Scene};
use plotter_math::Vec3;
use tracing::warn;

use crate::scene_file;

pub mod cursor;
pub mod frame;
pub mod prefs;

/// Camera flags shared by `frame` and `cursor`.
#[derive(Args, Debug, Default)]
pub struct CameraArgs {
    /// Camera pan and distance as `X,Y,Z` (Z is the distance from the plane).
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_triple, allow_hyphen_values = true)]
    pub offset: Option<[f32; 3]>,

    /// Vertical field of view in degrees.
    #[arg(long, value_name = "DEG")]
    pub fov: Option<f32>,

    /// Pan by `DX,DY` key presses of the saved pan step.
    #[arg(long, value_name = "DX,DY", value_parser = parse_steps, allow_hyphen_values = true)]
    pub pan: Option<[i16; 2]>,

    /// Scroll notches of the saved zoom step; positive zooms in.
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub zoom: Option<i16>,
}

/// Parses `DX,DY` into two whole step counts.
pub fn parse_steps(s: &str) -> Result<[i16; 2], String> {
    let (dx, dy) = s
        .split_once(',')
        .ok_or_else(|| format!("expected DX,DY, got `{s}`"))?;
    let parse = |p: &str| {
        let p = p.trim();
        p.parse::<i16>()
            .map_err(|e| format!("`{p}` is not a step count: {e}"))
    };
    Ok([parse(dx)?, parse(dy)?])
}

/// Parses `X,Y,Z` into three floats.
pub fn parse_triple(s: &str) -> Result<[f32; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected X,Y,Z, got `{s}`"));
    };
    let parse = |p: &str| {
        p.parse::<f32>()
            .map_err(|e| format!("`{p}` is not a number: {e}"))
    };
    Ok([parse(x)?, parse(y)?, parse(z)?])
}

/// Camera for this run: saved pose, explicit flags, then pan/zoom steps.
pub fn build_camera(prefs: &PlotterPrefs, args: &CameraArgs, aspect_ratio: f32) -> Result<Camera> {
    let cam = &prefs.camera;
    let fov = args.fov.unwrap_or(cam.fov_deg);
    ensure!(
        fov.is_finite() && fov > 0.0 && fov < 180.0,
        "field of view must be between 0 and 180 degrees, got {fov}"
    );

    let mut camera = Camera::new(aspect_ratio, cam.distance, Vec3::UNIT_Y, fov);
    camera.pan(cam.pan[0], cam.pan[1]);
    if let Some(offset) = args.offset {
        camera.offset = Vec3::from(offset);
    }
    camera.z_near = cam.z_near;
    camera.z_far = cam.z_far;

    if let Some([dx, dy]) = args.pan {
        camera.pan(f32::from(dx) * cam.pan_step, f32::from(dy) * cam.pan_step);
    }
    let notches = args.zoom.unwrap_or(0);
    for _ in 0..notches.unsigned_abs() {
        if notches < 0 {
            camera.zoom_out(cam.zoom_step);
        } else if !camera.zoom_in(cam.zoom_step) {
            warn!(distance = camera.offset.z(), "zoom stops before the plot plane");
            break;
        }
    }

    ensure!(camera.offset.is_finite(), "camera offset must be finite");
    ensure!(
        camera.offset.z() > 0.0,
        "camera distance (offset Z) must be positive, got {}",
        camera.offset.z()
    );
    Ok(camera)
}

/// Saved window size in pixels.
#[allow(clippy::cast_precision_loss)]
pub fn window_size(prefs: &PlotterPrefs) -> (f32, f32) {
    (prefs.window.width as f32, prefs.window.height as f32)
}

/// Width over height, rejecting degenerate windows.
pub fn aspect_ratio(width: f32, height: f32) -> Result<f32> {
    ensure!(
        width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
        "viewport must have positive size, got {width}x{height}"
    );
    Ok(width / height)
}

/// The scene file at `path`, or the demo plot.
pub fn load_scene(path: Option<&Path>) -> Result<Scene> {
    path.map_or_else(|| Ok(Scene::demo()), scene_file::load)
}
