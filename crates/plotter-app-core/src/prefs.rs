// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved plotter preferences (camera, debug overlay, window size).
//!
//! Every field has a default and missing fields deserialize to it, so a
//! prefs file written by an older build still loads.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{ConfigError, ConfigService, ConfigStore};

/// Key the preferences are stored under.
pub const PREFS_KEY: &str = "plotter_prefs";

/// Saved preferences for the plotter surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlotterPrefs {
    /// Camera pose and projection.
    pub camera: CameraPrefs,
    /// Debug overlay toggles.
    pub debug: DebugPrefs,
    /// Window size in pixels.
    pub window: WindowPrefs,
}

/// Camera pose, projection and input steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPrefs {
    /// Vertical field of view (degrees).
    pub fov_deg: f32,
    /// Initial distance from the plot plane.
    pub distance: f32,
    /// Initial pan (x, y) in world units.
    pub pan: [f32; 2],
    /// Near clip distance.
    pub z_near: f32,
    /// Far clip distance.
    pub z_far: f32,
    /// Pan distance per key press.
    pub pan_step: f32,
    /// Zoom distance per scroll notch.
    pub zoom_step: f32,
}

impl Default for CameraPrefs {
    fn default() -> Self {
        Self {
            fov_deg: 45.0,
            distance: 5.0,
            pan: [0.0, 0.0],
            z_near: 0.1,
            z_far: 1000.0,
            pan_step: 0.15,
            zoom_step: 0.5,
        }
    }
}

/// Debug overlay toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugPrefs {
    /// Draw each shape's world box as a wireframe.
    pub render_aabb: bool,
    /// Wireframe color (RGBA).
    pub aabb_color: [f32; 4],
}

impl Default for DebugPrefs {
    fn default() -> Self {
        Self {
            render_aabb: false,
            aabb_color: [0.9, 0.6, 0.3, 1.0],
        }
    }
}

/// Window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowPrefs {
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

impl Default for WindowPrefs {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1000,
        }
    }
}

impl PlotterPrefs {
    /// Loads saved prefs, falling back to defaults when none are stored or
    /// the stored blob cannot be read.
    pub fn load_or_default<S: ConfigStore>(svc: &ConfigService<S>) -> Self {
        match svc.load::<Self>(PREFS_KEY) {
            Ok(Some(prefs)) => {
                info!(key = PREFS_KEY, "loaded prefs");
                prefs
            }
            Ok(None) => Self::default(),
            Err(err) => {
                warn!(key = PREFS_KEY, %err, "unreadable prefs; using defaults");
                Self::default()
            }
        }
    }

    /// Persists these prefs.
    pub fn save<S: ConfigStore>(&self, svc: &ConfigService<S>) -> Result<(), ConfigError> {
        svc.save(PREFS_KEY, self)?;
        info!(key = PREFS_KEY, "saved prefs");
        Ok(())
    }
}
