// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `plotter prefs`: inspect or reset saved preferences.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;
use plotter_app_core::config::ConfigService;
use plotter_app_core::prefs::PlotterPrefs;
use tracing::info;

use crate::output;
use crate::store::PrefsStore;

#[derive(Subcommand, Debug)]
pub enum PrefsCommand {
    /// Print the effective preferences as JSON.
    Show,
    /// Overwrite saved preferences with the defaults.
    Reset,
}

pub fn run(
    cmd: &PrefsCommand,
    prefs: &PlotterPrefs,
    svc: &ConfigService<PrefsStore>,
    out: &mut impl Write,
) -> Result<()> {
    match cmd {
        PrefsCommand::Show => output::write_json(out, prefs),
        PrefsCommand::Reset => {
            PlotterPrefs::default()
                .save(svc)
                .context("failed to save prefs")?;
            match svc.store().location() {
                Some(dir) => {
                    info!(dir = %dir.display(), "prefs reset");
                    writeln!(out, "prefs reset in {}", dir.display())?;
                }
                None => writeln!(out, "prefs reset (not persisted)")?,
            }
            Ok(())
        }
    }
}
