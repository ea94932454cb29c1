// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Headless Cartesian Plotter.
//!
//! Runs the same per-frame geometry the windowed plotter runs (camera
//! update, culling, overlap highlighting) and prints the result instead of
//! drawing it.
//!
//! Invariants:
//! - stdout carries only command output (tables or JSON); logs go to stderr.
//! - Saved prefs provide defaults; explicit flags win.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use plotter_app_core::config::ConfigService;
use plotter_app_core::prefs::PlotterPrefs;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;
mod scene_file;
mod store;

use commands::{cursor::CursorArgs, frame::FrameArgs, prefs::PrefsCommand};

#[derive(Parser)]
#[command(
    name = "plotter",
    version,
    about = "Cartesian Plotter geometry, headless",
    disable_help_subcommand = true
)]
struct Cli {
    /// Directory holding saved prefs (defaults to the platform config dir).
    #[arg(long, global = true, value_name = "DIR", conflicts_with = "no_prefs")]
    prefs_dir: Option<PathBuf>,

    /// Ignore saved prefs and use built-in defaults.
    #[arg(long, global = true)]
    no_prefs: bool,

    /// More log output on stderr (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one frame over a scene and report visibility and collisions.
    Frame(FrameArgs),
    /// Map a cursor pixel to world coordinates.
    Cursor(CursorArgs),
    /// Show or reset saved preferences.
    #[command(subcommand)]
    Prefs(PrefsCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = store::open(cli.no_prefs, cli.prefs_dir.as_deref())?;
    let svc = ConfigService::new(store);
    let prefs = PlotterPrefs::load_or_default(&svc);

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Frame(args) => commands::frame::run(&args, &prefs, &mut out),
        Commands::Cursor(args) => commands::cursor::run(&args, &prefs, &mut out),
        Commands::Prefs(cmd) => commands::prefs::run(&cmd, &prefs, &svc, &mut out),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
