//! finboard - Interactive TUI dashboard for financial operations.
//!
//! Runs against the embedded demo dataset:
//!   finboard                 # 1 second tick, 15 second refresh and rotation
//!   finboard --seed 42       # reproducible demo numbers
//!   finboard --refresh 30    # slower auto-refresh cadence
//!   finboard --log-file finboard.log   # diagnostics, filtered by RUST_LOG

use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use finboard::provider::MockProvider;
use finboard::tui::App;
use finboard::view::{REFRESH_PERIOD_SECS, ROTATION_PERIOD_SECS};

/// Interactive dashboard for financial operations.
#[derive(Parser)]
#[command(name = "finboard", about = "Financial operations dashboard")]
struct Args {
    /// Tick interval in seconds. Drives rotation and countdowns.
    #[arg(long, default_value_t = 1)]
    tick: u64,

    /// Auto-refresh period in seconds.
    #[arg(long, default_value_t = REFRESH_PERIOD_SECS)]
    refresh: u32,

    /// Tile rotation period in seconds.
    #[arg(long, default_value_t = ROTATION_PERIOD_SECS)]
    rotation: u32,

    /// Seed for the demo data generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Write diagnostics to this file. Level is controlled by RUST_LOG
    /// (default: finboard=debug).
    #[arg(long, value_name = "PATH")]
    log_file: Option<String>,
}

fn main() {
    let args = Args::parse();

    if args.tick == 0 {
        eprintln!("Error: --tick must be at least 1 second");
        std::process::exit(1);
    }

    // The terminal belongs to the TUI, so logs only go to a file.
    if let Some(path) = &args.log_file {
        let file = match File::create(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Error opening log file '{}': {}", path, e);
                std::process::exit(1);
            }
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("finboard=debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .with_target(false)
            .init();
    }

    let provider = Box::new(MockProvider::new(args.seed));
    let app = App::new(provider, args.refresh.max(1), args.rotation.max(1));

    if let Err(e) = app.run(Duration::from_secs(args.tick)) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
