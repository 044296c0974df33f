//! Ephemeris State Tool
//!
//! Prints the engine state for one or more instants as JSON, one state per
//! line. Stepping with a negative interval scrubs backwards in time.
//!
//! Usage:
//!   cargo run --bin ephem_state -- --time 2024-04-08T18:18:00Z --frame star
//!   cargo run --bin ephem_state -- --steps 48 --step-minutes -30 --lat 40.7 --lon -74.0
//!
//! Set `RUST_LOG=debug` (or `trace`) to see what the engine is doing.

use std::path::PathBuf;

use chrono::{Duration, Utc};
use clap::{ArgAction, Parser};
use orrery::{EngineConfig, Ephemeris, FrameSelector, Instant, Observer, OrreryError};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Ephemeris State Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes Sun/Earth/Moon states and prints them as JSON",
    long_about = None
)]
struct Args {
    /// Instant to evaluate, RFC 3339 (defaults to now)
    #[arg(short, long)]
    time: Option<Instant>,

    /// Display frame: central, star or satellite
    #[arg(short, long, default_value = "central")]
    frame: FrameSelector,

    /// Observer latitude in degrees
    #[arg(long, default_value_t = 51.4769, allow_negative_numbers = true)]
    lat: f64,

    /// Observer longitude in degrees, east positive
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    lon: f64,

    /// JSON file overriding display distances and eclipse thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of states to print
    #[arg(short, long, default_value_t = 1)]
    steps: usize,

    /// Minutes between successive states (negative scrubs backwards)
    #[arg(long, default_value_t = 60, allow_negative_numbers = true)]
    step_minutes: i64,

    /// Pretty-print each state
    #[arg(short, long, action = ArgAction::SetTrue)]
    pretty: bool,
}

/// Load the engine configuration, falling back to the defaults
fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };

    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    let config = EngineConfig::from_json_str(&text).map_err(OrreryError::from)?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = load_config(args.config.as_ref())?;
    let engine = Ephemeris::new(config).map_err(OrreryError::from)?;
    let observer = Observer::new(args.lat, args.lon);
    let start = args.time.unwrap_or_else(|| Instant::from_utc(Utc::now()));

    log::info!(
        "{} state(s) from {} in the {} frame, observer at ({:.4}, {:.4})",
        args.steps,
        start,
        args.frame,
        observer.latitude(),
        observer.longitude()
    );

    let states = engine
        .compute_series(
            &start,
            Duration::minutes(args.step_minutes),
            args.steps,
            args.frame,
            &observer,
        )
        .map_err(OrreryError::from)?;

    for state in &states {
        let line = if args.pretty {
            serde_json::to_string_pretty(state)?
        } else {
            serde_json::to_string(state)?
        };
        println!("{}", line);
    }

    Ok(())
}
