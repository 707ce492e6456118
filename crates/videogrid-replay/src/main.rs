//! Video grid replay binary.
//!
//! # Usage
//!
//! ```bash
//! # Replay with the stock layout
//! videogrid-replay session.jsonl
//!
//! # Replay with a configuration file and overrides
//! videogrid-replay session.jsonl --config grid.json --featured-tile-limit 6
//! ```

use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use videogrid_core::GridConfig;
use videogrid_replay::{load_config, replay};

/// Video grid event replay
#[derive(Parser, Debug)]
#[command(name = "videogrid-replay")]
#[command(about = "Replay a recorded call event script through the video grid")]
#[command(version)]
struct Args {
    /// JSON-lines event script
    script: PathBuf,

    /// Grid configuration (JSON). Missing fields use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Visible tile count at which preferences switch to low quality
    #[arg(long)]
    low_quality_threshold: Option<usize>,

    /// Maximum active speakers shown in featured view
    #[arg(long)]
    featured_tile_limit: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let mut config = match &args.config {
        Some(path) => load_config(BufReader::new(File::open(path)?))?,
        None => GridConfig::default(),
    };
    if let Some(threshold) = args.low_quality_threshold {
        config.low_quality_threshold = threshold;
    }
    if let Some(limit) = args.featured_tile_limit {
        config.featured_tile_limit = limit;
    }

    tracing::info!("Replaying {}", args.script.display());

    let script = BufReader::new(File::open(&args.script)?);
    let summary = replay(script, config)?;

    tracing::info!(
        events = summary.events,
        renders = summary.renders,
        submissions = summary.submissions,
        "Replay complete"
    );

    Ok(())
}
