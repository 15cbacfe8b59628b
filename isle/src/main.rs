//! Command-line island heightmap generator.
//!
//! Builds a seeded simplex-noise island and writes it as a space-separated
//! text grid, one line per row.

mod cli;

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use isle_core::worldgen::{GeneratorSettings, IslandGenerator};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // The core never reads the clock; an unset seed is derived here, once.
    let seed = args.seed.unwrap_or_else(seed_from_time);
    let (lower_bound, upper_bound) = args.bounds();

    let mut settings = GeneratorSettings::new(args.size, seed);
    settings.lower_bound = lower_bound;
    settings.upper_bound = upper_bound;

    info!(
        size = args.size,
        seed, lower_bound, upper_bound, "generating island heightmap"
    );

    let generator = IslandGenerator::new(settings)?;
    let heightmap = generator.generate();
    heightmap
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(path = %args.output.display(), "heightmap written");
    Ok(())
}

/// Wall-clock fallback seed: nanoseconds since the UNIX epoch, truncated
/// to 64 bits.
fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
