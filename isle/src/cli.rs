//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "isle")]
#[command(about = "Seeded simplex-noise island heightmap generator", long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Args {
    /// Width and height of the square grid, in cells
    pub size: u32,

    /// Output file for the space-separated height grid
    pub output: PathBuf,

    /// World seed; derived from the current time when omitted
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Lower bound of the output height range
    #[arg(long, value_name = "HEIGHT", requires = "upper_bound")]
    pub lower_bound: Option<f64>,

    /// Upper bound of the output height range
    #[arg(long, value_name = "HEIGHT", requires = "lower_bound")]
    pub upper_bound: Option<f64>,
}

impl Args {
    /// Output bounds, defaulting to `[0, 1]` when not given.
    ///
    /// clap enforces that the bounds are either both present or both
    /// absent.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        match (self.lower_bound, self.upper_bound) {
            (Some(lower), Some(upper)) => (lower, upper),
            _ => (0.0, 1.0),
        }
    }
}
