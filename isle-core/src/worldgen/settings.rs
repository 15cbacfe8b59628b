//! Generator configuration and boundary validation.

use thiserror::Error;

/// Default octave count for island generation.
pub const DEFAULT_OCTAVES: u32 = 16;
/// Default per-octave amplitude decay.
pub const DEFAULT_PERSISTENCE: f64 = 0.5;
/// Base frequency factor; gives a good noise distribution at the
/// reference grid size.
const SCALE_FACTOR: f64 = 0.0033;
/// Grid size at which `SCALE_FACTOR` applies unscaled.
const REFERENCE_SIZE: f64 = 1024.0;
/// Margin, in cells, by which the falloff radius stays inside the grid
/// border.
pub(crate) const FALLOFF_MARGIN: f64 = 10.0;
/// Smallest grid size whose falloff margin `size/2 - 10` stays positive.
pub const MIN_GRID_SIZE: u32 = 21;

/// A rejected generator configuration.
///
/// Raised once at the boundary, before any cell is evaluated; the noise
/// math itself has no failure paths.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The radial falloff divides by `size/2 - 10`, which must stay
    /// positive.
    #[error("grid size {0} is too small, the minimum is {MIN_GRID_SIZE}")]
    GridTooSmall(u32),
    /// Zero octaves would leave the amplitude normalizer at zero.
    #[error("octave count must be at least 1")]
    NoOctaves,
}

/// Run-constant parameters for one generated island.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    /// Width and height of the square grid, in cells.
    pub size: u32,
    /// World seed; equal seeds reproduce the island exactly.
    pub seed: u64,
    /// Number of noise octaves to accumulate.
    pub octaves: u32,
    /// Per-octave amplitude decay factor.
    pub persistence: f64,
    /// Lower bound of the output value range.
    pub lower_bound: f64,
    /// Upper bound of the output value range.
    pub upper_bound: f64,
}

impl GeneratorSettings {
    /// Settings for a `size`x`size` island with the default noise shape
    /// and output range `[0, 1]`.
    #[must_use]
    pub const fn new(size: u32, seed: u64) -> Self {
        Self {
            size,
            seed,
            octaves: DEFAULT_OCTAVES,
            persistence: DEFAULT_PERSISTENCE,
            lower_bound: 0.0,
            upper_bound: 1.0,
        }
    }

    /// Base noise frequency for this grid size.
    ///
    /// Scales inversely with the grid, so the island keeps its
    /// proportions at any resolution.
    #[must_use]
    pub fn frequency_scale(&self) -> f64 {
        REFERENCE_SIZE / f64::from(self.size) * SCALE_FACTOR
    }

    /// Checks the preconditions the generation math relies on.
    ///
    /// Persistence outside `(0, 1]` flattens or roughens the signal but
    /// is not rejected.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.size < MIN_GRID_SIZE {
            return Err(SettingsError::GridTooSmall(self.size));
        }
        if self.octaves == 0 {
            return Err(SettingsError::NoOctaves);
        }
        Ok(())
    }
}
