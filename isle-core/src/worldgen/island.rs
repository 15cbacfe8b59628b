//! Island generator: octave noise shaped by a radial falloff mask.

use isle_utils::noise::{OctaveNoise, SimplexNoise};

use crate::heightmap::Heightmap;
use crate::worldgen::settings::{FALLOFF_MARGIN, GeneratorSettings, SettingsError};

/// Squared normalized distance of `(x, y)` from the grid center.
///
/// The distance to the center `(size/2, size/2)` is divided by the margin
/// radius `size/2 - 10` and squared: near 0 at the center, 1 at the
/// margin radius, growing without bound beyond it. The value is
/// deliberately unclamped; callers apply `max(0, 1 - falloff)` as the
/// island mask. [`GeneratorSettings::validate`] keeps the margin radius
/// positive.
#[must_use]
pub fn radial_falloff(x: u32, y: u32, size: u32) -> f64 {
    let half = f64::from(size) * 0.5;
    let distance_x = f64::from(x) - half;
    let distance_y = f64::from(y) - half;
    let distance = (distance_x * distance_x + distance_y * distance_y).sqrt();
    let max_width = half - FALLOFF_MARGIN;
    let delta = distance / max_width;
    delta * delta
}

/// Generates island heightmaps from a validated configuration.
///
/// Every cell is a pure function of its coordinates, the immutable
/// permutation table, and the run-constant settings; nothing is mutated
/// after construction, so cells could be evaluated in any order (or, by a
/// future caller, concurrently) with read-only sharing alone.
#[derive(Debug, Clone)]
pub struct IslandGenerator {
    noise: OctaveNoise,
    settings: GeneratorSettings,
}

impl IslandGenerator {
    /// Validates `settings` and builds the noise stack for them.
    pub fn new(settings: GeneratorSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let noise = OctaveNoise::new(
            SimplexNoise::from_seed(settings.seed),
            settings.octaves,
            settings.persistence,
            settings.frequency_scale(),
        );
        Ok(Self { noise, settings })
    }

    /// The validated settings this generator was built from.
    #[must_use]
    pub const fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Height of a single cell: scaled octave noise dampened by the
    /// falloff mask.
    #[must_use]
    pub fn sample(&self, x: u32, y: u32) -> f64 {
        let height = self.noise.sample_scaled(
            f64::from(x),
            f64::from(y),
            self.settings.lower_bound,
            self.settings.upper_bound,
        );
        let falloff = radial_falloff(x, y, self.settings.size);
        height * (1.0 - falloff).max(0.0)
    }

    /// Evaluates every cell sequentially into a heightmap, row by row.
    #[must_use]
    pub fn generate(&self) -> Heightmap {
        let size = self.settings.size;
        let mut values = Vec::with_capacity(size as usize * size as usize);
        for x in 0..size {
            for y in 0..size {
                values.push(self.sample(x, y));
            }
        }

        tracing::debug!(size, seed = self.settings.seed, "island heightmap generated");
        Heightmap::from_values(size, values)
    }
}
