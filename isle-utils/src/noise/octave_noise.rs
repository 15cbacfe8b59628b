//! Fractal (multi-octave) noise composition.

use crate::noise::SimplexNoise;

/// Multi-octave simplex noise with a fixed set of run parameters.
///
/// Each octave doubles the frequency and multiplies the amplitude by
/// `persistence`; the accumulated total is divided by the sum of all
/// amplitudes used, keeping the result normalized to roughly `[-1, 1]`
/// for any octave count.
#[derive(Debug, Clone)]
pub struct OctaveNoise {
    noise: SimplexNoise,
    octaves: u32,
    persistence: f64,
    scale: f64,
}

impl OctaveNoise {
    /// Bundles a noise source with its run-constant octave parameters.
    ///
    /// `octaves` must be at least 1 and `scale` positive; both are
    /// validated at the configuration boundary before any sampling starts.
    #[must_use]
    pub const fn new(noise: SimplexNoise, octaves: u32, persistence: f64, scale: f64) -> Self {
        Self {
            noise,
            octaves,
            persistence,
            scale,
        }
    }

    /// Sample the fractal sum at the given coordinates.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = self.scale;
        let mut amplitude = 1.0;

        // Track the largest possible amplitude so the sum can be brought
        // back to [-1, 1] regardless of octave count.
        let mut max_amplitude = 0.0;

        for _ in 0..self.octaves {
            total += self.noise.get_value_2d(x * frequency, y * frequency) * amplitude;
            frequency *= 2.0;
            max_amplitude += amplitude;
            amplitude *= self.persistence;
        }

        total / max_amplitude
    }

    /// Sample and remap linearly into `[lower, upper]`.
    ///
    /// The remap assumes the fractal sum is centered in `[-1, 1]` and does
    /// not clamp, so extreme persistence/octave combinations can overshoot
    /// the bounds slightly.
    #[must_use]
    pub fn sample_scaled(&self, x: f64, y: f64, lower: f64, upper: f64) -> f64 {
        self.sample(x, y) * (upper - lower) / 2.0 + (upper + lower) / 2.0
    }
}
