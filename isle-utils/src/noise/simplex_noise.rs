//! Single-octave 2D simplex noise.

use crate::math::floor;
use crate::noise::{GRADIENT, PermutationTable};

#[allow(clippy::unreadable_literal)]
const SQRT_3: f64 = 1.7320508075688772;
/// Skewing factor for 2D simplex: `0.5 * (sqrt(3) - 1)`
const F2: f64 = 0.5 * (SQRT_3 - 1.0);
/// Unskewing factor for 2D simplex: `(3 - sqrt(3)) / 6`
const G2: f64 = (3.0 - SQRT_3) / 6.0;

/// 2D simplex noise generator.
///
/// Evaluates gradient noise over triangular simplex cells, hashing each
/// cell corner through a seeded [`PermutationTable`] to pick its gradient
/// vector.
#[derive(Debug, Clone)]
pub struct SimplexNoise {
    perm: PermutationTable,
}

impl SimplexNoise {
    /// Creates a generator around an already-built permutation table.
    #[must_use]
    pub const fn new(perm: PermutationTable) -> Self {
        Self { perm }
    }

    /// Creates a generator with a freshly built table for `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(PermutationTable::new(seed))
    }

    /// Dot product of a gradient vector's 2D components with an offset.
    #[inline]
    fn dot(g: &[i32; 3], x: f64, y: f64) -> f64 {
        f64::from(g[0]) * x + f64::from(g[1]) * y
    }

    /// Corner contribution: decays radially within the corner's circle of
    /// influence, zero outside it.
    #[inline]
    fn corner_noise(gradient_index: usize, x: f64, y: f64) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            0.0
        } else {
            let t = t * t;
            t * t * Self::dot(&GRADIENT[gradient_index], x, y)
        }
    }

    /// Sample the noise at the given coordinates.
    ///
    /// Returns a value in approximately `[-1, 1]` (scaled by 70).
    #[must_use]
    pub fn get_value_2d(&self, xin: f64, yin: f64) -> f64 {
        // Skew input space to determine which simplex cell we're in
        let s = (xin + yin) * F2;
        let i = floor(xin + s);
        let j = floor(yin + s);

        // Unskew the cell origin back to (x, y) space
        let t = f64::from(i + j) * G2;
        let x0 = xin - (f64::from(i) - t);
        let y0 = yin - (f64::from(j) - t);

        // Determine which simplex triangle we're in
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + G2;
        let y1 = y0 - f64::from(j1) + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        // Hash the three corners to gradient indices; lattice coordinates
        // wrap every 256 units.
        let ii = i & 0xFF;
        let jj = j & 0xFF;
        let gi0 = (self.perm.get(ii + self.perm.get(jj)) % 12) as usize;
        let gi1 = (self.perm.get(ii + i1 + self.perm.get(jj + j1)) % 12) as usize;
        let gi2 = (self.perm.get(ii + 1 + self.perm.get(jj + 1)) % 12) as usize;

        let n0 = Self::corner_noise(gi0, x0, y0);
        let n1 = Self::corner_noise(gi1, x1, y1);
        let n2 = Self::corner_noise(gi2, x2, y2);

        70.0 * (n0 + n1 + n2)
    }
}

#[cfg(test)]
mod tests {
    use super::SimplexNoise;

    #[test]
    fn same_seed_is_deterministic() {
        let noise1 = SimplexNoise::from_seed(12345);
        let noise2 = SimplexNoise::from_seed(12345);

        for i in 0..10 {
            let x = f64::from(i) * 13.7;
            let y = f64::from(i) * 7.3;
            assert_eq!(
                noise1.get_value_2d(x, y).to_bits(),
                noise2.get_value_2d(x, y).to_bits()
            );
        }
    }

    #[test]
    fn values_stay_in_expected_range() {
        let noise = SimplexNoise::from_seed(42);
        for x in 0..20 {
            for y in 0..20 {
                let value = noise.get_value_2d(f64::from(x) * 0.17, f64::from(y) * 0.17);
                assert!(
                    (-1.5..=1.5).contains(&value),
                    "value out of range: {value}"
                );
            }
        }
    }

    #[test]
    fn has_spatial_variation() {
        let noise = SimplexNoise::from_seed(0);
        let values: Vec<f64> = (0..20)
            .map(|i| noise.get_value_2d(f64::from(i) * 50.0, f64::from(i) * 30.0))
            .collect();

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(max - min > 0.01, "noise should vary across space");
    }

    #[test]
    fn nearby_points_have_nearby_values() {
        let noise = SimplexNoise::from_seed(7);
        // Includes points straddling simplex cell boundaries
        for &(x, y) in &[(0.0, 0.0), (0.49999, 0.5), (3.7, -2.2), (100.0, 100.0)] {
            let a = noise.get_value_2d(x, y);
            let b = noise.get_value_2d(x + 1e-4, y);
            assert!(
                (a - b).abs() < 0.01,
                "discontinuity near ({x}, {y}): {a} vs {b}"
            );
        }
    }
}
