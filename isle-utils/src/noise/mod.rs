//! Noise generation primitives for the island generator.
//!
//! - [`PermutationTable`] - seeded lattice-coordinate hash table
//! - [`SimplexNoise`] - single-octave 2D simplex noise
//! - [`OctaveNoise`] - fractal multi-octave composition with range remapping

mod octave_noise;
mod permutation;
mod simplex_noise;

pub use octave_noise::OctaveNoise;
pub use permutation::PermutationTable;
pub use simplex_noise::SimplexNoise;

/// Gradient vectors for the simplex corner contributions.
///
/// Twelve directions with components in `{-1, 0, 1}`; 2D sampling uses
/// the first two components of each vector.
pub(crate) const GRADIENT: [[i32; 3]; 12] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
];
