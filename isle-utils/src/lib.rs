//! Shared utilities for the isle workspace: deterministic seeded random
//! sources, math helpers, and the simplex noise primitives driving island
//! generation.

pub mod math;
pub mod noise;
pub mod random;
