//! Math helpers shared by the noise generators.

/// Floor an `f64` to an `i32`.
///
/// `as` truncates toward zero, which for negative non-integers lands one
/// above the floor; those are corrected down.
#[inline]
#[must_use]
pub fn floor(value: f64) -> i32 {
    let truncated = value as i32;
    if value < f64::from(truncated) {
        truncated - 1
    } else {
        truncated
    }
}
