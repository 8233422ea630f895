//! Mathematical utilities for the conversion pipeline

/// Deterministic pseudo-random sequence generation
pub mod random;

pub use random::RandomSequence;

/// Remap a grid coordinate by a scale factor, rounding half away from zero
///
/// Coordinates are non-negative, so this is effectively round-half-up. The
/// choice of tie-breaking rule decides which cells collide during rescale
/// grouping and is therefore fixed here rather than left to callers.
pub fn scale_coordinate(coordinate: u32, scale: f64) -> u32 {
    (f64::from(coordinate) * scale).round() as u32
}
