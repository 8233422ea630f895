//! Pixel analysis for floor-plan images

/// Colour tolerance snapping and colour-table lookup
pub mod classifier;

pub use classifier::PixelClassifier;
