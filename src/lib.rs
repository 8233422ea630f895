//! Conversion toolchain for Cell-DEVS CO2 dispersion studies
//!
//! Turns a floor-plan image (or an existing 2D JSON scenario) into a 2D or 3D
//! cell-grid scenario document consumable by the downstream Cell-DEVS
//! simulator. Pixels are classified into typed cells, optionally rescaled to a
//! smaller resolution, extruded into a volumetric grid with type-dependent
//! height spans, and capped with synthesized floor and ceiling layers.

#![forbid(unsafe_code)]

/// Pixel classification against the configured colour table
pub mod analysis;
/// Input/output operations, configuration, and error handling
pub mod io;
/// Deterministic pseudo-random sequence for workstation counters
pub mod math;
/// Domain types: cell kinds, cells, and scenario documents
pub mod model;
/// The 2D-to-3D conversion pipeline stages
pub mod pipeline;

pub use io::error::{ConversionError, Result};
