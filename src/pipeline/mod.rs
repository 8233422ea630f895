//! The 2D-to-3D conversion pipeline
//!
//! Stages run in a fixed order: build (from image or 2D document), rescale
//! when the target resolution differs, extrude when the model height exceeds
//! one, synthesize floor and ceiling, then assemble the output document.
//! Each stage consumes the previous stage's cell collection and produces a
//! new one; no state is shared across stages.

/// Scenario document assembly from head metadata and cells
pub mod assemble;
/// 2D cell collection construction from images and documents
pub mod builder;
/// Extrusion of 2D cells into vertical columns
pub mod extrude;
/// Resolution-reducing remap with precedence conflict resolution
pub mod rescale;
/// Floor and ceiling layer synthesis
pub mod synthesis;

use crate::model::Cell;

/// Read a cell's planar coordinates
///
/// Cells in the pipeline always carry at least two position components;
/// missing components read as zero rather than panicking.
pub fn cell_xy(cell: &Cell) -> (u32, u32) {
    let x = cell.cell_id.first().copied().unwrap_or(0);
    let y = cell.cell_id.get(1).copied().unwrap_or(0);
    (x, y)
}
