//! Floor and ceiling layer synthesis
//!
//! After extrusion, every `(x, y)` position must be occupied at the ground
//! and ceiling layers. Positions already filled (walls, door/window flanking)
//! are left alone; the rest receive impermeable structure cells.

use crate::model::Cell;
use indicatif::ProgressBar;
use std::collections::HashSet;

/// Fill unoccupied ground and ceiling positions with wall cells
///
/// Synthesized cells are appended after the existing collection in row-major
/// `(x, y)` sweep order, keeping output diff-stable across runs.
pub fn add_floor_ceiling(
    mut cells: Vec<Cell>,
    width: u32,
    length: u32,
    height: u32,
    bar: &ProgressBar,
) -> Vec<Cell> {
    let top = height.saturating_sub(1);

    let mut occupied: HashSet<(u32, u32, u32)> = HashSet::new();
    for cell in &cells {
        if let [x, y, z] = cell.cell_id[..] {
            if z == 0 || z == top {
                occupied.insert((x, y, z));
            }
        }
    }

    for x in 0..width {
        for y in 0..length {
            bar.inc(1);
            if !occupied.contains(&(x, y, 0)) {
                cells.push(Cell::wall(vec![x, y, 0]));
            }
            if !occupied.contains(&(x, y, top)) {
                cells.push(Cell::wall(vec![x, y, top]));
            }
        }
    }
    cells
}
