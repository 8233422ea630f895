//! Resolution-reducing remap of a 2D cell collection
//!
//! Cells are remapped to the target resolution and grouped by their new
//! coordinate; each group keeps exactly one representative, chosen by the
//! fixed type precedence. Upscaling is undefined and rejected.

use crate::io::error::{ConversionError, Result};
use crate::math::scale_coordinate;
use crate::model::Cell;
use crate::pipeline::cell_xy;
use std::collections::HashMap;

/// Remap a 2D cell collection from `original` to the smaller `target` grid
///
/// Scale factors are `(target - 1) / original` per axis; the denominator is
/// deliberately the full original extent, preserved for bit-compatible
/// output with the reference tool. Groups keep first-encounter order, and
/// precedence ties within a group keep the earlier cell.
///
/// # Errors
///
/// Returns an error if either target dimension exceeds its source dimension;
/// there is no extrapolation policy.
pub fn rescale(
    cells: Vec<Cell>,
    original: (u32, u32),
    target: (u32, u32),
) -> Result<Vec<Cell>> {
    if original.0 < target.0 || original.1 < target.1 {
        return Err(ConversionError::ScaleDirection { original, target });
    }

    let scale_x = f64::from(target.0.saturating_sub(1)) / f64::from(original.0);
    let scale_y = f64::from(target.1.saturating_sub(1)) / f64::from(original.1);

    let mut group_index: HashMap<(u32, u32), usize> = HashMap::new();
    let mut groups: Vec<Vec<Cell>> = Vec::new();

    for mut cell in cells {
        let (x, y) = cell_xy(&cell);
        let scaled = (scale_coordinate(x, scale_x), scale_coordinate(y, scale_y));
        if let Some(component) = cell.cell_id.first_mut() {
            *component = scaled.0;
        }
        if let Some(component) = cell.cell_id.get_mut(1) {
            *component = scaled.1;
        }

        match group_index.get(&scaled) {
            Some(&index) => {
                if let Some(group) = groups.get_mut(index) {
                    group.push(cell);
                }
            }
            None => {
                group_index.insert(scaled, groups.len());
                groups.push(vec![cell]);
            }
        }
    }

    Ok(groups.into_iter().filter_map(best_cell).collect())
}

/// Pick the cell that best represents a group
///
/// The first cell whose type has a strictly lower precedence index wins;
/// later cells of equal precedence never displace it.
fn best_cell(group: Vec<Cell>) -> Option<Cell> {
    group.into_iter().reduce(|best, cell| {
        if cell.state.kind.precedence() < best.state.kind.precedence() {
            cell
        } else {
            best
        }
    })
}
