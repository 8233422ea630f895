//! Extrusion of 2D cells into vertical columns
//!
//! Each 2D cell contributes a column of 3D cells according to its type's
//! height span. Door and window openings are walled above and below their
//! span; types without a span are 2D-only markers and contribute nothing.

use crate::io::configuration::{HeightRules, ModelConfig};
use crate::model::{Cell, CellType};
use crate::pipeline::cell_xy;
use indicatif::ProgressBar;

/// Inclusive vertical span `[z_low, z_high]` for a cell type
///
/// `None` means the type does not appear in the extruded model. Walls span
/// the full interior height; the ground and ceiling layers are synthesized
/// separately.
pub const fn height_span(
    kind: CellType,
    height: u32,
    rules: &HeightRules,
) -> Option<(u32, u32)> {
    match kind {
        CellType::ImpermeableStructure => Some((1, height.saturating_sub(2))),
        CellType::Door => Some((1, rules.door_top)),
        CellType::Window => Some((rules.window.bottom, rules.window.top)),
        CellType::Vent => Some((rules.vent, rules.vent)),
        CellType::Workstation | CellType::Co2Source => {
            Some((rules.workstation, rules.workstation))
        }
        CellType::Air => None,
    }
}

/// Map every 2D cell to its 3D column
///
/// With the model's `walls_only` flag set, cells of any other type are
/// dropped before extrusion.
pub fn extrude(cells: &[Cell], model: &ModelConfig, bar: &ProgressBar) -> Vec<Cell> {
    let mut extruded = Vec::new();
    for cell in cells {
        bar.inc(1);
        if model.walls_only && cell.state.kind != CellType::ImpermeableStructure {
            continue;
        }

        let span = height_span(cell.state.kind, model.height, &model.heights);
        let (x, y) = cell_xy(cell);
        for z in 0..model.height {
            let inside = match span {
                Some((low, high)) => z >= low && z <= high,
                None => false,
            };
            if inside {
                extruded.push(Cell::new(
                    vec![x, y, z],
                    cell.state.concentration.clone(),
                    cell.state.kind,
                    cell.state.counter,
                ));
            } else if matches!(cell.state.kind, CellType::Door | CellType::Window) {
                // Openings must be walled above and below their span
                extruded.push(Cell::wall(vec![x, y, z]));
            }
        }
    }
    extruded
}
