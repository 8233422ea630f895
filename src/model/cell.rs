//! Cell representation matching the simulator exchange format

use crate::model::kind::CellType;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Mutable state carried by every cell
///
/// `concentration` is kept as a raw JSON number so integer configuration
/// values round-trip without picking up a fractional part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellState {
    /// CO2 concentration in parts per million
    pub concentration: Number,
    /// Semantic cell type, serialized as its wire code
    #[serde(rename = "type")]
    pub kind: CellType,
    /// Activity-start offset; `-1` for non-interactive types
    pub counter: i64,
}

/// Atomic unit of the simulated space at a 2D or 3D grid position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Grid position, `[x, y]` before extrusion and `[x, y, z]` after
    pub cell_id: Vec<u32>,
    /// The cell's state
    pub state: CellState,
}

impl Cell {
    /// Create a cell at the given position
    pub const fn new(cell_id: Vec<u32>, concentration: Number, kind: CellType, counter: i64) -> Self {
        Self {
            cell_id,
            state: CellState {
                concentration,
                kind,
                counter,
            },
        }
    }

    /// Create an impermeable structure cell with zero concentration
    ///
    /// Used for door/window flanking and floor/ceiling synthesis.
    pub fn wall(cell_id: Vec<u32>) -> Self {
        Self::new(cell_id, Number::from(0), CellType::ImpermeableStructure, -1)
    }
}
