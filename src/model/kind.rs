//! The closed enumeration of cell types and their simulator wire codes

use crate::io::error::ConversionError;
use serde::{Deserialize, Serialize};

/// Semantic type of a grid cell
///
/// Serialized as the raw signed wire code the downstream simulator expects.
/// The discriminants drive extrusion height spans and rescale precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum CellType {
    /// Background cell; never emitted into a collection from image parsing
    Air,
    /// Pollutant source; highest rescale precedence
    Co2Source,
    /// Impassable boundary (wall, floor, ceiling)
    ImpermeableStructure,
    /// Opening with a bounded vertical extent starting at the floor
    Door,
    /// Opening with a bounded vertical extent away from the floor
    Window,
    /// Ventilation opening at a single fixed layer
    Vent,
    /// Occupant workstation at a single fixed layer
    Workstation,
}

impl CellType {
    /// Simulator wire code for this type
    pub const fn code(self) -> i32 {
        match self {
            Self::Air => -100,
            Self::Co2Source => -200,
            Self::ImpermeableStructure => -300,
            Self::Door => -400,
            Self::Window => -500,
            Self::Vent => -600,
            Self::Workstation => -700,
        }
    }

    /// Rescale precedence index; lower values win grouping conflicts
    ///
    /// Order, most important first: source, workstation, vent, door,
    /// window, wall, air.
    pub const fn precedence(self) -> usize {
        match self {
            Self::Co2Source => 0,
            Self::Workstation => 1,
            Self::Vent => 2,
            Self::Door => 3,
            Self::Window => 4,
            Self::ImpermeableStructure => 5,
            Self::Air => 6,
        }
    }
}

impl From<CellType> for i32 {
    fn from(kind: CellType) -> Self {
        kind.code()
    }
}

impl TryFrom<i32> for CellType {
    type Error = ConversionError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            -100 => Ok(Self::Air),
            -200 => Ok(Self::Co2Source),
            -300 => Ok(Self::ImpermeableStructure),
            -400 => Ok(Self::Door),
            -500 => Ok(Self::Window),
            -600 => Ok(Self::Vent),
            -700 => Ok(Self::Workstation),
            _ => Err(ConversionError::UnknownCellType { code }),
        }
    }
}
