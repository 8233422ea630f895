//! Scenario document structures for the simulator exchange format
//!
//! The output head carries the static model defaults the simulator expects;
//! field order is fixed by struct declaration order so repeated runs emit
//! byte-identical documents.

use crate::io::error::{ConversionError, Result};
use crate::model::cell::Cell;
use crate::model::kind::CellType;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use serde_json::ser::PrettyFormatter;

/// Complete scenario document: head plus the final cell collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDocument {
    /// Model metadata and defaults
    pub scenario: ScenarioHead,
    /// All cells of the model
    pub cells: Vec<Cell>,
}

/// Model metadata block of the output document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioHead {
    /// Grid dimensions; `[w, l]` for 2D models, `[w, l, h]` for 3D
    pub shape: Vec<u32>,
    /// Whether grid edges wrap around (always false for room models)
    pub wrapped: bool,
    /// Default cell delay discipline
    pub default_delay: String,
    /// Atomic model type instantiated per cell
    pub default_cell_type: String,
    /// State assumed for cells not listed in the collection
    pub default_state: DefaultState,
    /// Per-cell-type simulation parameters
    pub default_config: DefaultConfig,
    /// Neighborhood descriptors, copied verbatim from configuration
    pub neighborhood: Vec<Neighborhood>,
}

/// State assumed for every cell absent from the collection (open air)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultState {
    /// Activity counter; `-1` marks non-interactive cells
    pub counter: i64,
    /// Baseline CO2 concentration in parts per million
    pub concentration: Number,
    /// Cell type wire code
    #[serde(rename = "type")]
    pub kind: CellType,
}

/// Simulation parameters for the CO2 cell atomic model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Co2CellConfig {
    /// Concentration increase per occupant breath
    pub conc_increase: f64,
    /// Baseline concentration
    pub base: u32,
    /// Occupant respiration period in time steps
    pub resp_time: u32,
    /// Fixed concentration held at window cells
    pub window_conc: u32,
    /// Fixed concentration held at vent cells
    pub vent_conc: u32,
}

/// Per-cell-type parameter table of the output head
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultConfig {
    /// Parameters of the CO2 cell model
    #[serde(rename = "CO2_cell")]
    pub co2_cell: Co2CellConfig,
}

/// Neighborhood descriptor (type and range) for the cellular model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighborhood {
    /// Neighborhood type, e.g. "moore" or "von_neumann"
    #[serde(rename = "type")]
    pub kind: String,
    /// Neighborhood range in cells
    pub range: u32,
}

impl DefaultState {
    /// The fixed default state of the exchange format: open air at 500 ppm
    pub fn co2_air() -> Self {
        Self {
            counter: -1,
            concentration: Number::from(500),
            kind: CellType::Air,
        }
    }
}

impl Co2CellConfig {
    /// The fixed CO2 cell parameters of the exchange format
    pub const fn standard() -> Self {
        Self {
            conc_increase: 143.2,
            base: 500,
            resp_time: 5,
            window_conc: 400,
            vent_conc: 300,
        }
    }
}

impl ScenarioDocument {
    /// Encode the document as pretty-printed JSON with 4-space indentation
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)
            .map_err(|e| ConversionError::Encode { source: e })?;
        String::from_utf8(buffer).map_err(|e| ConversionError::InvalidConfiguration {
            reason: format!("encoded document is not UTF-8: {e}"),
        })
    }
}

/// Input 2D scenario document; unknown fields in the head are ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario2d {
    /// Head of the 2D document; only the shape is consumed
    pub scenario: Scenario2dHead,
    /// Cells of the 2D model
    pub cells: Vec<Cell>,
}

/// Head of an input 2D scenario document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario2dHead {
    /// Grid dimensions `[w, l]`
    pub shape: Vec<u32>,
}
