//! Assembly of the output scenario document

use crate::io::configuration::{DEFAULT_CELL_TYPE, DEFAULT_DELAY, ModelConfig};
use crate::model::Cell;
use crate::model::scenario::{
    Co2CellConfig, DefaultConfig, DefaultState, Neighborhood, ScenarioDocument, ScenarioHead,
};

/// Combine grid dimensions, model metadata, and the final cell collection
///
/// The shape is `[width, length]` for flat models and `[width, length,
/// height]` once the model is extruded. Neighborhood type and range are
/// copied verbatim from the configuration.
pub fn assemble(
    width: u32,
    length: u32,
    model: &ModelConfig,
    cells: Vec<Cell>,
) -> ScenarioDocument {
    let mut shape = vec![width, length];
    if model.height > 1 {
        shape.push(model.height);
    }

    ScenarioDocument {
        scenario: ScenarioHead {
            shape,
            wrapped: false,
            default_delay: DEFAULT_DELAY.to_string(),
            default_cell_type: DEFAULT_CELL_TYPE.to_string(),
            default_state: DefaultState::co2_air(),
            default_config: DefaultConfig {
                co2_cell: Co2CellConfig::standard(),
            },
            neighborhood: vec![Neighborhood {
                kind: model.neighbourhood.clone(),
                range: model.range,
            }],
        },
        cells,
    }
}
