//! Tests for vertical extrusion and opening flanking

use cellgrid::io::configuration::{CounterConfig, HeightRules, ModelConfig, WindowSpan};
use cellgrid::model::{Cell, CellType};
use cellgrid::pipeline::extrude::{extrude, height_span};
use indicatif::ProgressBar;
use serde_json::Number;

fn model_config(height: u32, walls_only: bool) -> ModelConfig {
    ModelConfig {
        height,
        neighbourhood: "moore".to_string(),
        range: 1,
        walls_only,
        heights: HeightRules {
            door_top: 2,
            window: WindowSpan { bottom: 2, top: 3 },
            vent: 3,
            workstation: 1,
        },
        counter: CounterConfig {
            seed: 2,
            minimum: 0,
            maximum: 9,
        },
    }
}

fn cell_at(x: u32, y: u32, kind: CellType) -> Cell {
    Cell::new(vec![x, y], Number::from(500), kind, -1)
}

fn layers_of(cells: &[Cell], kind: CellType) -> Vec<u32> {
    cells
        .iter()
        .filter(|c| c.state.kind == kind)
        .map(|c| c.cell_id[2])
        .collect()
}

// Walls span the full interior height, leaving the ground and ceiling
// layers to floor/ceiling synthesis
#[test]
fn test_wall_spans_interior_height() {
    let model = model_config(5, false);
    let cells = [cell_at(2, 2, CellType::ImpermeableStructure)];
    let extruded = extrude(&cells, &model, &ProgressBar::hidden());

    assert_eq!(
        layers_of(&extruded, CellType::ImpermeableStructure),
        vec![1, 2, 3]
    );
    assert!(extruded.iter().all(|c| c.cell_id[2] != 0 && c.cell_id[2] != 4));
}

// Door openings are walled above and below the opening span
#[test]
fn test_door_is_flanked_by_walls() {
    let model = model_config(5, false);
    let cells = [cell_at(1, 1, CellType::Door)];
    let extruded = extrude(&cells, &model, &ProgressBar::hidden());

    assert_eq!(layers_of(&extruded, CellType::Door), vec![1, 2]);
    assert_eq!(
        layers_of(&extruded, CellType::ImpermeableStructure),
        vec![0, 3, 4]
    );
    // Flanking walls carry zero concentration and an inactive counter
    let filler = extruded
        .iter()
        .find(|c| c.state.kind == CellType::ImpermeableStructure)
        .unwrap();
    assert_eq!(filler.state.concentration, Number::from(0));
    assert_eq!(filler.state.counter, -1);
}

#[test]
fn test_window_is_flanked_by_walls() {
    let model = model_config(6, false);
    let cells = [cell_at(0, 0, CellType::Window)];
    let extruded = extrude(&cells, &model, &ProgressBar::hidden());

    assert_eq!(layers_of(&extruded, CellType::Window), vec![2, 3]);
    assert_eq!(
        layers_of(&extruded, CellType::ImpermeableStructure),
        vec![0, 1, 4, 5]
    );
}

// Vents, workstations, and sources occupy exactly one layer with no filler
#[test]
fn test_single_layer_types() {
    let model = model_config(5, false);
    let cells = [
        cell_at(0, 0, CellType::Vent),
        cell_at(1, 0, CellType::Workstation),
        cell_at(2, 0, CellType::Co2Source),
    ];
    let extruded = extrude(&cells, &model, &ProgressBar::hidden());

    assert_eq!(extruded.len(), 3);
    assert_eq!(layers_of(&extruded, CellType::Vent), vec![3]);
    assert_eq!(layers_of(&extruded, CellType::Workstation), vec![1]);
    assert_eq!(layers_of(&extruded, CellType::Co2Source), vec![1]);
}

// Air is a 2D-only marker and contributes nothing to the extruded model
#[test]
fn test_air_contributes_nothing() {
    let model = model_config(5, false);
    let cells = [cell_at(0, 0, CellType::Air)];
    assert!(extrude(&cells, &model, &ProgressBar::hidden()).is_empty());
}

#[test]
fn test_walls_only_drops_everything_else() {
    let model = model_config(5, true);
    let cells = [
        cell_at(0, 0, CellType::ImpermeableStructure),
        cell_at(1, 0, CellType::Door),
        cell_at(2, 0, CellType::Workstation),
    ];
    let extruded = extrude(&cells, &model, &ProgressBar::hidden());
    assert_eq!(extruded.len(), 3);
    assert!(
        extruded
            .iter()
            .all(|c| c.state.kind == CellType::ImpermeableStructure)
    );
    assert!(extruded.iter().all(|c| c.cell_id[0] == 0));
}

#[test]
fn test_height_spans() {
    let model = model_config(5, false);
    let rules = &model.heights;
    assert_eq!(
        height_span(CellType::ImpermeableStructure, 5, rules),
        Some((1, 3))
    );
    assert_eq!(height_span(CellType::Door, 5, rules), Some((1, 2)));
    assert_eq!(height_span(CellType::Window, 5, rules), Some((2, 3)));
    assert_eq!(height_span(CellType::Vent, 5, rules), Some((3, 3)));
    assert_eq!(height_span(CellType::Workstation, 5, rules), Some((1, 1)));
    assert_eq!(height_span(CellType::Co2Source, 5, rules), Some((1, 1)));
    assert_eq!(height_span(CellType::Air, 5, rules), None);
}

// Extruded cells keep their planar coordinates and original state
#[test]
fn test_extrusion_preserves_state() {
    let model = model_config(4, false);
    let source = Cell::new(vec![7, 9], Number::from(1800), CellType::Co2Source, -1);
    let extruded = extrude(&[source], &model, &ProgressBar::hidden());
    assert_eq!(extruded.len(), 1);
    assert_eq!(extruded[0].cell_id, vec![7, 9, 1]);
    assert_eq!(extruded[0].state.concentration, Number::from(1800));
}
