//! Tests for the cell exchange representation

use cellgrid::model::{Cell, CellType};
use serde_json::{Number, json};

#[test]
fn test_wall_constructor() {
    let wall = Cell::wall(vec![3, 4, 0]);
    assert_eq!(wall.cell_id, vec![3, 4, 0]);
    assert_eq!(wall.state.kind, CellType::ImpermeableStructure);
    assert_eq!(wall.state.concentration, Number::from(0));
    assert_eq!(wall.state.counter, -1);
}

// The serialized shape must match the simulator exchange format exactly
#[test]
fn test_serialized_shape() {
    let cell = Cell::new(vec![1, 2], Number::from(500), CellType::Workstation, 42);
    let value = serde_json::to_value(&cell).unwrap();
    assert_eq!(
        value,
        json!({
            "cell_id": [1, 2],
            "state": {
                "concentration": 500,
                "type": -700,
                "counter": 42
            }
        })
    );
}

#[test]
fn test_deserialize_ignores_unknown_state_fields() {
    let cell: Cell = serde_json::from_value(json!({
        "cell_id": [0, 0],
        "state": {
            "concentration": 500,
            "type": -300,
            "counter": -1,
            "extra": true
        }
    }))
    .unwrap();
    assert_eq!(cell.state.kind, CellType::ImpermeableStructure);
}

// Integer concentrations must not gain a fractional part on round-trip
#[test]
fn test_concentration_round_trips_exactly() {
    let cell = Cell::new(vec![0, 0], Number::from(500), CellType::Vent, -1);
    let text = serde_json::to_string(&cell).unwrap();
    assert!(text.contains("\"concentration\":500"));

    let fractional = Cell::new(
        vec![0, 0],
        Number::from_f64(432.15).unwrap(),
        CellType::Vent,
        -1,
    );
    let text = serde_json::to_string(&fractional).unwrap();
    assert!(text.contains("\"concentration\":432.15"));
}
