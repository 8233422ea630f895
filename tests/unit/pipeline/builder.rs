//! Tests for 2D cell collection construction

use cellgrid::analysis::PixelClassifier;
use cellgrid::io::configuration::{ColourProperties, ImageConfig};
use cellgrid::io::image::PixelRaster;
use cellgrid::math::RandomSequence;
use cellgrid::model::{CellType, Scenario2d};
use cellgrid::pipeline::builder;
use indicatif::ProgressBar;
use ndarray::Array3;
use serde_json::{Number, json};
use std::collections::HashMap;

fn image_config() -> ImageConfig {
    let mut colours = HashMap::new();
    colours.insert(
        "255,255,255".to_string(),
        ColourProperties {
            kind: CellType::Air,
            concentration: Number::from(500),
            counter: -1,
        },
    );
    colours.insert(
        "0,0,0".to_string(),
        ColourProperties {
            kind: CellType::ImpermeableStructure,
            concentration: Number::from(500),
            counter: -1,
        },
    );
    colours.insert(
        "0,255,0".to_string(),
        ColourProperties {
            kind: CellType::Workstation,
            concentration: Number::from(500),
            counter: 0,
        },
    );
    ImageConfig {
        colour_tolerance: 10,
        alpha_tolerance: 50,
        colours,
    }
}

// Raster layout is (length, width, channel); pixels default to opaque black
fn raster_with(pixels: &[(u32, u32, [u8; 4])], width: u32, length: u32) -> PixelRaster {
    let mut data = Array3::zeros((length as usize, width as usize, 4));
    for y in 0..length {
        for x in 0..width {
            // White background unless overridden below
            for channel in 0..3 {
                data[(y as usize, x as usize, channel)] = 255;
            }
            data[(y as usize, x as usize, 3)] = 255;
        }
    }
    for &(x, y, values) in pixels {
        for (channel, &value) in values.iter().enumerate() {
            data[(y as usize, x as usize, channel)] = value;
        }
    }
    PixelRaster::from_channels(data, false)
}

#[test]
fn test_air_pixels_are_skipped() {
    let config = image_config();
    let classifier = PixelClassifier::new(&config, false).unwrap();
    let mut counters = RandomSequence::new(2, 0, 9);
    let raster = raster_with(&[(1, 1, [0, 0, 0, 255])], 3, 3);

    let grid = builder::from_image(&raster, &classifier, &mut counters, &ProgressBar::hidden());
    assert_eq!(grid.width, 3);
    assert_eq!(grid.length, 3);
    assert_eq!(grid.cells.len(), 1);
    assert_eq!(grid.cells[0].cell_id, vec![1, 1]);
    assert_eq!(grid.cells[0].state.kind, CellType::ImpermeableStructure);
    assert_eq!(grid.cells[0].state.counter, -1);
}

// Workstations draw counters from the shared sequence in column-major
// scan order (x outer, y inner); seed 2 over [0, 9] yields 4 then 7
#[test]
fn test_workstation_counters_follow_scan_order() {
    let config = image_config();
    let classifier = PixelClassifier::new(&config, false).unwrap();
    let mut counters = RandomSequence::new(2, 0, 9);
    let raster = raster_with(
        &[(0, 1, [0, 255, 0, 255]), (1, 0, [0, 255, 0, 255])],
        2,
        2,
    );

    let grid = builder::from_image(&raster, &classifier, &mut counters, &ProgressBar::hidden());
    assert_eq!(grid.cells.len(), 2);
    // (0, 1) is visited before (1, 0) when x is the outer loop
    assert_eq!(grid.cells[0].cell_id, vec![0, 1]);
    assert_eq!(grid.cells[0].state.counter, 4);
    assert_eq!(grid.cells[1].cell_id, vec![1, 0]);
    assert_eq!(grid.cells[1].state.counter, 7);
}

#[test]
fn test_from_scenario_takes_cells_verbatim() {
    let document: Scenario2d = serde_json::from_value(json!({
        "scenario": { "shape": [6, 4] },
        "cells": [
            { "cell_id": [2, 3], "state": { "concentration": 500, "type": -400, "counter": -1 } }
        ]
    }))
    .unwrap();

    let grid = builder::from_scenario(document).unwrap();
    assert_eq!(grid.width, 6);
    assert_eq!(grid.length, 4);
    assert_eq!(grid.cells.len(), 1);
    assert_eq!(grid.cells[0].state.kind, CellType::Door);
}

#[test]
fn test_from_scenario_rejects_short_shape() {
    let document: Scenario2d = serde_json::from_value(json!({
        "scenario": { "shape": [6] },
        "cells": []
    }))
    .unwrap();
    assert!(builder::from_scenario(document).is_err());
}
