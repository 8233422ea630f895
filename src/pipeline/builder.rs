//! Construction of the 2D cell collection
//!
//! Images are scanned column-major (x outer, y inner); the scan order is part
//! of the reproducibility contract because the shared counter sequence
//! advances once per workstation cell encountered.

use crate::analysis::PixelClassifier;
use crate::io::error::{Result, invalid_configuration};
use crate::io::image::PixelRaster;
use crate::math::RandomSequence;
use crate::model::{Cell, CellType, Scenario2d};
use indicatif::ProgressBar;

/// A 2D cell collection with its grid dimensions
#[derive(Debug, Clone)]
pub struct Grid2d {
    /// Grid width (x extent)
    pub width: u32,
    /// Grid length (y extent)
    pub length: u32,
    /// The typed cells; air positions are simply absent
    pub cells: Vec<Cell>,
}

/// Build a 2D cell collection from a floor-plan raster
///
/// Air-classified pixels (background, transparent, or unknown colours) are
/// skipped. Workstation cells draw their activity counter from `counters`
/// in scan order; every other type carries the colour table's base counter.
pub fn from_image(
    raster: &PixelRaster,
    classifier: &PixelClassifier<'_>,
    counters: &mut RandomSequence,
    bar: &ProgressBar,
) -> Grid2d {
    let mut cells = Vec::new();
    for x in 0..raster.width() {
        for y in 0..raster.length() {
            bar.inc(1);
            let properties = classifier.classify(raster.pixel(x, y), raster.has_alpha());
            if properties.kind == CellType::Air {
                continue;
            }
            let counter = if properties.kind == CellType::Workstation {
                counters.next() as i64
            } else {
                properties.counter
            };
            cells.push(Cell::new(
                vec![x, y],
                properties.concentration.clone(),
                properties.kind,
                counter,
            ));
        }
    }
    Grid2d {
        width: raster.width(),
        length: raster.length(),
        cells,
    }
}

/// Take the 2D cell collection of an existing scenario document
///
/// # Errors
///
/// Returns an error if the document's shape has fewer than two components.
pub fn from_scenario(document: Scenario2d) -> Result<Grid2d> {
    let width = document.scenario.shape.first().copied();
    let length = document.scenario.shape.get(1).copied();
    match (width, length) {
        (Some(width), Some(length)) => Ok(Grid2d {
            width,
            length,
            cells: document.cells,
        }),
        _ => Err(invalid_configuration(
            &"2D scenario shape must have two components",
        )),
    }
}
