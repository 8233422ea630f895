//! Whole-file loading and export of scenario documents

use crate::io::error::{ConversionError, Result};
use crate::model::{Scenario2d, ScenarioDocument};
use std::path::Path;

/// Load an existing 2D scenario document
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid 2D
/// scenario document.
pub fn load_scenario_2d<P: AsRef<Path>>(path: P) -> Result<Scenario2d> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| ConversionError::ScenarioLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| ConversionError::ScenarioParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write the output document as pretty-printed JSON
///
/// Parent directories are created as needed; the write replaces any
/// existing file at the path.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn export_document<P: AsRef<Path>>(document: &ScenarioDocument, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = document.to_json_pretty()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ConversionError::Export {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    std::fs::write(path, json).map_err(|e| ConversionError::Export {
        path: path.to_path_buf(),
        source: e,
    })
}
