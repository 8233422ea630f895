//! Crate constants and the strongly-typed conversion configuration
//!
//! The configuration document is trusted input: it is parsed once into typed
//! structures and any missing or malformed key is fatal, surfaced with the
//! precise field path from the JSON parser rather than a generic key error.

use crate::io::error::{ConversionError, Result, invalid_configuration};
use crate::model::CellType;
use serde::Deserialize;
use serde_json::Number;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Internal modulus of the random counter sequence
pub const DEFAULT_INTERNAL_LIMIT: u64 = 1000;

/// Maximum value of an 8-bit colour channel
pub const CHANNEL_MAX: u8 = 255;

/// File extensions treated as floor-plan images
pub const IMAGE_EXTENSIONS: [&str; 4] = ["bmp", "jpg", "jpeg", "png"];

/// File extension treated as a 2D scenario document
pub const SCENARIO_EXTENSION: &str = "json";

/// Default cell delay discipline emitted in the output head
pub const DEFAULT_DELAY: &str = "transport";

/// Atomic model name emitted in the output head
pub const DEFAULT_CELL_TYPE: &str = "CO2_cell";

/// Fully parsed conversion configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Input and output file paths
    pub files: FilesConfig,
    /// Image tolerances and the colour table
    pub image: ImageConfig,
    /// Model metadata and height rules
    pub model: ModelConfig,
}

/// Input and output paths of a conversion run
#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    /// Path to the floor-plan image or 2D scenario document
    pub input: PathBuf,
    /// Path the output document is written to
    pub output: PathBuf,
}

/// Image classification parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ImageConfig {
    /// Channel distance from 0 or 255 within which values snap exactly
    #[serde(rename = "colourTolerance")]
    pub colour_tolerance: u8,
    /// Alpha value at or below which a pixel counts as transparent
    #[serde(rename = "alphaTolerance")]
    pub alpha_tolerance: u8,
    /// Colour table mapping "R,G,B" keys to cell properties
    pub colours: HashMap<String, ColourProperties>,
}

/// Cell properties associated with one colour-table entry
#[derive(Debug, Clone, Deserialize)]
pub struct ColourProperties {
    /// Cell type assigned to pixels of this colour
    #[serde(rename = "type")]
    pub kind: CellType,
    /// Initial concentration assigned to pixels of this colour
    pub concentration: Number,
    /// Base activity counter; overridden for workstation cells
    pub counter: i64,
}

/// Model metadata and extrusion rules
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model height; 1 keeps the model 2D, greater values extrude
    pub height: u32,
    /// Neighborhood type copied into the output head
    pub neighbourhood: String,
    /// Neighborhood range copied into the output head
    pub range: u32,
    /// When set, only impermeable structure cells survive extrusion
    pub walls_only: bool,
    /// Per-type vertical placement bounds
    pub heights: HeightRules,
    /// Seed triple of the workstation counter sequence
    pub counter: CounterConfig,
}

/// Vertical placement bounds for types without a full-height span
#[derive(Debug, Clone, Deserialize)]
pub struct HeightRules {
    /// Highest layer a door opening reaches (doors start at layer 1)
    pub door_top: u32,
    /// Vertical extent of window openings
    pub window: WindowSpan,
    /// Single layer occupied by vent cells
    pub vent: u32,
    /// Single layer occupied by workstation and CO2-source cells
    pub workstation: u32,
}

/// Inclusive vertical extent of a window opening
#[derive(Debug, Clone, Deserialize)]
pub struct WindowSpan {
    /// Lowest layer of the opening
    pub bottom: u32,
    /// Highest layer of the opening
    pub top: u32,
}

/// Seed triple of the deterministic counter sequence
#[derive(Debug, Clone, Deserialize)]
pub struct CounterConfig {
    /// Generator seed
    pub seed: u64,
    /// Smallest counter value drawn
    pub minimum: u64,
    /// Largest counter value drawn
    pub maximum: u64,
}

impl Config {
    /// Load and validate a configuration document
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON,
    /// misses required keys, or violates a structural requirement.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConversionError::ConfigLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self =
            serde_json::from_str(&text).map_err(|e| ConversionError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check structural requirements not expressible in the type system
    ///
    /// # Errors
    ///
    /// Returns an error if the colour table does not designate exactly one
    /// background (air) colour or the counter range is inverted.
    pub fn validate(&self) -> Result<()> {
        self.image.air_entry()?;
        if self.model.counter.minimum > self.model.counter.maximum {
            return Err(invalid_configuration(&format!(
                "counter minimum {} exceeds maximum {}",
                self.model.counter.minimum, self.model.counter.maximum
            )));
        }
        Ok(())
    }
}

impl ImageConfig {
    /// The designated background colour entry
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly one colour-table entry carries the
    /// air type.
    pub fn air_entry(&self) -> Result<(&str, &ColourProperties)> {
        let mut air = None;
        for (key, properties) in &self.colours {
            if properties.kind == CellType::Air {
                if air.is_some() {
                    return Err(invalid_configuration(
                        &"colour table designates more than one air colour",
                    ));
                }
                air = Some((key.as_str(), properties));
            }
        }
        air.ok_or_else(|| {
            invalid_configuration(&"colour table designates no air colour")
        })
    }
}
