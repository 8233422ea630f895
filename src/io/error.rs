//! Error types for configuration, asset loading, and conversion failures

use std::fmt;
use std::path::PathBuf;

/// Main error type for all conversion operations
#[derive(Debug)]
pub enum ConversionError {
    /// Failed to read the configuration file from the filesystem
    ConfigLoad {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON or misses required keys
    ConfigParse {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying JSON error with the precise field path
        source: serde_json::Error,
    },

    /// Configuration parsed but violates a structural requirement
    InvalidConfiguration {
        /// Description of the violated requirement
        reason: String,
    },

    /// Failed to decode the input floor-plan image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to read the input 2D scenario document
    ScenarioLoad {
        /// Path to the scenario file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Input 2D scenario document is not valid JSON or has the wrong shape
    ScenarioParse {
        /// Path to the scenario file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Target resolution exceeds the source resolution in some axis
    ///
    /// The rescaler only groups cells downward; no interpolation policy
    /// exists for upscaling.
    ScaleDirection {
        /// Source resolution (width, length)
        original: (u32, u32),
        /// Requested target resolution (width, length)
        target: (u32, u32),
    },

    /// Cell type code not in the closed type enumeration
    UnknownCellType {
        /// The unrecognized wire code
        code: i32,
    },

    /// Failed to write the output document
    Export {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to encode the output document as JSON
    Encode {
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigLoad { path, source } => {
                write!(
                    f,
                    "Failed to load configuration file '{}': {source}",
                    path.display()
                )
            }
            Self::ConfigParse { path, source } => {
                write!(
                    f,
                    "Invalid configuration file '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidConfiguration { reason } => {
                write!(f, "Invalid configuration: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ScenarioLoad { path, source } => {
                write!(
                    f,
                    "Failed to load scenario '{}': {source}",
                    path.display()
                )
            }
            Self::ScenarioParse { path, source } => {
                write!(f, "Invalid scenario '{}': {source}", path.display())
            }
            Self::ScaleDirection { original, target } => {
                write!(
                    f,
                    "Cannot rescale {}x{} to {}x{}: at least one input dimension \
                     is smaller than its output dimension (cannot extrapolate)",
                    original.0, original.1, target.0, target.1
                )
            }
            Self::UnknownCellType { code } => {
                write!(f, "Unknown cell type code {code}")
            }
            Self::Export { path, source } => {
                write!(
                    f,
                    "Failed to export scenario to '{}': {source}",
                    path.display()
                )
            }
            Self::Encode { source } => {
                write!(f, "Failed to encode scenario as JSON: {source}")
            }
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigLoad { source, .. }
            | Self::ScenarioLoad { source, .. }
            | Self::Export { source, .. } => Some(source),
            Self::ConfigParse { source, .. }
            | Self::ScenarioParse { source, .. }
            | Self::Encode { source } => Some(source),
            Self::ImageLoad { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for conversion results
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Create an invalid configuration error
pub fn invalid_configuration(reason: &impl ToString) -> ConversionError {
    ConversionError::InvalidConfiguration {
        reason: reason.to_string(),
    }
}
