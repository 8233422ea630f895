//! Tests for error display and classification

use cellgrid::io::error::{ConversionError, invalid_configuration};
use std::error::Error;
use std::path::PathBuf;

#[test]
fn test_scale_direction_message_names_both_resolutions() {
    let error = ConversionError::ScaleDirection {
        original: (10, 20),
        target: (30, 20),
    };
    let message = error.to_string();
    assert!(message.contains("10x20"));
    assert!(message.contains("30x20"));
    assert!(message.contains("cannot extrapolate"));
}

#[test]
fn test_unknown_cell_type_message() {
    let error = ConversionError::UnknownCellType { code: -950 };
    assert!(error.to_string().contains("-950"));
}

#[test]
fn test_invalid_configuration_helper() {
    let error = invalid_configuration(&"no air colour");
    assert!(error.to_string().contains("no air colour"));
}

#[test]
fn test_load_errors_carry_their_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error = ConversionError::ConfigLoad {
        path: PathBuf::from("config.json"),
        source: io_error,
    };
    assert!(error.to_string().contains("config.json"));
    assert!(error.source().is_some());
}

#[test]
fn test_scale_direction_has_no_source() {
    let error = ConversionError::ScaleDirection {
        original: (2, 2),
        target: (4, 4),
    };
    assert!(error.source().is_none());
}
