//! Input/output operations and error handling

/// Command-line interface and conversion orchestration
pub mod cli;
/// Crate constants and the typed configuration document
pub mod configuration;
/// Scenario document loading and export
pub mod document;
/// Error types and the crate `Result` alias
pub mod error;
/// Floor-plan image decoding
pub mod image;
/// Stage progress reporting
pub mod progress;
