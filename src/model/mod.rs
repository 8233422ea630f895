//! Domain types shared by every pipeline stage

/// Cell and cell-state structures
pub mod cell;
/// The closed cell-type enumeration
pub mod kind;
/// Scenario document structures and JSON encoding
pub mod scenario;

pub use cell::{Cell, CellState};
pub use kind::CellType;
pub use scenario::{Scenario2d, ScenarioDocument};
