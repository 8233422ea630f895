pub mod builder;
pub mod extrude;
