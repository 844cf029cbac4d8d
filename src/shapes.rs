//! Common cube geometries

mod cube;
pub use cube::{reference_cube, unit_cube, unit_interval, unit_square};
