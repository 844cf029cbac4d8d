//! n-dimensional axis-aligned cube geometry
#![cfg_attr(feature = "strict", deny(warnings), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod geometry;
#[cfg(feature = "serde")]
mod io;
pub mod shapes;
pub mod traits;
pub mod types;

pub use geometry::{AxisAlignedCubeGeometry, CornerIter, CubeGeometryMap};
pub use types::AxisMask;
