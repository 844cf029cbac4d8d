//! Cube geometry
mod axis_aligned;
mod corner;
mod geometry_map;

pub use axis_aligned::AxisAlignedCubeGeometry;
pub use corner::CornerIter;
pub use geometry_map::CubeGeometryMap;
