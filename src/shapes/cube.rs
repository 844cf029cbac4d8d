//! Cube geometries

use crate::{geometry::AxisAlignedCubeGeometry, types::RealScalar};

/// Create a unit interval geometry
///
/// The unit interval is the interval between (0,) and (1,)
pub fn unit_interval<T: RealScalar>() -> AxisAlignedCubeGeometry<T> {
    reference_cube(1)
}

/// Create a unit square geometry
///
/// The unit square is the square with corners at (0,0), (1,0), (0,1) and (1,1)
pub fn unit_square<T: RealScalar>() -> AxisAlignedCubeGeometry<T> {
    reference_cube(2)
}

/// Create a unit cube geometry
///
/// The unit cube is the cube with corners at (0,0,0), (1,0,0), (0,1,0), (1,1,0), (0,0,1),
/// (1,0,1), (0,1,1) and (1,1,1)
pub fn unit_cube<T: RealScalar>() -> AxisAlignedCubeGeometry<T> {
    reference_cube(3)
}

/// Create the geometry of the reference cube of dimension `dim`
pub fn reference_cube<T: RealScalar>(dim: usize) -> AxisAlignedCubeGeometry<T> {
    AxisAlignedCubeGeometry::new(&vec![T::zero(); dim], &vec![T::one(); dim])
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::Geometry;

    #[test]
    fn test_unit_interval() {
        let g = unit_interval::<f64>();
        assert_eq!(g.topology_dimension(), 1);
        assert_eq!(g.volume(), 1.0);
    }

    #[test]
    fn test_unit_square() {
        let g = unit_square::<f64>();
        assert_eq!(g.topology_dimension(), 2);
        assert_eq!(g.volume(), 1.0);
        assert_eq!(g.corner_count(), 4);
    }

    #[test]
    fn test_unit_cube() {
        let g = unit_cube::<f64>();
        assert_eq!(g.topology_dimension(), 3);
        assert_eq!(g.volume(), 1.0);
        assert_eq!(g.corner_count(), 8);
    }

    #[test]
    fn test_reference_cube() {
        for dim in 0..6 {
            let g = reference_cube::<f64>(dim);
            assert_eq!(g.topology_dimension(), dim);
            assert_eq!(g.geometry_dimension(), dim);
            assert_eq!(g.volume(), 1.0);
        }
    }
}
