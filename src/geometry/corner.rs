//! Corner iterator
use crate::{geometry::AxisAlignedCubeGeometry, traits::Geometry, types::RealScalar};

/// Iterator over the corners of a cube
#[derive(Debug)]
pub struct CornerIter<'a, T: RealScalar> {
    geometry: &'a AxisAlignedCubeGeometry<T>,
    index: usize,
}

impl<'a, T: RealScalar> CornerIter<'a, T> {
    /// Create new
    pub fn new(geometry: &'a AxisAlignedCubeGeometry<T>) -> Self {
        Self { geometry, index: 0 }
    }
}

impl<'a, T: RealScalar> Iterator for CornerIter<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.index < self.geometry.corner_count() {
            let mut corner = vec![T::zero(); self.geometry.geometry_dimension()];
            self.geometry.corner(self.index, &mut corner);
            self.index += 1;
            Some(corner)
        } else {
            None
        }
    }
}
