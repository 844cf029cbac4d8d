//! Cube geometry
use crate::types::RealScalar;
use ndelement::types::ReferenceCellType;

/// The geometry of an axis-aligned cube
pub trait Geometry {
    /// Scalar type
    type T: RealScalar;

    /// Corner iterator
    type CornerIter<'a>: Iterator<Item = Vec<Self::T>>
    where
        Self: 'a;

    /// The reference cell type of this cube
    fn cell_type(&self) -> ReferenceCellType;

    /// The topological dimension of the cube
    fn topology_dimension(&self) -> usize;

    /// The geometric dimension of the physical space
    fn geometry_dimension(&self) -> usize;

    /// Map a point in reference coordinates to physical coordinates
    ///
    /// `local` should have shape \[topology_dimension\];
    /// `point` should have shape \[geometry_dimension\]
    fn global(&self, local: &[Self::T], point: &mut [Self::T]);

    /// Map a point on the cube in physical coordinates to reference coordinates
    ///
    /// No check is made that `point` lies on the cube. If the cube has a
    /// zero-width axis the result is non-finite along that axis.
    ///
    /// `point` should have shape \[geometry_dimension\];
    /// `local` should have shape \[topology_dimension\]
    fn local(&self, point: &[Self::T], local: &mut [Self::T]);

    /// Write the transposed Jacobian of the reference-to-physical map into `jacobian_t`
    ///
    /// The map is affine, so the value is the same at every reference point and
    /// `local` is ignored.
    ///
    /// `jacobian_t` should have shape \[topology_dimension, geometry_dimension\]
    /// and use column-major ordering
    fn jacobian_transposed(&self, local: &[Self::T], jacobian_t: &mut [Self::T]);

    /// Write the transposed inverse Jacobian of the reference-to-physical map into `jacobian_it`
    ///
    /// The map is affine, so the value is the same at every reference point and
    /// `local` is ignored. If the cube has a zero-width axis the corresponding
    /// entries are non-finite.
    ///
    /// `jacobian_it` should have shape \[geometry_dimension, topology_dimension\]
    /// and use column-major ordering
    fn jacobian_inverse_transposed(&self, local: &[Self::T], jacobian_it: &mut [Self::T]);

    /// The integration element at a reference point
    fn integration_element(&self, local: &[Self::T]) -> Self::T;

    /// The volume of the cube
    fn volume(&self) -> Self::T;

    /// The diameter of the cube
    fn diameter(&self) -> Self::T;

    /// Write the midpoint of the cube into `point`
    ///
    /// `point` should have shape \[geometry_dimension\]
    fn center(&self, point: &mut [Self::T]);

    /// The number of corners of the cube
    fn corner_count(&self) -> usize;

    /// Write the physical coordinates of the corner with index `index` into `corner`
    ///
    /// `corner` should have shape \[geometry_dimension\]
    fn corner(&self, index: usize, corner: &mut [Self::T]);

    /// Iterator over the corners of the cube
    fn corner_iter(&self) -> Self::CornerIter<'_>;

    /// Check if the reference-to-physical map is affine
    fn is_affine(&self) -> bool;
}
