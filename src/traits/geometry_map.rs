//! Map from reference to physical space.

use crate::types::RealScalar;

pub trait GeometryMap {
    //! Reference to physical geometry map at a fixed set of reference points

    /// Scalar type
    type T: RealScalar;

    /// The topological dimension of the cube being mapped
    fn topology_dimension(&self) -> usize;

    /// The geometric dimension of the physical space
    fn geometry_dimension(&self) -> usize;

    /// The number of reference points that this map uses
    fn point_count(&self) -> usize;

    /// Write the physical points into `points`
    ///
    /// `points` should have shape [geometry_dimension, npts] and use column-major ordering
    fn points(&self, points: &mut [Self::T]);

    /// Write the jacobians at the physical points into `jacobians`
    ///
    /// `jacobians` should have shape [geometry_dimension, topology_dimension, npts] and use
    /// column-major ordering
    fn jacobians(&self, jacobians: &mut [Self::T]);

    /// Write the integration elements at the physical points into `jdets`
    ///
    /// `jdets` should have shape \[npts\]
    fn integration_elements(&self, jdets: &mut [Self::T]);

    /// Write the jacobians, their determinants, and the normals at the physical points into
    /// `jacobians`, `jdets` and `normals`
    ///
    /// `jacobians` should have shape [geometry_dimension, topology_dimension, npts] and use
    /// column-major ordering;
    /// `jdets` should have shape \[npts\];
    /// `normals` should have shape [geometry_dimension, npts] and use column-major ordering
    fn jacobians_dets_normals(
        &self,
        jacobians: &mut [Self::T],
        jdets: &mut [Self::T],
        normals: &mut [Self::T],
    );
}
