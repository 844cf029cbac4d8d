//! Geometry map
use crate::{
    geometry::AxisAlignedCubeGeometry,
    traits::{Geometry, GeometryMap as GeometryMapTrait},
    types::{Array2D, RealScalar},
};
use rlst::{rlst_dynamic_array2, RandomAccessByRef, RandomAccessMut, RawAccess, Shape};

/// Map from the reference cube to an axis-aligned cube at a fixed set of reference points
#[derive(Debug)]
pub struct CubeGeometryMap<'a, T: RealScalar> {
    geometry: &'a AxisAlignedCubeGeometry<T>,
    points: Array2D<T>,
}

fn norm<T: RealScalar>(vector: &[T]) -> T {
    vector.iter().fold(T::zero(), |a, &b| a + b * b).sqrt()
}

fn cross<T: RealScalar>(mat: &[T], result: &mut [T]) {
    match mat.len() {
        0 => {}
        2 => {
            result[0] = mat[1];
            result[1] = -mat[0];
        }
        6 => {
            result[0] = mat[1] * mat[5] - mat[2] * mat[4];
            result[1] = mat[2] * mat[3] - mat[0] * mat[5];
            result[2] = mat[0] * mat[4] - mat[1] * mat[3];
        }
        _ => {
            unimplemented!();
        }
    }
}

impl<'a, T: RealScalar> CubeGeometryMap<'a, T> {
    /// Create new
    ///
    /// `points` should have shape [topology_dimension, npts]
    pub fn new<A2D: RandomAccessByRef<2, Item = T> + Shape<2>>(
        geometry: &'a AxisAlignedCubeGeometry<T>,
        points: &A2D,
    ) -> Self {
        let tdim = geometry.topology_dimension();
        debug_assert!(points.shape()[0] == tdim);
        let npoints = points.shape()[1];

        let mut p = rlst_dynamic_array2!(T, [tdim, npoints]);
        for i in 0..tdim {
            for j in 0..npoints {
                *p.get_mut([i, j]).unwrap() = *points.get([i, j]).unwrap();
            }
        }

        Self {
            geometry,
            points: p,
        }
    }
}

impl<'a, T: RealScalar> GeometryMapTrait for CubeGeometryMap<'a, T> {
    type T = T;

    fn topology_dimension(&self) -> usize {
        self.geometry.topology_dimension()
    }
    fn geometry_dimension(&self) -> usize {
        self.geometry.geometry_dimension()
    }
    fn point_count(&self) -> usize {
        self.points.shape()[1]
    }
    fn points(&self, points: &mut [T]) {
        let tdim = self.topology_dimension();
        let gdim = self.geometry_dimension();
        let npts = self.point_count();
        debug_assert!(points.len() == gdim * npts);

        let local = self.points.data();
        for point_index in 0..npts {
            self.geometry.global(
                &local[tdim * point_index..tdim * (point_index + 1)],
                &mut points[gdim * point_index..gdim * (point_index + 1)],
            );
        }
    }
    fn jacobians(&self, jacobians: &mut [T]) {
        let tdim = self.topology_dimension();
        let gdim = self.geometry_dimension();
        let npts = self.point_count();
        debug_assert!(jacobians.len() == gdim * tdim * npts);

        // the map is affine, so every point gets the same block
        jacobians.fill(T::zero());
        let lower = self.geometry.lower();
        let upper = self.geometry.upper();
        for point_index in 0..npts {
            for (lc, &i) in self.geometry.axis_map().iter().enumerate() {
                jacobians[i + gdim * lc + gdim * tdim * point_index] = upper[i] - lower[i];
            }
        }
    }
    fn integration_elements(&self, jdets: &mut [T]) {
        debug_assert!(jdets.len() == self.point_count());
        jdets.fill(self.geometry.volume());
    }
    fn jacobians_dets_normals(&self, jacobians: &mut [T], jdets: &mut [T], normals: &mut [T]) {
        let tdim = self.topology_dimension();
        let gdim = self.geometry_dimension();
        if tdim + 1 != gdim {
            panic!("Can only compute normal for cubes where tdim + 1 == gdim");
        }
        let npts = self.point_count();
        debug_assert!(jacobians.len() == gdim * tdim * npts);
        debug_assert!(jdets.len() == npts);
        debug_assert!(normals.len() == gdim * npts);

        self.jacobians(jacobians);

        for point_index in 0..npts {
            cross(
                &jacobians[gdim * tdim * point_index..gdim * tdim * (point_index + 1)],
                &mut normals[gdim * point_index..gdim * (point_index + 1)],
            );
            jdets[point_index] = norm(&normals[gdim * point_index..gdim * (point_index + 1)]);
            for gd in 0..gdim {
                normals[gd + gdim * point_index] /= jdets[point_index];
            }
        }
    }
}
