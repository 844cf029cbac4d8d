//! Geometry of an axis-aligned cube, possibly embedded in a higher-dimensional space
#[cfg(feature = "serde")]
use crate::traits::ConvertToSerializable;
use crate::{
    geometry::CornerIter,
    traits::Geometry,
    types::{AxisMask, RealScalar},
};
use itertools::izip;
use ndelement::types::ReferenceCellType;

/// How the cube sits in physical space
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Embedding {
    /// The topological and geometric dimensions are equal
    Full,
    /// The cube is flat along at least one world axis
    Reduced,
}

/// An axis-aligned cube with extent along a subset of the world coordinate axes
///
/// The map from reference to physical coordinates is an affine scaling in each
/// coordinate direction, so this is much cheaper than a geometry for a general
/// hexahedral element. The axes the cube has extent along are marked in an
/// [`AxisMask`]; along every other axis the cube is flat, and its coordinate
/// there is taken from `lower`. Local coordinate `j` corresponds to the `j`-th
/// set axis in ascending order; this ordering is computed once at construction
/// and shared by the coordinate maps, the Jacobians and the corner enumeration.
#[derive(Debug, PartialEq, Clone)]
pub struct AxisAlignedCubeGeometry<T: RealScalar> {
    lower: Vec<T>,
    upper: Vec<T>,
    axes: AxisMask,
    axis_map: Vec<usize>,
    embedding: Embedding,
}

impl<T: RealScalar> AxisAlignedCubeGeometry<T> {
    /// Create a cube from its lower left and upper right corners
    ///
    /// The cube has extent along every world axis, so its topological and
    /// geometric dimensions are both `lower.len()`.
    pub fn new(lower: &[T], upper: &[T]) -> Self {
        debug_assert_eq!(lower.len(), upper.len());
        let gdim = lower.len();
        Self {
            lower: lower.to_vec(),
            upper: upper.to_vec(),
            axes: AxisMask::first(gdim),
            axis_map: (0..gdim).collect(),
            embedding: Embedding::Full,
        }
    }

    /// Create a `tdim`-dimensional cube embedded via an axis mask
    ///
    /// Each set bit of `axes` marks a world axis the cube has extent along;
    /// precisely `tdim` bits must be set. Along every unset axis the cube is
    /// flat: `upper` is collapsed onto `lower` there, so downstream formulas
    /// need no further special-casing of inactive axes.
    pub fn with_axes(tdim: usize, lower: &[T], upper: &[T], axes: AxisMask) -> Self {
        debug_assert_eq!(lower.len(), upper.len());
        debug_assert_eq!(axes.count(), tdim);
        let gdim = lower.len();
        let mut upper = upper.to_vec();
        for (i, (up, lo)) in izip!(upper.iter_mut(), lower).enumerate() {
            if !axes.contains(i) {
                *up = *lo;
            }
        }
        Self {
            lower: lower.to_vec(),
            upper,
            axes,
            axis_map: axes.iter().collect(),
            embedding: if tdim == gdim {
                Embedding::Full
            } else {
                Embedding::Reduced
            },
        }
    }

    /// Lower left corner
    pub fn lower(&self) -> &[T] {
        &self.lower
    }

    /// Upper right corner
    pub fn upper(&self) -> &[T] {
        &self.upper
    }

    /// Axis mask
    pub fn axes(&self) -> AxisMask {
        self.axes
    }

    /// World indices of the active axes, ascending
    pub(crate) fn axis_map(&self) -> &[usize] {
        &self.axis_map
    }
}

impl<T: RealScalar> Geometry for AxisAlignedCubeGeometry<T> {
    type T = T;

    type CornerIter<'a> = CornerIter<'a, T>;

    fn cell_type(&self) -> ReferenceCellType {
        match self.axis_map.len() {
            0 => ReferenceCellType::Point,
            1 => ReferenceCellType::Interval,
            2 => ReferenceCellType::Quadrilateral,
            3 => ReferenceCellType::Hexahedron,
            d => {
                panic!("Unsupported cube dimension: {d}")
            }
        }
    }

    fn topology_dimension(&self) -> usize {
        self.axis_map.len()
    }

    fn geometry_dimension(&self) -> usize {
        self.lower.len()
    }

    fn global(&self, local: &[T], point: &mut [T]) {
        debug_assert_eq!(local.len(), self.topology_dimension());
        debug_assert_eq!(point.len(), self.geometry_dimension());
        match self.embedding {
            Embedding::Full => {
                for (p, l, lo, up) in izip!(point.iter_mut(), local, &self.lower, &self.upper) {
                    *p = *lo + *l * (*up - *lo);
                }
            }
            Embedding::Reduced => {
                point.copy_from_slice(&self.lower);
                for (l, &i) in izip!(local, &self.axis_map) {
                    point[i] = self.lower[i] + *l * (self.upper[i] - self.lower[i]);
                }
            }
        }
    }

    fn local(&self, point: &[T], local: &mut [T]) {
        debug_assert_eq!(point.len(), self.geometry_dimension());
        debug_assert_eq!(local.len(), self.topology_dimension());
        match self.embedding {
            Embedding::Full => {
                for (l, p, lo, up) in izip!(local.iter_mut(), point, &self.lower, &self.upper) {
                    *l = (*p - *lo) / (*up - *lo);
                }
            }
            Embedding::Reduced => {
                for (l, &i) in izip!(local.iter_mut(), &self.axis_map) {
                    *l = (point[i] - self.lower[i]) / (self.upper[i] - self.lower[i]);
                }
            }
        }
    }

    fn jacobian_transposed(&self, _local: &[T], jacobian_t: &mut [T]) {
        let tdim = self.topology_dimension();
        debug_assert_eq!(jacobian_t.len(), tdim * self.geometry_dimension());
        jacobian_t.fill(T::zero());
        match self.embedding {
            Embedding::Full => {
                // diagonal matrix
                for (i, (lo, up)) in izip!(&self.lower, &self.upper).enumerate() {
                    jacobian_t[i * (tdim + 1)] = *up - *lo;
                }
            }
            Embedding::Reduced => {
                // one nonzero per row, at the world axis of each local coordinate
                for (lc, &i) in self.axis_map.iter().enumerate() {
                    jacobian_t[lc + tdim * i] = self.upper[i] - self.lower[i];
                }
            }
        }
    }

    fn jacobian_inverse_transposed(&self, _local: &[T], jacobian_it: &mut [T]) {
        let gdim = self.geometry_dimension();
        debug_assert_eq!(jacobian_it.len(), gdim * self.topology_dimension());
        jacobian_it.fill(T::zero());
        match self.embedding {
            Embedding::Full => {
                for (i, (lo, up)) in izip!(&self.lower, &self.upper).enumerate() {
                    jacobian_it[i * (gdim + 1)] = T::one() / (*up - *lo);
                }
            }
            Embedding::Reduced => {
                for (lc, &i) in self.axis_map.iter().enumerate() {
                    jacobian_it[i + gdim * lc] = T::one() / (self.upper[i] - self.lower[i]);
                }
            }
        }
    }

    fn integration_element(&self, _local: &[T]) -> T {
        self.volume()
    }

    fn volume(&self) -> T {
        match self.embedding {
            Embedding::Full => {
                izip!(&self.lower, &self.upper).fold(T::one(), |v, (lo, up)| v * (*up - *lo))
            }
            // inactive axes are flat, so the product must skip them
            Embedding::Reduced => self
                .axis_map
                .iter()
                .fold(T::one(), |v, &i| v * (self.upper[i] - self.lower[i])),
        }
    }

    fn diameter(&self) -> T {
        // lower == upper along inactive axes, so summing over all axes is fine
        izip!(&self.lower, &self.upper)
            .fold(T::zero(), |d, (lo, up)| d + (*up - *lo) * (*up - *lo))
            .sqrt()
    }

    fn center(&self, point: &mut [T]) {
        debug_assert_eq!(point.len(), self.geometry_dimension());
        // lower == upper along inactive axes, so no branching on axis activity
        let half = T::from(0.5).unwrap();
        for (p, lo, up) in izip!(point.iter_mut(), &self.lower, &self.upper) {
            *p = half * (*lo + *up);
        }
    }

    fn corner_count(&self) -> usize {
        1 << self.topology_dimension()
    }

    fn corner(&self, index: usize, corner: &mut [T]) {
        debug_assert!(index < self.corner_count());
        debug_assert_eq!(corner.len(), self.geometry_dimension());
        match self.embedding {
            Embedding::Full => {
                for (i, (c, lo, up)) in
                    izip!(corner.iter_mut(), &self.lower, &self.upper).enumerate()
                {
                    *c = if index >> i & 1 == 1 { *up } else { *lo };
                }
            }
            Embedding::Reduced => {
                // bit j of the index selects along the j-th active axis
                corner.copy_from_slice(&self.lower);
                for (bit, &i) in self.axis_map.iter().enumerate() {
                    if index >> bit & 1 == 1 {
                        corner[i] = self.upper[i];
                    }
                }
            }
        }
    }

    fn corner_iter(&self) -> CornerIter<'_, T> {
        CornerIter::new(self)
    }

    fn is_affine(&self) -> bool {
        true
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, Debug, serde::Deserialize)]
#[serde(bound = "for<'de2> T: serde::Deserialize<'de2>")]
/// Serializable form of an axis-aligned cube geometry
pub struct SerializableCubeGeometry<T: RealScalar + serde::Serialize>
where
    for<'de2> T: serde::Deserialize<'de2>,
{
    lower: Vec<T>,
    upper: Vec<T>,
    axes: u64,
    tdim: usize,
}

#[cfg(feature = "serde")]
impl<T: RealScalar + serde::Serialize> ConvertToSerializable for AxisAlignedCubeGeometry<T>
where
    for<'de2> T: serde::Deserialize<'de2>,
{
    type SerializableType = SerializableCubeGeometry<T>;
    fn to_serializable(&self) -> SerializableCubeGeometry<T> {
        SerializableCubeGeometry {
            lower: self.lower.clone(),
            upper: self.upper.clone(),
            axes: self.axes.bits(),
            tdim: self.topology_dimension(),
        }
    }
    fn from_serializable(s: SerializableCubeGeometry<T>) -> Self {
        // reconstruction re-derives the axis ordering and embedding tag
        Self::with_axes(s.tdim, &s.lower, &s.upper, AxisMask::from_bits(s.axes))
    }
}
