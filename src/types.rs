//! Types

mod axis_mask;
pub use axis_mask::AxisMask;

use num::Float;
use rlst::{Array, BaseArray, RlstScalar, VectorContainer};

/// An N-dimensional array
pub type ArrayND<const N: usize, T> = Array<T, BaseArray<VectorContainer<T>, N>, N>;
/// A 2-dimensional array
pub type Array2D<T> = ArrayND<2, T>;

/// A real scalar
pub trait RealScalar: Float + RlstScalar<Real = Self> {}

impl RealScalar for f32 {}
impl RealScalar for f64 {}
