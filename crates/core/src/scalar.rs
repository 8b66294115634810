use std::fmt::Debug;

use num_traits::Float;

/// Numeric types usable as vector and matrix components.
///
/// Blanket-implemented for every floating-point type, so `f32` and `f64` both
/// qualify.
pub trait Scalar: Float + Debug + 'static {}

impl<T: Float + Debug + 'static> Scalar for T {}
