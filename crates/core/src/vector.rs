use std::{
    fmt,
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{IndexError, Scalar};

/// A fixed-size vector of `N` components of type `T`.
///
/// The length is part of the type, so vectors never resize and two vectors can
/// only be combined when their lengths agree at compile time.
/// Vectors are plain values: arithmetic returns a new vector and never mutates
/// an operand, except through the explicit compound-assignment operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize> {
    components: [T; N],
}

/// A three-component `f64` vector.
pub type Vector3 = Vector<f64, 3>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(components: [T; N]) -> Self {
        Self { components }
    }

    /// Returns the vector with every component equal to zero.
    #[must_use]
    pub fn zeros() -> Self {
        Self::new([T::zero(); N])
    }

    /// Returns the components as an array.
    #[must_use]
    pub const fn as_array(&self) -> &[T; N] {
        &self.components
    }

    /// Returns the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Component`] if `index >= N`.
    pub fn get(&self, index: usize) -> Result<T, IndexError> {
        self.components
            .get(index)
            .copied()
            .ok_or(IndexError::Component { index, len: N })
    }

    /// Overwrites the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Component`] if `index >= N`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        let slot = self
            .components
            .get_mut(index)
            .ok_or(IndexError::Component { index, len: N })?;
        *slot = value;
        Ok(())
    }

    /// Returns the dot product with `other`.
    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        self.components
            .iter()
            .zip(&other.components)
            .fold(T::zero(), |sum, (&a, &b)| sum + a * b)
    }

    /// Returns the sum of the squared components.
    #[must_use]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Returns the Euclidean length.
    #[must_use]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// The vector must have nonzero length. Normalizing the zero vector divides
    /// by zero and yields NaN components; use [`Vector::try_normalized`] when
    /// the length may legitimately be zero.
    #[must_use]
    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    /// Returns a unit vector pointing in the same direction, or `None` if the
    /// length is zero or not finite.
    #[must_use]
    pub fn try_normalized(&self) -> Option<Self> {
        let length = self.length();
        (length > T::zero() && length.is_finite()).then(|| *self / length)
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.components.iter().all(|c| c.is_finite())
    }

    fn map(self, f: impl Fn(T) -> T) -> Self {
        Self::new(self.components.map(f))
    }

    fn zip_with(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        Self::new(std::array::from_fn(|i| {
            f(self.components[i], other.components[i])
        }))
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// The first component.
    #[must_use]
    pub fn x(&self) -> T {
        self.components[0]
    }

    /// The second component.
    #[must_use]
    pub fn y(&self) -> T {
        self.components[1]
    }

    /// The third component.
    #[must_use]
    pub fn z(&self) -> T {
        self.components[2]
    }

    /// Returns the cross product `self × other`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        let [a1, a2, a3] = self.components;
        let [b1, b2, b3] = other.components;
        Self::new([a2 * b3 - a3 * b2, a3 * b1 - a1 * b3, a1 * b2 - a2 * b1])
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(vector: Vector<T, N>) -> Self {
        vector.components
    }
}

/// Panics if `index >= N`.
impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.components[index]
    }
}

/// Panics if `index >= N`.
impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.components[index]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|c| c * rhs)
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.map(|c| c / rhs)
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.components.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{c}")?;
        }
        write!(f, " )")
    }
}
