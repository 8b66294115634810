use std::{
    fmt,
    ops::{Index, IndexMut, Mul},
};

use crate::{IndexError, Scalar, Vector};

/// A fixed-size matrix with `N` columns of `M` rows, stored column by column.
///
/// Entries are addressed as `(col, row)`. Both dimensions are part of the type,
/// so multiplying matrices whose inner dimensions disagree does not compile:
///
/// ```compile_fail
/// use tumble_core::Matrix;
///
/// let a = Matrix::<f64, 2, 3>::zeros(); // 2 columns, 3 rows
/// let b = Matrix::<f64, 2, 3>::zeros(); // needs 2 rows to follow `a`
/// let _ = a * b;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const N: usize, const M: usize> {
    columns: [Vector<T, M>; N],
}

/// A 3×3 `f64` matrix.
pub type Matrix3 = Matrix<f64, 3, 3>;

impl<T: Scalar, const N: usize, const M: usize> Matrix<T, N, M> {
    /// Creates a matrix from its columns.
    #[must_use]
    pub const fn from_columns(columns: [Vector<T, M>; N]) -> Self {
        Self { columns }
    }

    /// Creates a matrix from row-major entries, the way a matrix is written on
    /// paper: `rows[row][col]`.
    #[must_use]
    pub fn from_rows(rows: [[T; N]; M]) -> Self {
        Self::from_columns(std::array::from_fn(|col| {
            Vector::new(std::array::from_fn(|row| rows[row][col]))
        }))
    }

    /// Returns the matrix with every entry equal to zero.
    #[must_use]
    pub fn zeros() -> Self {
        Self::from_columns([Vector::zeros(); N])
    }

    /// Returns column `col` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `col >= N`.
    #[must_use]
    pub fn column(&self, col: usize) -> Vector<T, M> {
        self.columns[col]
    }

    /// Returns the entry at `(col, row)`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Entry`] if `col >= N` or `row >= M`.
    pub fn get(&self, col: usize, row: usize) -> Result<T, IndexError> {
        self.check(col, row)?;
        Ok(self.columns[col][row])
    }

    /// Overwrites the entry at `(col, row)`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Entry`] if `col >= N` or `row >= M`.
    pub fn set(&mut self, col: usize, row: usize, value: T) -> Result<(), IndexError> {
        self.check(col, row)?;
        self.columns[col][row] = value;
        Ok(())
    }

    /// Returns the transpose, with `M` columns of `N` rows.
    #[must_use]
    pub fn transpose(&self) -> Matrix<T, M, N> {
        Matrix::from_columns(std::array::from_fn(|col| {
            Vector::new(std::array::from_fn(|row| self.columns[row][col]))
        }))
    }

    fn check(&self, col: usize, row: usize) -> Result<(), IndexError> {
        if col < N && row < M {
            Ok(())
        } else {
            Err(IndexError::Entry {
                col,
                row,
                cols: N,
                rows: M,
            })
        }
    }

    /// Dot product of row `row` of `self` with `column`.
    fn row_dot(&self, row: usize, column: &Vector<T, N>) -> T {
        (0..N).fold(T::zero(), |sum, k| sum + self.columns[k][row] * column[k])
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_columns(std::array::from_fn(|col| {
            let mut column = Vector::zeros();
            column[col] = T::one();
            column
        }))
    }
}

/// Panics if `col >= N` or `row >= M`.
impl<T, const N: usize, const M: usize> Index<(usize, usize)> for Matrix<T, N, M> {
    type Output = T;

    fn index(&self, (col, row): (usize, usize)) -> &T {
        &self.columns[col][row]
    }
}

/// Panics if `col >= N` or `row >= M`.
impl<T, const N: usize, const M: usize> IndexMut<(usize, usize)> for Matrix<T, N, M> {
    fn index_mut(&mut self, (col, row): (usize, usize)) -> &mut T {
        &mut self.columns[col][row]
    }
}

/// Matrix × matrix.
///
/// The left operand has `N` columns, so the right operand must have `N` rows.
/// Entry `(col, row)` of the product is the dot product of row `row` of the
/// left matrix with column `col` of the right matrix.
impl<T: Scalar, const N: usize, const M: usize, const K: usize> Mul<Matrix<T, K, N>>
    for Matrix<T, N, M>
{
    type Output = Matrix<T, K, M>;

    fn mul(self, rhs: Matrix<T, K, N>) -> Matrix<T, K, M> {
        Matrix::from_columns(rhs.columns.map(|column| self * column))
    }
}

/// Matrix × vector, contracting over the matrix's `N` columns.
impl<T: Scalar, const N: usize, const M: usize> Mul<Vector<T, N>> for Matrix<T, N, M> {
    type Output = Vector<T, M>;

    fn mul(self, rhs: Vector<T, N>) -> Vector<T, M> {
        Vector::new(std::array::from_fn(|row| self.row_dot(row, &rhs)))
    }
}

impl<T: fmt::Display, const N: usize, const M: usize> fmt::Display for Matrix<T, N, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..M {
            write!(f, "[")?;
            for col in 0..N {
                let sep = if col == 0 { " " } else { ", " };
                write!(f, "{sep}{}", self.columns[col][row])?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Vector3;

    #[test]
    fn from_rows_stores_columns() {
        let m = Matrix::<f64, 2, 3>::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        assert_eq!(m.column(0), Vector::new([1.0, 3.0, 5.0]));
        assert_eq!(m.column(1), Vector::new([2.0, 4.0, 6.0]));
        assert_eq!(m[(1, 2)], 6.0);
    }

    #[test]
    fn checked_access_reports_out_of_bounds() {
        let mut m = Matrix::<f64, 2, 3>::zeros();
        assert_eq!(m.get(1, 2), Ok(0.0));
        assert_eq!(
            m.get(2, 0),
            Err(IndexError::Entry {
                col: 2,
                row: 0,
                cols: 2,
                rows: 3,
            })
        );
        assert!(m.set(0, 3, 1.0).is_err());

        m.set(1, 0, 9.0).unwrap();
        assert_eq!(m[(1, 0)], 9.0);
    }

    #[test]
    fn matrix_times_vector_is_a_vector() {
        let m = Matrix3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let v = Vector3::new([1.0, 0.0, -1.0]);
        assert_eq!(m * v, Vector3::new([-2.0, -2.0, -2.0]));
    }

    #[test]
    fn matrix_product_uses_rows_of_left_and_columns_of_right() {
        // 2 columns × 3 rows times 2 columns × 2 rows.
        let a = Matrix::<f64, 2, 3>::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        let b = Matrix::<f64, 2, 2>::from_rows([[1.0, 0.0], [1.0, 2.0]]);

        let product: Matrix<f64, 2, 3> = a * b;

        let expected = Matrix::from_rows([[3.0, 4.0], [7.0, 8.0], [11.0, 12.0]]);
        assert_eq!(product, expected);
    }

    #[test]
    fn identity_is_neutral() {
        let m = Matrix3::from_rows([[2.0, -1.0, 0.0], [0.5, 3.0, 1.0], [0.0, 0.0, 4.0]]);
        assert_eq!(Matrix3::identity() * m, m);
        assert_eq!(m * Matrix3::identity(), m);
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let m = Matrix::<f64, 2, 3>::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        let t: Matrix<f64, 3, 2> = m.transpose();
        assert_eq!(t, Matrix::from_rows([[1.0, 3.0, 5.0], [2.0, 4.0, 6.0]]));
    }

    #[test]
    fn display_prints_one_row_per_line() {
        let m = Matrix::<f64, 2, 2>::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.to_string(), "[ 1, 2 ]\n[ 3, 4 ]\n");
    }
}
