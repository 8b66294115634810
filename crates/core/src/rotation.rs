use crate::{Matrix, Scalar, Vector};

/// Builds the 3×3 matrix that rotates vectors by `angle` radians about `axis`,
/// following the right-hand rule (Rodrigues' rotation formula):
///
/// ```text
/// R = I cos θ + sin θ [a]ₓ + (1 − cos θ) (a ⊗ a)
/// ```
///
/// The axis need not be normalized; it is normalized here unless its squared
/// length is already exactly one. It must be nonzero, since normalizing the
/// zero vector is undefined.
#[must_use]
pub fn rotation_matrix<T: Scalar>(axis: Vector<T, 3>, angle: T) -> Matrix<T, 3, 3> {
    let axis = if axis.length_squared() == T::one() {
        axis
    } else {
        axis.normalized()
    };

    let (a, b, c) = (axis.x(), axis.y(), axis.z());
    let (sin, cos) = angle.sin_cos();
    let versin = T::one() - cos;

    let ab = a * b;
    let ac = a * c;
    let bc = b * c;

    Matrix::from_rows([
        [a * a * versin + cos, ab * versin - c * sin, ac * versin + b * sin],
        [ab * versin + c * sin, b * b * versin + cos, bc * versin - a * sin],
        [ac * versin - b * sin, bc * versin + a * sin, c * c * versin + cos],
    ])
}
