use thiserror::Error;
use tumble_core::Vector3;

/// Errors from constructing a [`PrincipalInertia`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InertiaError {
    #[error("principal moment I{axis} must be positive and finite, got {value}")]
    NonPositiveMoment { axis: usize, value: f64 },
}

/// Principal moments of inertia `(I₁, I₂, I₃)`.
///
/// Represents the diagonal inertia tensor of a body in its principal-axis
/// frame. Every moment is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrincipalInertia {
    moments: Vector3,
}

impl PrincipalInertia {
    /// Creates the inertia descriptor from the three principal moments.
    ///
    /// # Errors
    ///
    /// Returns [`InertiaError::NonPositiveMoment`] naming the first moment (1-based)
    /// that is zero, negative, or not finite.
    pub fn new(moments: [f64; 3]) -> Result<Self, InertiaError> {
        for (i, &value) in moments.iter().enumerate() {
            if !(value.is_finite() && value > 0.0) {
                return Err(InertiaError::NonPositiveMoment { axis: i + 1, value });
            }
        }
        Ok(Self {
            moments: Vector3::new(moments),
        })
    }

    /// The principal moments as a vector.
    #[must_use]
    pub fn moments(&self) -> Vector3 {
        self.moments
    }

    /// Rotational kinetic energy `½ Σ Iᵢ ωᵢ²` for a body-frame angular velocity.
    #[must_use]
    pub fn kinetic_energy(&self, omega: Vector3) -> f64 {
        0.5 * (0..3)
            .map(|i| self.moments[i] * omega[i] * omega[i])
            .sum::<f64>()
    }

    /// Squared magnitude of the angular momentum `Σ (Iᵢ ωᵢ)²`.
    #[must_use]
    pub fn angular_momentum_squared(&self, omega: Vector3) -> f64 {
        (0..3).map(|i| (self.moments[i] * omega[i]).powi(2)).sum()
    }
}

/// The inertia ratios `γ = (γ₁, γ₂, γ₃)` of Euler's equations:
///
/// ```text
/// γ₁ = (I₃ − I₂) / I₁
/// γ₂ = (I₁ − I₃) / I₂
/// γ₃ = (I₂ − I₁) / I₃
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerParameters {
    gamma: Vector3,
}

impl EulerParameters {
    /// Uses the given ratios directly.
    #[must_use]
    pub fn new(gamma: [f64; 3]) -> Self {
        Self {
            gamma: Vector3::new(gamma),
        }
    }

    /// The ratios as a vector.
    #[must_use]
    pub fn gamma(&self) -> Vector3 {
        self.gamma
    }
}

impl From<&PrincipalInertia> for EulerParameters {
    fn from(inertia: &PrincipalInertia) -> Self {
        let [i1, i2, i3] = *inertia.moments.as_array();
        Self::new([(i3 - i2) / i1, (i1 - i3) / i2, (i2 - i1) / i3])
    }
}

impl From<PrincipalInertia> for EulerParameters {
    fn from(inertia: PrincipalInertia) -> Self {
        Self::from(&inertia)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_non_positive_moments() {
        assert_eq!(
            PrincipalInertia::new([1.0, 0.0, 2.0]),
            Err(InertiaError::NonPositiveMoment {
                axis: 2,
                value: 0.0
            })
        );
        assert!(PrincipalInertia::new([-1.0, 1.0, 1.0]).is_err());
        assert!(PrincipalInertia::new([1.0, 1.0, f64::NAN]).is_err());
    }

    #[test]
    fn gamma_follows_cyclic_permutation() {
        let inertia = PrincipalInertia::new([1.0, 2.0, 4.0]).unwrap();
        let gamma = EulerParameters::from(&inertia).gamma();

        assert_relative_eq!(gamma.x(), 2.0); // (4 − 2) / 1
        assert_relative_eq!(gamma.y(), -1.5); // (1 − 4) / 2
        assert_relative_eq!(gamma.z(), 0.25); // (2 − 1) / 4
    }

    #[test]
    fn symmetric_body_has_zero_gamma_about_symmetry_axis() {
        let inertia = PrincipalInertia::new([7.5, 7.5, 3.0]).unwrap();
        let gamma = EulerParameters::from(inertia).gamma();

        assert_relative_eq!(gamma.x(), -0.6);
        assert_relative_eq!(gamma.y(), 0.6);
        assert_eq!(gamma.z(), 0.0);
    }

    #[test]
    fn energy_and_momentum() {
        let inertia = PrincipalInertia::new([1.0, 2.0, 3.0]).unwrap();
        let omega = Vector3::new([1.0, -1.0, 2.0]);

        assert_relative_eq!(inertia.kinetic_energy(omega), 0.5 * (1.0 + 2.0 + 12.0));
        assert_relative_eq!(inertia.angular_momentum_squared(omega), 1.0 + 4.0 + 36.0);
    }
}
