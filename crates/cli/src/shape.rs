//! Body shapes with closed-form principal moments of inertia.

use serde::Deserialize;
use tumble_core::Vector3;
use tumble_solvers::rigid::{InertiaError, PrincipalInertia};
use uom::si::{
    f64::{Length, Mass, MomentOfInertia},
    length::meter,
    mass::kilogram,
    moment_of_inertia::kilogram_square_meter,
};

/// A solid right circular cone, rotating about its center of mass.
///
/// The symmetry axis is body axis 3. Quantities deserialize in SI base units
/// (kilograms and meters).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Cone {
    pub mass: Mass,
    pub radius: Length,
    pub height: Length,
}

impl Cone {
    /// Principal moments about the center of mass:
    ///
    /// ```text
    /// I₁ = I₂ = 3M/20 · (R² + H²/4)
    /// I₃ = 3M/10 · R²
    /// ```
    #[must_use]
    pub fn principal_moments(&self) -> [MomentOfInertia; 3] {
        let r2 = self.radius * self.radius;
        let h2 = self.height * self.height;
        let transverse: MomentOfInertia = self.mass * (r2 + h2 / 4.0) * (3.0 / 20.0);
        let axial: MomentOfInertia = self.mass * r2 * (3.0 / 10.0);
        [transverse, transverse, axial]
    }

    /// The validated inertia descriptor, in kg·m².
    ///
    /// # Errors
    ///
    /// Returns an error if the mass or a dimension is zero, negative, or not
    /// finite, since some moment is then not strictly positive.
    pub fn inertia(&self) -> Result<PrincipalInertia, InertiaError> {
        PrincipalInertia::new(
            self.principal_moments()
                .map(|moment| moment.get::<kilogram_square_meter>()),
        )
    }

    /// Body-frame offset of the tracked point, three quarters of the way out
    /// along the base radius.
    #[must_use]
    pub fn tracked_offset(&self) -> Vector3 {
        Vector3::new([0.0, 0.75 * self.radius.get::<meter>(), 0.0])
    }
}

impl Default for Cone {
    fn default() -> Self {
        Self {
            mass: Mass::new::<kilogram>(10.0),
            radius: Length::new::<meter>(1.0),
            height: Length::new::<meter>(4.0),
        }
    }
}
