use tumble_core::Vector3;

use crate::ode::rk4;

use super::EulerParameters;

/// Time derivative of the body-frame angular velocity of a torque-free body:
///
/// ```text
/// dω₁/dt = −γ₁ ω₂ ω₃
/// dω₂/dt = −γ₂ ω₃ ω₁
/// dω₃/dt = −γ₃ ω₁ ω₂
/// ```
#[must_use]
pub fn euler_equations(params: &EulerParameters, omega: Vector3) -> Vector3 {
    let gamma = params.gamma();
    let (w1, w2, w3) = (omega.x(), omega.y(), omega.z());
    Vector3::new([
        -gamma.x() * w2 * w3,
        -gamma.y() * w3 * w1,
        -gamma.z() * w1 * w2,
    ])
}

/// Advances the body-frame angular velocity by one RK4 step of size `h`.
///
/// The three equations are coupled, so each stage evaluates all of them from
/// the same intermediate ω.
#[must_use]
pub fn step_angular_velocity(h: f64, params: &EulerParameters, omega: Vector3) -> Vector3 {
    rk4::step(h, 0.0, omega, omega, |_, w| euler_equations(params, w))
}
