//! Torque-free rotation of a rigid body about its center of mass.
//!
//! Angular velocity is expressed in the body's principal-axis frame, where the
//! inertia tensor is diagonal. Only angular velocity is integrated; attitude is
//! not tracked here.
//!
//! - [`PrincipalInertia`] — the diagonal of the inertia tensor
//! - [`EulerParameters`] — the inertia ratios γ used by Euler's equations
//! - [`euler_equations`] and [`step_angular_velocity`] — the equations of motion
//!   and their RK4 integration

mod euler_equations;
mod inertia;

pub use euler_equations::{euler_equations, step_angular_velocity};
pub use inertia::{EulerParameters, InertiaError, PrincipalInertia};
