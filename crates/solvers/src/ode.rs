//! Generic fixed-step ODE integrators.
//!
//! Both integrators are pure functions of their inputs. They are generic over
//! the state type and only require what they use: addition of states and
//! multiplication by an `f64` step size. Plain `f64` values and
//! [`tumble_core::Vector`]s of `f64` both qualify.
//!
//! - [`rk4`] — classic fourth-order Runge-Kutta
//! - [`semi_implicit_euler`] — symplectic Euler for second-order systems

pub mod rk4;
pub mod semi_implicit_euler;
