//! Semi-implicit (symplectic) Euler for second-order systems.
//!
//! Velocity is updated first, and position is then advanced with the *new*
//! velocity:
//!
//! ```text
//! vₙ₊₁ = vₙ + a(tₙ, xₙ) · h
//! xₙ₊₁ = xₙ + vₙ₊₁ · h
//! ```
//!
//! Using the updated velocity is what distinguishes the method from explicit
//! Euler and gives it bounded long-term energy error.

use std::ops::{Add, Mul};

/// Advances velocity and position by one step of size `h`.
///
/// `acceleration` is evaluated once, at the pre-step time `t` and position
/// `x_n`. Returns `(v_next, x_next)`.
pub fn step<S, A>(t: f64, h: f64, mut acceleration: A, v_n: S, x_n: S) -> (S, S)
where
    S: Copy + Add<Output = S> + Mul<f64, Output = S>,
    A: FnMut(f64, S) -> S,
{
    let v_next = v_n + acceleration(t, x_n) * h;
    let x_next = x_n + v_next * h;
    (v_next, x_next)
}
