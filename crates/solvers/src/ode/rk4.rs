//! Classic fourth-order Runge-Kutta.
//!
//! One step of size `h` for `dy/dx = f(x, y)`:
//!
//! ```text
//! k1 = f(xₙ, yₙ)
//! k2 = f(xₙ + h/2, yₙ + h/2 · k1)
//! k3 = f(xₙ + h/2, yₙ + h/2 · k2)
//! k4 = f(xₙ + h, yₙ + h · k3)
//!
//! zₙ₊₁ = zₙ + h/6 · (k1 + 2 k2 + 2 k3 + k4)
//! ```
//!
//! The stage derivatives are evaluated at `yₙ`, but the increment is added to
//! a separate accumulator `zₙ`. Passing `zₙ = yₙ` gives the ordinary RK4 step.

use std::ops::{Add, Mul};

/// Advances `z_n` by one RK4 increment computed from `f` around `(x_n, y_n)`.
///
/// `f` is called exactly four times. Coupled systems must use a state type
/// that holds every coupled component, so that all of them see the same stage
/// value.
pub fn step<Y, F>(h: f64, x_n: f64, y_n: Y, z_n: Y, mut f: F) -> Y
where
    Y: Copy + Add<Output = Y> + Mul<f64, Output = Y>,
    F: FnMut(f64, Y) -> Y,
{
    let half = 0.5 * h;

    let k1 = f(x_n, y_n);
    let k2 = f(x_n + half, y_n + k1 * half);
    let k3 = f(x_n + half, y_n + k2 * half);
    let k4 = f(x_n + h, y_n + k3 * h);

    z_n + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::{E, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use tumble_core::Vector;

    /// Integrates `dy/dx = y` from `y(0) = 1` to `x = 1`.
    fn exponential_error(h: f64) -> f64 {
        let steps = (1.0 / h).round() as u32;
        let mut y = 1.0;
        for n in 0..steps {
            let x = f64::from(n) * h;
            y = step(h, x, y, y, |_, y| y);
        }
        (y - E).abs()
    }

    #[test]
    fn constant_derivative_is_exact() {
        let next = step(0.25, 3.0, 2.0, 2.0, |_, _| -4.0);
        assert_relative_eq!(next, 1.0, max_relative = 1e-15);
    }

    #[test]
    fn increment_is_added_to_accumulator() {
        let next = step(0.5, 0.0, 1.0, 10.0, |_, _| 3.0);
        assert_relative_eq!(next, 11.5, max_relative = 1e-15);
    }

    #[test]
    fn quadratic_derivative_is_exact() {
        // dy/dx = 3x², y = x³, stepping from x = 0.5 to x = 1.
        let next = step(0.5, 0.5, 0.125, 0.125, |x, _| 3.0 * x * x);
        assert_relative_eq!(next, 1.0, max_relative = 1e-15);
    }

    #[test]
    fn global_error_is_fourth_order() {
        let coarse = exponential_error(0.1);
        let fine = exponential_error(0.05);

        assert!(coarse < 1e-5, "coarse error {coarse}");
        let ratio = coarse / fine;
        assert!((14.0..18.0).contains(&ratio), "error ratio {ratio}");
    }

    #[test]
    fn coupled_vector_state_completes_an_orbit() {
        // y = (position, velocity) of a unit harmonic oscillator.
        let h = 2.0 * PI / 1000.0;
        let mut y = Vector::new([1.0, 0.0]);
        for n in 0..1000 {
            let x = f64::from(n) * h;
            y = step(h, x, y, y, |_, s: Vector<f64, 2>| Vector::new([s[1], -s[0]]));
        }
        assert_abs_diff_eq!(y[0], 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(y[1], 0.0, epsilon = 1e-9);
    }
}
