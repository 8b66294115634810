//! Integrators and the simulation driver for Tumble.
//!
//! # Modules
//!
//! - [`ode`] — generic fixed-step integrators ([`ode::rk4`], [`ode::semi_implicit_euler`])
//! - [`rigid`] — principal inertia and Euler's equations for torque-free rotation
//! - [`transient`] — drivers that advance a full simulation state over time

pub mod ode;
pub mod rigid;
pub mod transient;
