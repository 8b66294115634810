//! Core types and traits for Tumble.
//!
//! This crate defines the value types and shared abstractions that the
//! integrators, the simulation driver, and the observers build on:
//!
//! - [`Vector`] — a fixed-size `N`-component vector
//! - [`Matrix`] — a fixed-size column-major matrix with `N` columns of `M` rows
//! - [`rotation_matrix`] — a 3×3 rotation about an axis (Rodrigues' formula)
//! - [`Scalar`] — the numeric bound shared by vectors and matrices
//! - [`Observer`] — receives solver events and optionally returns control actions

mod error;
mod matrix;
mod observer;
mod rotation;
mod scalar;
mod vector;

pub use error::IndexError;
pub use matrix::{Matrix, Matrix3};
pub use observer::Observer;
pub use rotation::rotation_matrix;
pub use scalar::Scalar;
pub use vector::{Vector, Vector3};
