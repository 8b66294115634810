//! Drivers that advance a simulation state through fixed time steps.
//!
//! - [`free_body`] — a rigid body falling under constant gravity while
//!   rotating freely, tracking one body-fixed point in world space

pub mod free_body;
