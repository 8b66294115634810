//! Reusable observers for Tumble.
//!
//! This crate provides [`Observer`] implementations that record the samples a
//! simulation run emits.
//!
//! # Modules
//!
//! - [`csv`] — A column-oriented table written as comma-separated text, and
//!   [`CsvObserver`] which fills one from free-body samples
//!
//! # Features
//!
//! - `plot` — Adds the `plot` module and `PlotObserver`, which draws a run's
//!   traces in a native egui window (pulls in `eframe` and `egui_plot`).
//!
//! [`Observer`]: tumble_core::Observer

pub mod csv;

#[cfg(feature = "plot")]
pub mod plot;

pub use csv::{CsvObserver, CsvTable};

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig, Trace};
