//! Run files: a TOML description of one free-body run.
//!
//! Every field is optional and falls back to the default cone scenario, so an
//! empty file is a valid run file. Vectors are written as three-element
//! arrays in SI units.
//!
//! ```toml
//! step_size = 0.05        # s
//! start_time = 0.0        # s
//! end_time = 20.0         # s
//! gravity = [0.0, 0.0, -9.8]
//!
//! [cone]
//! mass = 10.0             # kg
//! radius = 1.0            # m
//! height = 4.0            # m
//!
//! [initial]
//! position = [0.0, 0.0, 0.0]
//! velocity = [0.0, 0.0, 200.0]
//! angular_velocity = [3.0, 1.0, 2.0]
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use tumble_core::Vector3;
use tumble_solvers::{
    rigid::EulerParameters,
    transient::free_body::{self, State},
};

use crate::shape::Cone;

/// A complete run description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub step_size: f64,
    pub start_time: f64,
    pub end_time: f64,
    pub gravity: [f64; 3],
    pub cone: Cone,
    pub initial: InitialConfig,
}

/// Initial motion of the body. Angular velocity is in the body frame.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitialConfig {
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    pub angular_velocity: [f64; 3],
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            step_size: 0.05,
            start_time: 0.0,
            end_time: 20.0,
            gravity: [0.0, 0.0, -9.8],
            cone: Cone::default(),
            initial: InitialConfig::default(),
        }
    }
}

impl Default for InitialConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            velocity: [0.0, 0.0, 200.0],
            angular_velocity: [3.0, 1.0, 2.0],
        }
    }
}

impl RunConfig {
    /// Parses a run file from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or has unknown or
    /// mistyped fields.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid run file")
    }

    /// Reads and parses the run file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Builds the driver configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the cone does not have strictly positive moments.
    /// Step size and time span are checked later by the driver itself.
    pub fn to_driver(&self) -> Result<free_body::Config> {
        let inertia = self.cone.inertia().context("invalid cone")?;

        Ok(free_body::Config {
            step_size: self.step_size,
            end_time: self.end_time,
            gravity: Vector3::new(self.gravity),
            euler: EulerParameters::from(&inertia),
            initial: State {
                time: self.start_time,
                velocity: Vector3::new(self.initial.velocity),
                position: Vector3::new(self.initial.position),
                angular_velocity: Vector3::new(self.initial.angular_velocity),
                offset: self.cone.tracked_offset(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::meter, mass::kilogram};

    #[test]
    fn empty_file_is_the_default_run() {
        assert_eq!(RunConfig::from_toml("").unwrap(), RunConfig::default());
    }

    #[test]
    fn bundled_scenario_parses() {
        let config = RunConfig::from_toml(include_str!("../scenarios/cone.toml"))
            .expect("bundled scenario is valid");
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let config = RunConfig::from_toml(
            r"
            end_time = 5.0

            [cone]
            radius = 2.0

            [initial]
            angular_velocity = [0.0, 0.0, 1.0]
            ",
        )
        .unwrap();

        assert_eq!(config.end_time, 5.0);
        assert_eq!(config.step_size, 0.05);
        assert_eq!(config.cone.radius.get::<meter>(), 2.0);
        assert_eq!(config.cone.mass.get::<kilogram>(), 10.0);
        assert_eq!(config.initial.velocity, [0.0, 0.0, 200.0]);
        assert_eq!(config.initial.angular_velocity, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(RunConfig::from_toml("stepsize = 0.1").is_err());
        assert!(RunConfig::from_toml("[cone]\ndensity = 1.0").is_err());
    }

    #[test]
    fn default_run_maps_to_the_cone_driver() {
        let driver = RunConfig::default().to_driver().unwrap();

        assert_eq!(driver.steps(), 400);
        assert_eq!(driver.initial.offset, Vector3::new([0.0, 0.75, 0.0]));
        assert_eq!(driver.gravity, Vector3::new([0.0, 0.0, -9.8]));

        // I₁ = I₂ = 7.5, I₃ = 3: γ = (−0.6, 0.6, 0).
        let gamma = driver.euler.gamma();
        assert_relative_eq!(gamma.x(), -0.6, max_relative = 1e-12);
        assert_relative_eq!(gamma.y(), 0.6, max_relative = 1e-12);
        assert_eq!(gamma.z(), 0.0);
    }

    #[test]
    fn bad_cone_is_reported() {
        let mut config = RunConfig::default();
        config.cone.mass = uom::si::f64::Mass::new::<kilogram>(0.0);
        assert!(config.to_driver().is_err());
    }
}
