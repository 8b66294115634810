//! Free rigid-body driver.
//!
//! Advances a rigid body that falls under constant gravity while rotating
//! freely, and tracks one body-fixed point in world space. Each step:
//!
//! 1. Advances velocity and position with semi-implicit Euler.
//! 2. Advances the body-frame angular velocity with RK4 on Euler's equations.
//! 3. Rotates the tracked point's offset by `|ω| h` about `ω / |ω|`, using the
//!    new angular velocity.
//! 4. Samples the state, including the point's world position.
//!
//! No attitude is stored. The offset is rotated by each step's small rotation
//! in turn, so continuous rotation is approximated by a sequence of discrete
//! ones and the tracked point carries an error controlled by the step size.
//! When ω is exactly zero the offset is left unrotated for that step.
//!
//! # Example
//!
//! ```ignore
//! use tumble_solvers::transient::free_body;
//!
//! let solution = free_body::solve_unobserved(&config)?;
//!
//! for sample in &solution.history {
//!     println!("t={}: {}", sample.time, sample.point);
//! }
//! ```

mod config;
mod error;
mod event;
mod solution;
mod state;

pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::Solution;
pub use state::{Sample, State};

use std::convert::Infallible;

use tumble_core::{Observer, rotation_matrix};

use crate::{ode::semi_implicit_euler, rigid::step_angular_velocity};

/// Runs the driver from the initial state to the configured end time,
/// keeping every sample.
///
/// # Algorithm
///
/// 1. Sample the initial state and emit it as step 0.
/// 2. For each step `n` in `1..=config.steps()`, [`advance`] the state, set its
///    time to `t₀ + n h`, and emit the sample.
/// 3. Return the solution with the full history.
///
/// # Observer
///
/// The observer receives an [`Event`] for every sample. Its action type is
/// [`Infallible`], so it can watch the run but never cut it short.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if [`Config::validate`] rejects the config.
pub fn solve<Obs>(config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    Obs: Observer<Event, Infallible>,
{
    let mut history = Vec::new();
    run(config, |event: &Event| {
        history.push(event.sample);
        observer.observe(event)
    })?;

    Ok(Solution {
        history,
        steps: config.steps(),
    })
}

/// Runs the driver like [`solve`] but keeps only the final sample.
///
/// Callers that record samples through their observer use this to avoid a
/// second copy of the run.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if [`Config::validate`] rejects the config.
pub fn run<Obs>(config: &Config, mut observer: Obs) -> Result<Sample, Error>
where
    Obs: Observer<Event, Infallible>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let mut state = config.initial;
    let _ = observer.observe(&Event {
        step: 0,
        sample: state.sample(),
    });

    for step in 1..=config.steps() {
        state = advance(config, &state);
        state.time = config.time_at(step);
        let _ = observer.observe(&Event {
            step,
            sample: state.sample(),
        });
    }

    Ok(state.sample())
}

/// Runs the driver without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if [`Config::validate`] rejects the config.
pub fn solve_unobserved(config: &Config) -> Result<Solution, Error> {
    solve(config, ())
}

/// Advances `state` by one step of `config.step_size`.
///
/// The returned state's time is `state.time + h`; [`solve`] overwrites it with
/// the drift-free `t₀ + n h`.
#[must_use]
pub fn advance(config: &Config, state: &State) -> State {
    let h = config.step_size;
    let gravity = config.gravity;

    let (velocity, position) = semi_implicit_euler::step(
        state.time,
        h,
        |_, _| gravity,
        state.velocity,
        state.position,
    );

    let angular_velocity = step_angular_velocity(h, &config.euler, state.angular_velocity);

    let offset = match angular_velocity.try_normalized() {
        Some(axis) => {
            let angle = angular_velocity.length() * h;
            rotation_matrix(axis, angle) * state.offset
        }
        None => state.offset,
    };

    State {
        time: state.time + h,
        velocity,
        position,
        angular_velocity,
        offset,
    }
}
