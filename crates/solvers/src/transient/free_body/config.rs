use tumble_core::Vector3;

use crate::rigid::EulerParameters;

use super::State;

/// Tolerance, in steps, when converting the time span into a step count.
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Configuration for a free-body run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Fixed step size `h`.
    pub step_size: f64,
    /// Time at which the run ends.
    pub end_time: f64,
    /// Constant acceleration applied to the center of mass.
    pub gravity: Vector3,
    /// Inertia ratios of the body.
    pub euler: EulerParameters,
    /// State at the start of the run; its `time` is the start time.
    pub initial: State,
}

impl Config {
    /// Validates the step size, time span, and initial values.
    ///
    /// # Errors
    ///
    /// Returns an error if the step size is not positive and finite, the time
    /// span is not finite or runs backwards, the span holds more steps than a
    /// `usize` can count, or any vector is not finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err("step_size must be finite and positive");
        }
        if !self.initial.time.is_finite() || !self.end_time.is_finite() {
            return Err("start and end times must be finite");
        }
        if self.end_time < self.initial.time {
            return Err("end_time must not precede the initial time");
        }
        if !(self.step_span() < usize::MAX as f64) {
            return Err("time span holds too many steps");
        }
        if !self.gravity.is_finite() || !self.euler.gamma().is_finite() {
            return Err("gravity and euler parameters must be finite");
        }
        let State {
            velocity,
            position,
            angular_velocity,
            offset,
            ..
        } = self.initial;
        if ![velocity, position, angular_velocity, offset]
            .iter()
            .all(Vector3::is_finite)
        {
            return Err("initial state must be finite");
        }
        Ok(())
    }

    /// Number of whole steps of `step_size` that fit in the time span.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.step_span().floor() as usize
    }

    /// The time span measured in steps, before rounding down.
    fn step_span(&self) -> f64 {
        (self.end_time - self.initial.time) / self.step_size + STEP_COUNT_TOLERANCE
    }

    /// Time of step `n`, computed from the step counter rather than by
    /// repeated addition.
    #[must_use]
    pub fn time_at(&self, n: usize) -> f64 {
        self.initial.time + n as f64 * self.step_size
    }
}
