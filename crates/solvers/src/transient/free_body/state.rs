use tumble_core::Vector3;

/// The full kinematic state advanced by the free-body driver.
///
/// Angular velocity is expressed in the body's principal-axis frame. The
/// tracked point's offset from the center of mass is rotated incrementally
/// each step; no attitude is stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    /// Simulation time.
    pub time: f64,
    /// Velocity of the center of mass.
    pub velocity: Vector3,
    /// Position of the center of mass.
    pub position: Vector3,
    /// Angular velocity in the body frame.
    pub angular_velocity: Vector3,
    /// Offset of the tracked body-fixed point from the center of mass.
    pub offset: Vector3,
}

impl State {
    /// World-space position of the tracked point.
    #[must_use]
    pub fn point(&self) -> Vector3 {
        self.position + self.offset
    }

    /// Captures the sampled fields of this state.
    #[must_use]
    pub fn sample(&self) -> Sample {
        Sample {
            time: self.time,
            velocity: self.velocity,
            position: self.position,
            angular_velocity: self.angular_velocity,
            point: self.point(),
        }
    }
}

/// A snapshot of the state handed to observers, taken once per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub velocity: Vector3,
    pub position: Vector3,
    pub angular_velocity: Vector3,
    /// World-space position of the tracked point.
    pub point: Vector3,
}
