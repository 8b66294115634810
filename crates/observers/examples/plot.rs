//! Interactive visualization of a free rigid body.
//!
//! Integrates the default solid cone (mass 10, radius 1, height 4) tumbling
//! under gravity and opens a plot window.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- omega
//! cargo run --example plot --features plot -- point
//! cargo run --example plot --features plot -- point 0.2
//! ```
//!
//! # Modes
//!
//! - **omega [dt]** — Body-frame angular velocity. The cone is axisymmetric, so
//!   ω z stays fixed while ω x and ω y trade off sinusoidally.
//!
//! - **point [dt]** — World position of the tracked rim point relative to the
//!   center of mass. Larger steps visibly coarsen the incremental rotation.

use std::error::Error;

use tumble_core::Vector3;
use tumble_observers::{PlotObserver, ShowConfig};
use tumble_solvers::{
    rigid::{EulerParameters, PrincipalInertia},
    transient::free_body::{self, Config, Event, State},
};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "omega".into());
    let dt = std::env::args()
        .nth(2)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid step size, expected a number such as 0.1");
            std::process::exit(1);
        })
        .unwrap_or(0.05);

    let config = cone(dt)?;
    match mode.as_str() {
        "omega" => omega(&config),
        "point" => point(&config),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [omega|point] [dt]");
            std::process::exit(1);
        }
    }
}

/// The default cone with a rim point at three quarters of the base radius.
fn cone(step_size: f64) -> Result<Config, Box<dyn Error>> {
    let (mass, radius, height) = (10.0, 1.0, 4.0);
    let transverse = 3.0 * mass / 20.0 * (radius * radius + height * height / 4.0);
    let axial = 3.0 * mass / 10.0 * radius * radius;
    let inertia = PrincipalInertia::new([transverse, transverse, axial])?;

    Ok(Config {
        step_size,
        end_time: 20.0,
        gravity: Vector3::new([0.0, 0.0, -9.8]),
        euler: EulerParameters::from(&inertia),
        initial: State {
            time: 0.0,
            velocity: Vector3::new([0.0, 0.0, 200.0]),
            position: Vector3::zeros(),
            angular_velocity: Vector3::new([3.0, 1.0, 2.0]),
            offset: Vector3::new([0.0, 0.75 * radius, 0.0]),
        },
    })
}

// --- Omega -------------------------------------------------------------------

fn omega(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut plot = PlotObserver::<3>::new(["ω x", "ω y", "ω z"]);

    free_body::run(config, |event: &Event| {
        let w = event.sample.angular_velocity;
        plot.record(event.sample.time, [Some(w.x()), Some(w.y()), Some(w.z())]);
        None
    })?;

    plot.show(ShowConfig::new().title("Angular velocity").x_label("t [s]").legend())?;
    Ok(())
}

// --- Point -------------------------------------------------------------------

fn point(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut plot = PlotObserver::<3>::new(["P x", "P y", "P z"]);

    free_body::run(config, |event: &Event| {
        let offset = event.sample.point - event.sample.position;
        plot.record(
            event.sample.time,
            [Some(offset.x()), Some(offset.y()), Some(offset.z())],
        );
        None
    })?;

    plot.show(ShowConfig::new().title("Tracked point").x_label("t [s]").legend())?;
    Ok(())
}
