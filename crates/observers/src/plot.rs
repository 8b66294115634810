//! Time-series plots of a run, drawn with egui.
//!
//! A [`PlotObserver`] keeps one [`Trace`] per plotted quantity and fills them
//! while the driver runs. Once the run is over, [`PlotObserver::show`] opens a
//! native window with every trace drawn against the same x axis.

use std::convert::Infallible;

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use tumble_core::Observer;
use tumble_solvers::transient::free_body::Event;

/// Window options for [`PlotObserver::show`].
///
/// ```ignore
/// plot.show(ShowConfig::new().title("Angular velocity").legend())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: String,
    x_label: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// Untitled window, x axis labeled `t`, no legend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }

    /// Labels the x axis, replacing the default `t`.
    #[must_use]
    pub fn x_label(self, label: impl Into<String>) -> Self {
        Self {
            x_label: Some(label.into()),
            ..self
        }
    }

    /// Shows a legend with each trace's name.
    #[must_use]
    pub fn legend(self) -> Self {
        Self {
            legend: true,
            ..self
        }
    }
}

/// Events that know how to place themselves on a plot with `N` traces.
///
/// An event whose [`x`][Plottable::x] is `None` is not plotted at all; a
/// `None` entry in [`traces`][Plottable::traces] leaves only that trace
/// without a point.
pub trait Plottable<const N: usize> {
    /// Position of this event on the x axis.
    fn x(&self) -> Option<f64>;

    /// One y value per trace, in trace order.
    fn traces(&self) -> [Option<f64>; N];
}

/// Free-body samples plot against time as `ω x`, `ω y`, `ω z` followed by the
/// tracked point's `P x`, `P y`, `P z`.
impl Plottable<6> for Event {
    fn x(&self) -> Option<f64> {
        Some(self.sample.time)
    }

    fn traces(&self) -> [Option<f64>; 6] {
        let omega = self.sample.angular_velocity;
        let point = self.sample.point;
        [omega.x(), omega.y(), omega.z(), point.x(), point.y(), point.z()].map(Some)
    }
}

/// A named series of `[x, y]` points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

/// Collects `N` traces while a run progresses.
///
/// Pass `&mut PlotObserver` to the driver when its events are
/// [`Plottable<N>`], or call [`record`][PlotObserver::record] from a closure
/// observer to plot something else.
///
/// ```ignore
/// let mut plot = PlotObserver::<6>::new(["ω x", "ω y", "ω z", "P x", "P y", "P z"]);
/// free_body::solve(&config, &mut plot)?;
/// plot.show(ShowConfig::new().title("Free body").legend())?;
/// ```
#[derive(Debug, Clone)]
pub struct PlotObserver<const N: usize> {
    traces: [Trace; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates empty traces with the given names, in plotting order.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            traces: names.map(|name| Trace {
                name: name.to_owned(),
                points: Vec::new(),
            }),
        }
    }

    /// Adds the point `(x, y)` to every trace whose `y` is `Some`.
    pub fn record(&mut self, x: f64, ys: [Option<f64>; N]) {
        for (trace, y) in self.traces.iter_mut().zip(ys) {
            if let Some(y) = y {
                trace.points.push([x, y]);
            }
        }
    }

    /// The traces collected so far.
    #[must_use]
    pub fn traces(&self) -> &[Trace; N] {
        &self.traces
    }

    /// Opens the plot window and blocks until the user closes it.
    ///
    /// # Errors
    ///
    /// Returns the `eframe` error if no native window can be opened.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let window = PlotWindow {
            traces: self.traces.into(),
            x_label: config.x_label.unwrap_or_else(|| "t".to_owned()),
            legend: config.legend,
        };
        eframe::run_native(
            &config.title,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(window))),
        )
    }
}

impl<const N: usize, E> Observer<E, Infallible> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<Infallible> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Lets the driver borrow the observer so it can still be shown afterwards.
impl<const N: usize, E> Observer<E, Infallible> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<Infallible> {
        (**self).observe(event)
    }
}

struct PlotWindow {
    traces: Vec<Trace>,
    x_label: String,
    legend: bool,
}

impl eframe::App for PlotWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let plot = Plot::new("tumble_plot").x_axis_label(self.x_label.as_str());
            let plot = if self.legend {
                plot.legend(Legend::default())
            } else {
                plot
            };
            plot.show(ui, |plot_ui| {
                for trace in &self.traces {
                    let points: PlotPoints = trace.points.iter().copied().collect();
                    plot_ui.line(Line::new(points).name(&trace.name));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tumble_core::Vector3;
    use tumble_solvers::transient::free_body::Sample;

    fn event(time: f64) -> Event {
        Event {
            step: 0,
            sample: Sample {
                time,
                velocity: Vector3::zeros(),
                position: Vector3::zeros(),
                angular_velocity: Vector3::new([1.0, 2.0, 3.0]),
                point: Vector3::new([4.0, 5.0, 6.0]),
            },
        }
    }

    fn observer() -> PlotObserver<6> {
        PlotObserver::new(["ω x", "ω y", "ω z", "P x", "P y", "P z"])
    }

    #[test]
    fn free_body_event_plots_omega_then_point() {
        let mut plot = observer();
        let _ = plot.observe(&event(0.5));

        for (trace, y) in plot.traces().iter().zip([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]) {
            assert_eq!(trace.points, [[0.5, y]]);
        }
        assert_eq!(plot.traces()[3].name, "P x");
    }

    #[test]
    fn borrowed_observer_accumulates_across_events() {
        fn feed<O: Observer<Event, Infallible>>(mut observer: O, times: &[f64]) {
            for &t in times {
                let _ = observer.observe(&event(t));
            }
        }

        let mut plot = observer();
        feed(&mut plot, &[0.0, 0.1]);
        assert_eq!(plot.traces()[0].points, [[0.0, 1.0], [0.1, 1.0]]);
    }

    #[test]
    fn show_config_defaults_and_overrides_the_x_label() {
        assert_eq!(ShowConfig::new().x_label, None);

        let config = ShowConfig::new().title("Free body").x_label("t [s]").legend();
        assert_eq!(config.title, "Free body");
        assert_eq!(config.x_label.as_deref(), Some("t [s]"));
        assert!(config.legend);
    }

    #[test]
    fn missing_values_leave_a_gap_in_one_trace_only() {
        let mut plot = PlotObserver::new(["left", "right"]);
        plot.record(1.0, [Some(10.0), None]);
        plot.record(2.0, [None, Some(20.0)]);

        let [left, right] = plot.traces();
        assert_eq!(left.points, [[1.0, 10.0]]);
        assert_eq!(right.points, [[2.0, 20.0]]);
    }
}
