//! Runs a free rigid-body simulation and writes the samples to a CSV file.
//!
//! ```text
//! tumble                                  # built-in cone scenario
//! tumble --config scenarios/cone.toml     # scenario from a run file
//! tumble --out-dir results/ --plot        # with the `plot` feature
//! ```

mod config;
mod shape;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use jiff::Timestamp;
use tumble_observers::{CsvObserver, csv::results_file_name};
use tumble_solvers::transient::free_body::{self, Event};

use crate::config::RunConfig;

#[derive(Parser, Debug)]
#[command(version, about = "Integrate a tumbling rigid body and write the trajectory as CSV")]
struct Args {
    /// TOML run file; the built-in cone scenario is used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the results file is written to.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Open a plot of ω and the tracked point once the run finishes.
    ///
    /// Requires a build with the `plot` feature.
    #[arg(long)]
    plot: bool,
}

fn main() -> Result<()> {
    run(&Args::parse())?;
    Ok(())
}

/// Runs the simulation described by `args` and returns the path of the
/// results file.
fn run(args: &Args) -> Result<PathBuf> {
    if args.plot && !cfg!(feature = "plot") {
        anyhow::bail!("--plot requires tumble to be built with the `plot` feature");
    }

    let run_file = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    let config = run_file.to_driver()?;

    let mut csv = CsvObserver::new();

    #[cfg(feature = "plot")]
    let mut plot = args.plot.then(|| {
        tumble_observers::PlotObserver::<6>::new(["ω x", "ω y", "ω z", "P x", "P y", "P z"])
    });

    let last = free_body::run(&config, |event: &Event| {
        csv.record(&event.sample);
        #[cfg(feature = "plot")]
        if let Some(plot) = plot.as_mut() {
            let _ = tumble_core::Observer::observe(plot, event);
        }
        None
    })
    .context("simulation failed")?;

    let path = args
        .out_dir
        .join(results_file_name(Timestamp::now().as_second()));
    csv.table()
        .write_to_file(&path)
        .context("failed to write results")?;

    println!(
        "wrote {} samples ({} steps) to {}",
        csv.table().height(),
        config.steps(),
        path.display()
    );
    println!(
        "t = {}: |ω| = {}, tracked point at {}",
        last.time,
        last.angular_velocity.length(),
        last.point
    );

    #[cfg(feature = "plot")]
    if let Some(plot) = plot {
        plot.show(
            tumble_observers::ShowConfig::new()
                .title("Free body")
                .x_label("t [s]")
                .legend(),
        )
        .map_err(|err| anyhow::anyhow!("failed to open plot window: {err}"))?;
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_to_the_current_directory() {
        let args = Args::try_parse_from(["tumble"]).unwrap();
        assert_eq!(args.config, None);
        assert_eq!(args.out_dir, PathBuf::from("."));
        assert!(!args.plot);
    }

    #[test]
    fn parses_paths() {
        let args =
            Args::try_parse_from(["tumble", "-c", "scenarios/cone.toml", "--out-dir", "out"])
                .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("scenarios/cone.toml")));
        assert_eq!(args.out_dir, PathBuf::from("out"));
    }

    #[test]
    fn run_writes_a_timestamped_results_file() {
        let out_dir = std::env::temp_dir().join("tumble-cli-run-writes-results");
        std::fs::create_dir_all(&out_dir).unwrap();

        let args =
            Args::try_parse_from(["tumble", "--out-dir", out_dir.to_str().unwrap()]).unwrap();
        let path = run(&args).unwrap();

        assert_eq!(path.parent(), Some(out_dir.as_path()));
        let name = path.file_name().unwrap().to_str().unwrap();
        let seconds = name
            .strip_prefix("results-")
            .and_then(|rest| rest.strip_suffix(".csv"))
            .unwrap();
        assert!(seconds.parse::<i64>().unwrap() > 0);

        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(text.lines().count(), 402);
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("t,v z,pos z,omega x,omega y,omega z,P x,P y,P z")
        );
        assert_eq!(lines.next(), Some("0,200,0,3,1,2,0,0.75,0"));
    }

    #[test]
    fn missing_run_file_is_reported() {
        let args = Args::try_parse_from(["tumble", "-c", "no/such/run.toml"]).unwrap();
        let err = run(&args).unwrap_err();
        assert!(format!("{err:#}").contains("run.toml"));
    }
}
