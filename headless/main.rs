use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};

use orbits::config::ScenarioConfig;
use orbits::controller::Simulator;
use orbits::prelude::*;
use orbits::scenario::build_simulator;
use orbits::world::KinematicWorld;

/// Runs a scenario without a renderer: predicts orbits, then simulates live.
#[derive(Parser, Debug)]
struct Args {
	/// Scenario file; the built-in sun/planet/moon scenario when omitted
	#[arg(short, long)]
	file: Option<PathBuf>,

	/// Fixed ticks to run in live mode
	#[arg(short, long, default_value_t = 500)]
	ticks: usize,

	/// Log debug output
	#[arg(short, long)]
	verbose: bool,
}

const BUILTIN_SCENARIO: &str = include_str!("../scenarios/sun_planet_moon.yaml");

fn setup_logging(level: log::LevelFilter) -> Result<()> {
	fern::Dispatch::new()
		.format(|out, message, record| {
			out.finish(format_args!(
				"{}[{}][{}] {}",
				chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
				record.target(),
				record.level(),
				message
			))
		})
		.level(level)
		.chain(std::io::stdout())
		.apply()?;
	Ok(())
}

fn load_scenario(file: Option<&PathBuf>) -> Result<ScenarioConfig> {
	let source = match file {
		Some(path) => std::fs::read_to_string(path)
			.with_context(|| format!("reading scenario {}", path.display()))?,
		None => BUILTIN_SCENARIO.to_string(),
	};
	Ok(ScenarioConfig::from_yaml(&source)?)
}

fn report_orbits(simulator: &mut Simulator<KinematicWorld>) {
	let orbits = simulator.update().to_vec();
	for orbit in orbits {
		let name = simulator
			.registry()
			.get(orbit.body)
			.map(|b| b.descriptor.name.as_str())
			.unwrap_or("?");
		match orbit.points.last() {
			Some(last) if orbit.style.is_some() => info!(
				"orbit of {}: {} points, ends at ({:.2}, {:.2}, {:.2})",
				name,
				orbit.points.len(),
				last.x,
				last.y,
				last.z
			),
			_ => debug!("orbit of {} is not drawn", name),
		}
	}
}

fn main() -> Result<()> {
	let args = Args::parse();
	setup_logging(if args.verbose {
		log::LevelFilter::Debug
	} else {
		log::LevelFilter::Info
	})?;

	let scenario = load_scenario(args.file.as_ref())?;
	let mut simulator = build_simulator(&scenario)?;
	simulator.on_simulation_started(|event| {
		info!("orbits cleared, stepping every {}s", event.fixed_delta_time)
	});
	info!(
		"loaded {} bodies, predicting {} steps",
		simulator.registry().len(),
		simulator.predictor().number_of_steps()
	);

	report_orbits(&mut simulator);

	if simulator.fixed_delta_time() == 0.0 {
		warn!("time scale is zero, live bodies will not move");
	}
	simulator.set_auto_simulation(true);
	for _ in 0..args.ticks {
		simulator.fixed_update();
		let dt = simulator.fixed_delta_time();
		simulator.world_mut().advance(dt);
	}

	for body in simulator.registry().iter() {
		if let Some(position) = simulator.world().position(body.id) {
			info!(
				"{} after {} ticks: ({:.2}, {:.2}, {:.2})",
				body.descriptor.name, args.ticks, position.x, position.y, position.z
			);
		}
	}

	simulator.set_auto_simulation(false);
	report_orbits(&mut simulator);

	Ok(())
}
