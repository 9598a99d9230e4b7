use log::{debug, info, warn};
use palette::Srgba;

use crate::body::{BodyId, LiveBody};
use crate::config::{PredictorConfig, SimulatorConfig, MAX_TIME_SCALE};
use crate::engine::Engine;
use crate::error::Result;
use crate::predictor::TrajectoryPredictor;
use crate::prelude::*;
use crate::registry::{BodyDescriptor, BodyRegistry, RegisteredBody};
use crate::sphere::VisualSphere;
use crate::trajectory::{OrbitPath, OrbitStyle, Trajectory, ORBIT_BASE_ALPHA};
use crate::world::RigidBodyWorld;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	/// The external engine steps itself and receives gravity every fixed tick
	Live,
	/// Nothing moves; orbits are predicted on demand
	Predicting,
}

/// Fired when live mode is entered from a stopped simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationStarted {
	pub fixed_delta_time: Scalar,
}

type StartedListener = Box<dyn FnMut(&SimulationStarted)>;

/// Owns the live registry and decides, per tick, between injecting gravity
/// into the external engine and predicting orbits.
///
/// The simulation is stopped until live mode is first entered. Pausing
/// (turning auto-stepping off) keeps it started; [`Simulator::stop`] returns
/// it to stopped so the next entry into live mode fires
/// [`SimulationStarted`] again.
pub struct Simulator<W> {
	world: W,
	registry: BodyRegistry,
	engine: Engine,
	predictor: TrajectoryPredictor,
	orbit_alpha: f32,
	orbit_width: f32,
	time_scale: Scalar,
	base_fixed_delta_time: Scalar,
	has_started: bool,
	orbits: Vec<OrbitPath>,
	started_listeners: Vec<StartedListener>,
}

impl<W: RigidBodyWorld> Simulator<W> {
	pub fn new(world: W, config: &SimulatorConfig, predictor: &PredictorConfig) -> Result<Self> {
		config.validate()?;
		predictor.validate()?;

		let mut simulator = Simulator {
			world,
			registry: BodyRegistry::new(),
			engine: Engine::new(config.gravitational_constant),
			predictor: TrajectoryPredictor::from_config(predictor),
			orbit_alpha: predictor.orbit_alpha,
			orbit_width: predictor.orbit_width,
			time_scale: clamp_time_scale(config.time_scale),
			base_fixed_delta_time: config.base_fixed_delta_time,
			has_started: false,
			orbits: Vec::new(),
			started_listeners: Vec::new(),
		};
		// Started fires from the first tick, once listeners have subscribed
		simulator.world.set_auto_stepping(config.auto_simulation);

		Ok(simulator)
	}

	pub fn world(&self) -> &W {
		&self.world
	}

	/// Direct access to the external engine, e.g. to step it.
	pub fn world_mut(&mut self) -> &mut W {
		&mut self.world
	}

	pub fn registry(&self) -> &BodyRegistry {
		&self.registry
	}

	pub fn engine(&self) -> &Engine {
		&self.engine
	}

	pub fn predictor(&self) -> &TrajectoryPredictor {
		&self.predictor
	}

	pub fn predictor_mut(&mut self) -> &mut TrajectoryPredictor {
		&mut self.predictor
	}

	/// Called when a body becomes active. Takes effect from the next tick.
	pub fn register(&mut self, id: BodyId, descriptor: BodyDescriptor) -> Result<()> {
		if self.world.position(id).is_none() {
			warn!("body {} ({}) is not known to the physics world yet", id, descriptor.name);
		}
		self.registry.register(id, descriptor)
	}

	/// Called when a body becomes inactive.
	pub fn unregister(&mut self, id: BodyId) -> Option<RegisteredBody> {
		self.orbits.retain(|o| o.body != id);
		self.registry.unregister(id)
	}

	pub fn on_simulation_started<F>(&mut self, listener: F)
	where
		F: FnMut(&SimulationStarted) + 'static,
	{
		self.started_listeners.push(Box::new(listener));
	}

	pub fn mode(&self) -> Mode {
		if self.world.is_auto_stepping() {
			Mode::Live
		} else {
			Mode::Predicting
		}
	}

	pub fn has_started(&self) -> bool {
		self.has_started
	}

	/// Turns the external engine's auto-stepping on or off.
	///
	/// Returns the started event when this call moved a stopped simulation
	/// into live mode.
	pub fn set_auto_simulation(&mut self, enabled: bool) -> Option<SimulationStarted> {
		let was_live = self.world.is_auto_stepping();
		self.world.set_auto_stepping(enabled);

		if !enabled {
			if was_live {
				info!("simulation paused");
			}
			return None;
		}
		if self.has_started {
			if !was_live {
				info!("simulation resumed");
			}
			return None;
		}
		Some(self.start())
	}

	pub fn toggle_auto_simulation(&mut self) -> Option<SimulationStarted> {
		let enabled = !self.world.is_auto_stepping();
		self.set_auto_simulation(enabled)
	}

	/// Leaves live mode and forgets that the simulation ever started.
	pub fn stop(&mut self) {
		self.world.set_auto_stepping(false);
		if self.has_started {
			info!("simulation stopped");
		}
		self.has_started = false;
	}

	pub fn time_scale(&self) -> Scalar {
		self.time_scale
	}

	/// Out-of-range values are clamped to [0, 10].
	pub fn set_time_scale(&mut self, time_scale: Scalar) {
		if time_scale.is_nan() {
			warn!("ignoring NaN time scale");
			return;
		}
		self.time_scale = clamp_time_scale(time_scale);
		debug!("fixed delta time is now {}", self.fixed_delta_time());
	}

	pub fn nudge_time_scale(&mut self, delta: Scalar) {
		let time_scale = self.time_scale + delta;
		self.set_time_scale(time_scale.max(0.0).min(MAX_TIME_SCALE));
	}

	/// Step used by the external engine and by prediction runs.
	pub fn fixed_delta_time(&self) -> Scalar {
		self.time_scale * self.base_fixed_delta_time
	}

	/// Fixed tick. In live mode injects one step's worth of gravity into the
	/// external engine; in predicting mode does nothing.
	pub fn fixed_update(&mut self) {
		self.observe_mode();
		if self.mode() != Mode::Live {
			return;
		}

		let mut bodies = self.live_bodies();
		self.engine.apply_gravity_forces(&mut bodies);

		for body in bodies.iter_mut() {
			let force = body.take_force();
			self.world.add_force(body.id, force);
		}
	}

	/// Visual refresh. In predicting mode replaces the published orbits with
	/// a fresh prediction.
	pub fn update(&mut self) -> &[OrbitPath] {
		self.observe_mode();
		if self.mode() == Mode::Predicting {
			self.orbits = self.predict_orbits();
		}
		&self.orbits
	}

	/// Orbits published by the last prediction, in registry order.
	pub fn orbits(&self) -> &[OrbitPath] {
		&self.orbits
	}

	/// Runs the predictor on the current registry without publishing.
	pub fn predict(&self) -> Vec<Trajectory> {
		let seeds = self.prediction_seeds();
		self.predictor.predict(&self.engine, &seeds, self.fixed_delta_time())
	}

	/// Ray-tracing snapshot of every registered body not excluded from it.
	pub fn visual_spheres(&self) -> Vec<VisualSphere> {
		self.registry
			.iter()
			.filter(|b| !b.descriptor.ignore_in_ray_tracing)
			.filter_map(|b| {
				let position = self.world.position(b.id)?;
				Some(VisualSphere::new(
					position,
					b.descriptor.properties.radius(),
					&b.descriptor.material,
				))
			})
			.collect()
	}

	/// Position a camera should follow: the given body, or the mean position
	/// of all registered bodies.
	pub fn follow_target(&self, body: Option<BodyId>) -> Option<Vec3> {
		if let Some(id) = body {
			return self.world.position(id);
		}

		let positions: Vec<Vec3> = self
			.registry
			.iter()
			.filter_map(|b| self.world.position(b.id))
			.collect();
		if positions.is_empty() {
			return None;
		}
		let sum = positions.iter().fold(Vec3::zeros(), |acc, p| acc + p);
		Some(sum / positions.len() as Scalar)
	}

	fn start(&mut self) -> SimulationStarted {
		self.has_started = true;
		let event = SimulationStarted {
			fixed_delta_time: self.fixed_delta_time(),
		};
		info!("simulation started (fixed delta time {})", event.fixed_delta_time);

		for orbit in self.orbits.iter_mut() {
			*orbit = OrbitPath::cleared(orbit.body);
		}
		for listener in self.started_listeners.iter_mut() {
			listener(&event);
		}
		event
	}

	// The mode is owned by the external engine, which may have been switched
	// to auto-stepping behind our back.
	fn observe_mode(&mut self) {
		if self.world.is_auto_stepping() && !self.has_started {
			self.start();
		}
	}

	fn live_bodies(&self) -> Vec<LiveBody> {
		self.registry
			.iter()
			.filter_map(|b| {
				let position = self.world.position(b.id);
				let velocity = self.world.velocity(b.id);
				match (position, velocity) {
					(Some(position), Some(velocity)) => {
						Some(LiveBody::new(b.id, b.descriptor.properties, position, velocity))
					}
					_ => {
						warn!("body {} has no transform in the physics world; skipping", b.id);
						None
					}
				}
			})
			.collect()
	}

	fn prediction_seeds(&self) -> Vec<(LiveBody, Option<BodyId>)> {
		let use_initial_velocity = self.mode() == Mode::Predicting && !self.has_started;

		self.live_bodies()
			.into_iter()
			.filter_map(|mut live| {
				let descriptor = &self.registry.get(live.id)?.descriptor;
				if use_initial_velocity {
					live.velocity = descriptor.initial_velocity;
				}
				Some((live, descriptor.reference))
			})
			.collect()
	}

	fn predict_orbits(&self) -> Vec<OrbitPath> {
		self.predict()
			.into_iter()
			.map(|trajectory| match self.registry.get(trajectory.body) {
				Some(b) if b.descriptor.draw_orbit => {
					let color = b.descriptor.material.color;
					let style = OrbitStyle {
						color: Srgba::new(color.red, color.green, color.blue, ORBIT_BASE_ALPHA),
						start_color_multiplier: 1.0,
						end_color_multiplier: self.orbit_alpha,
						width_multiplier: self.orbit_width,
					};
					OrbitPath {
						body: trajectory.body,
						points: trajectory.into_iter().collect(),
						style: Some(style),
					}
				}
				_ => OrbitPath::cleared(trajectory.body),
			})
			.collect()
	}
}

fn clamp_time_scale(time_scale: Scalar) -> Scalar {
	if time_scale < 0.0 || time_scale > MAX_TIME_SCALE {
		warn!(
			"time scale {} is outside [0, {}], clamping",
			time_scale, MAX_TIME_SCALE
		);
	}
	time_scale.max(0.0).min(MAX_TIME_SCALE)
}
