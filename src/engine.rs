use log::debug;

use crate::body::SimulatedBody;
use crate::collisions;
use crate::forces;
use crate::prelude::*;

/// One fixed step over a body set: collisions, then gravity, then integration.
///
/// The same engine drives live bodies (integration is a no-op there and the
/// caller drains the accumulated forces into the external engine) and shadow
/// bodies during prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
	g: Scalar,
}

impl Engine {
	pub fn new(g: Scalar) -> Self {
		Engine { g }
	}

	pub fn gravitational_constant(&self) -> Scalar {
		self.g
	}

	pub fn step<B: SimulatedBody>(&self, bodies: &mut [B], dt: Scalar) {
		let events = collisions::detect_collisions(bodies);
		let newly_collided = collisions::resolve_collisions(bodies, &events);
		if newly_collided > 0 {
			debug!("{} bodies collided and froze", newly_collided);
		}

		forces::apply_gravity_forces(bodies, self.g);

		for body in bodies.iter_mut() {
			body.simulate(dt);
		}
	}

	/// Only the force sweep, as used by the live tick.
	pub fn apply_gravity_forces<B: SimulatedBody>(&self, bodies: &mut [B]) {
		forces::apply_gravity_forces(bodies, self.g);
	}

	/// Runs `steps` consecutive steps.
	pub fn run<B: SimulatedBody>(&self, bodies: &mut [B], dt: Scalar, steps: usize) {
		for _ in 0..steps {
			self.step(bodies, dt);
		}
	}
}
