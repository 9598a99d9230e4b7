//! The boundary to the external rigid-body engine that moves live bodies.

use crate::body::{BodyId, BodyProperties};
use crate::prelude::*;

/// What the core needs from the rigid-body engine in live mode.
///
/// The engine owns live positions and velocities and integrates them on its
/// own fixed step. The core only reads them and injects forces.
pub trait RigidBodyWorld {
	fn position(&self, id: BodyId) -> Option<Vec3>;

	fn velocity(&self, id: BodyId) -> Option<Vec3>;

	/// Force sink. The force acts over the engine's next step.
	fn add_force(&mut self, id: BodyId, force: Vec3);

	/// Whether the engine steps itself; this selects live vs predicting mode.
	fn is_auto_stepping(&self) -> bool;

	fn set_auto_stepping(&mut self, enabled: bool);
}

#[derive(Debug, Clone, PartialEq)]
struct WorldBody {
	id: BodyId,
	mass: Scalar,
	position: Vec3,
	velocity: Vec3,
	force: Vec3,
}

/// A minimal point-mass engine for headless runs and tests.
///
/// It applies queued forces with semi-implicit Euler when [`advance`] is
/// called while auto-stepping, and ignores rotation entirely.
///
/// [`advance`]: KinematicWorld::advance
#[derive(Debug, Clone, Default)]
pub struct KinematicWorld {
	bodies: Vec<WorldBody>,
	next_id: u32,
	auto_stepping: bool,
}

impl KinematicWorld {
	pub fn new() -> Self {
		KinematicWorld::default()
	}

	pub fn spawn(&mut self, properties: BodyProperties, position: Vec3, velocity: Vec3) -> BodyId {
		let id = BodyId(self.next_id);
		self.next_id += 1;
		self.bodies.push(WorldBody {
			id,
			mass: properties.mass(),
			position,
			velocity,
			force: Vec3::zeros(),
		});
		id
	}

	pub fn despawn(&mut self, id: BodyId) -> bool {
		let before = self.bodies.len();
		self.bodies.retain(|b| b.id != id);
		self.bodies.len() != before
	}

	pub fn set_position(&mut self, id: BodyId, position: Vec3) {
		if let Some(body) = self.body_mut(id) {
			body.position = position;
		}
	}

	pub fn set_velocity(&mut self, id: BodyId, velocity: Vec3) {
		if let Some(body) = self.body_mut(id) {
			body.velocity = velocity;
		}
	}

	/// Force queued for the next step.
	pub fn pending_force(&self, id: BodyId) -> Option<Vec3> {
		self.body(id).map(|b| b.force)
	}

	/// One engine step. Does nothing unless auto-stepping.
	pub fn advance(&mut self, dt: Scalar) {
		if !self.auto_stepping {
			return;
		}

		for body in self.bodies.iter_mut() {
			body.velocity += body.force / body.mass * dt;
			body.position += body.velocity * dt;
			body.force = Vec3::zeros();
		}
	}

	fn body(&self, id: BodyId) -> Option<&WorldBody> {
		self.bodies.iter().find(|b| b.id == id)
	}

	fn body_mut(&mut self, id: BodyId) -> Option<&mut WorldBody> {
		self.bodies.iter_mut().find(|b| b.id == id)
	}
}

impl RigidBodyWorld for KinematicWorld {
	fn position(&self, id: BodyId) -> Option<Vec3> {
		self.body(id).map(|b| b.position)
	}

	fn velocity(&self, id: BodyId) -> Option<Vec3> {
		self.body(id).map(|b| b.velocity)
	}

	fn add_force(&mut self, id: BodyId, force: Vec3) {
		if let Some(body) = self.body_mut(id) {
			body.force += force;
		}
	}

	fn is_auto_stepping(&self) -> bool {
		self.auto_stepping
	}

	fn set_auto_stepping(&mut self, enabled: bool) {
		self.auto_stepping = enabled;
	}
}
