use std::fmt;

use crate::error::{Error, Result};
use crate::integrator;
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Mass and collision radius of a body, validated once and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyProperties {
	mass: Scalar,
	radius: Scalar,
}

impl BodyProperties {
	/// Fails for a non-positive or non-finite mass and for a negative or
	/// non-finite radius.
	pub fn new(mass: Scalar, radius: Scalar) -> Result<Self> {
		if !mass.is_finite() {
			return Err(Error::NonFiniteValue { field: "mass" });
		}
		if mass <= 0.0 {
			return Err(Error::NonPositiveMass { mass });
		}
		if !radius.is_finite() {
			return Err(Error::NonFiniteValue { field: "radius" });
		}
		if radius < 0.0 {
			return Err(Error::NegativeRadius { radius });
		}
		Ok(BodyProperties { mass, radius })
	}

	pub fn mass(&self) -> Scalar {
		self.mass
	}

	pub fn radius(&self) -> Scalar {
		self.radius
	}
}

/// The surface the pairwise models and the engine work against.
///
/// Live and shadow bodies expose the same capabilities; what differs is who
/// owns the motion. A live body only collects forces for the external engine,
/// a shadow body integrates itself.
pub trait SimulatedBody {
	fn id(&self) -> BodyId;

	fn mass(&self) -> Scalar;

	fn radius(&self) -> Scalar;

	fn position(&self) -> Vec3;

	fn velocity(&self) -> Vec3;

	fn add_force(&mut self, force: Vec3);

	/// Resolution hook called for both bodies of a colliding pair.
	fn collide(&mut self);

	fn has_collided(&self) -> bool;

	/// Advances the body by one step and consumes the accumulated force.
	fn simulate(&mut self, dt: Scalar);

	fn momentum(&self) -> Vec3 {
		self.velocity() * self.mass()
	}

	fn kinetic_energy(&self) -> Scalar {
		0.5 * self.mass() * self.velocity().norm_squared()
	}

	fn distance_to(&self, other: &dyn SimulatedBody) -> Scalar {
		(other.position() - self.position()).norm()
	}
}

/// A body whose transform is driven by the external rigid-body engine.
///
/// Position and velocity are a snapshot read at the start of the tick. The
/// accumulated force is drained with [`LiveBody::take_force`] and handed to
/// the engine's force sink.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveBody {
	pub id: BodyId,
	pub properties: BodyProperties,
	pub position: Vec3,
	pub velocity: Vec3,
	force: Vec3,
}

impl LiveBody {
	pub fn new(id: BodyId, properties: BodyProperties, position: Vec3, velocity: Vec3) -> Self {
		LiveBody {
			id,
			properties,
			position,
			velocity,
			force: Vec3::zeros(),
		}
	}

	pub fn force(&self) -> Vec3 {
		self.force
	}

	pub fn take_force(&mut self) -> Vec3 {
		std::mem::replace(&mut self.force, Vec3::zeros())
	}
}

impl SimulatedBody for LiveBody {
	fn id(&self) -> BodyId {
		self.id
	}

	fn mass(&self) -> Scalar {
		self.properties.mass()
	}

	fn radius(&self) -> Scalar {
		self.properties.radius()
	}

	fn position(&self) -> Vec3 {
		self.position
	}

	fn velocity(&self) -> Vec3 {
		self.velocity
	}

	fn add_force(&mut self, force: Vec3) {
		self.force += force;
	}

	// Contacts between live bodies belong to the external engine.
	fn collide(&mut self) {}

	fn has_collided(&self) -> bool {
		false
	}

	// The external engine integrates; the force stays queued for the sink.
	fn simulate(&mut self, _dt: Scalar) {}
}

/// A core-owned clone used only inside a prediction run.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowBody {
	pub id: BodyId,
	pub properties: BodyProperties,
	pub position: Vec3,
	pub velocity: Vec3,
	pub force: Vec3,
	pub has_collided: bool,
	/// Index of the reference body inside the same shadow set.
	pub reference: Option<usize>,
}

impl ShadowBody {
	pub fn new(id: BodyId, properties: BodyProperties, position: Vec3, velocity: Vec3) -> Self {
		ShadowBody {
			id,
			properties,
			position,
			velocity,
			force: Vec3::zeros(),
			has_collided: false,
			reference: None,
		}
	}

	/// Clones a live body with its collision state cleared.
	pub fn from_live(live: &LiveBody) -> Self {
		ShadowBody::new(live.id, live.properties, live.position, live.velocity)
	}

	pub fn with_reference(mut self, reference: Option<usize>) -> Self {
		self.reference = reference;
		self
	}
}

impl SimulatedBody for ShadowBody {
	fn id(&self) -> BodyId {
		self.id
	}

	fn mass(&self) -> Scalar {
		self.properties.mass()
	}

	fn radius(&self) -> Scalar {
		self.properties.radius()
	}

	fn position(&self) -> Vec3 {
		self.position
	}

	fn velocity(&self) -> Vec3 {
		self.velocity
	}

	fn add_force(&mut self, force: Vec3) {
		self.force += force;
	}

	fn collide(&mut self) {
		self.has_collided = true;
	}

	fn has_collided(&self) -> bool {
		self.has_collided
	}

	fn simulate(&mut self, dt: Scalar) {
		integrator::integrate(self, dt);
	}
}
