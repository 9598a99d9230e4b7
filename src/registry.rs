use log::debug;

use crate::body::{BodyId, BodyProperties};
use crate::error::{Error, Result};
use crate::prelude::*;
use crate::sphere::Material;

/// Everything the core keeps about an active body besides its live transform.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDescriptor {
	pub name: String,
	pub properties: BodyProperties,
	/// Velocity used for predictions until the simulation first starts
	pub initial_velocity: Vec3,
	/// Body whose predicted motion this body's orbit is drawn relative to
	pub reference: Option<BodyId>,
	pub draw_orbit: bool,
	pub material: Material,
	pub ignore_in_ray_tracing: bool,
}

impl BodyDescriptor {
	pub fn new(name: impl Into<String>, properties: BodyProperties) -> Self {
		BodyDescriptor {
			name: name.into(),
			properties,
			initial_velocity: Vec3::zeros(),
			reference: None,
			draw_orbit: false,
			material: Material::default(),
			ignore_in_ray_tracing: false,
		}
	}

	pub fn with_initial_velocity(mut self, velocity: Vec3) -> Self {
		self.initial_velocity = velocity;
		self
	}

	pub fn with_reference(mut self, reference: BodyId) -> Self {
		self.reference = Some(reference);
		self
	}

	pub fn with_orbit(mut self, draw_orbit: bool) -> Self {
		self.draw_orbit = draw_orbit;
		self
	}

	pub fn with_material(mut self, material: Material) -> Self {
		self.material = material;
		self
	}

	pub fn ignored_in_ray_tracing(mut self) -> Self {
		self.ignore_in_ray_tracing = true;
		self
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredBody {
	pub id: BodyId,
	pub descriptor: BodyDescriptor,
}

/// Active bodies in activation order.
///
/// Only the lifecycle collaborator adds and removes entries, and only between
/// steps. Iteration order is stable so runs over the same registry compare
/// equal.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
	bodies: Vec<RegisteredBody>,
}

impl BodyRegistry {
	pub fn new() -> Self {
		BodyRegistry { bodies: Vec::new() }
	}

	/// Fails if `id` is already active.
	pub fn register(&mut self, id: BodyId, descriptor: BodyDescriptor) -> Result<()> {
		if self.contains(id) {
			return Err(Error::DuplicateBody { id });
		}
		debug!("registering body {} ({})", id, descriptor.name);
		self.bodies.push(RegisteredBody { id, descriptor });
		Ok(())
	}

	pub fn unregister(&mut self, id: BodyId) -> Option<RegisteredBody> {
		let removed = self
			.bodies
			.iter()
			.position(|b| b.id == id)
			.map(|idx| self.bodies.remove(idx));
		if let Some(body) = &removed {
			debug!("unregistered body {} ({})", id, body.descriptor.name);
		}
		removed
	}

	pub fn get(&self, id: BodyId) -> Option<&RegisteredBody> {
		self.bodies.iter().find(|b| b.id == id)
	}

	pub fn find_by_name(&self, name: &str) -> Option<&RegisteredBody> {
		self.bodies.iter().find(|b| b.descriptor.name == name)
	}

	pub fn contains(&self, id: BodyId) -> bool {
		self.get(id).is_some()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, RegisteredBody> {
		self.bodies.iter()
	}

	pub fn len(&self) -> usize {
		self.bodies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bodies.is_empty()
	}
}

impl<'a> IntoIterator for &'a BodyRegistry {
	type Item = &'a RegisteredBody;
	type IntoIter = std::slice::Iter<'a, RegisteredBody>;

	fn into_iter(self) -> Self::IntoIter {
		self.bodies.iter()
	}
}
