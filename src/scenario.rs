use std::collections::HashMap;

use palette::Srgb;

use crate::body::{BodyId, BodyProperties};
use crate::config::{BodyConfig, ScenarioConfig};
use crate::controller::Simulator;
use crate::error::{Error, Result};
use crate::prelude::*;
use crate::registry::BodyDescriptor;
use crate::sphere::Material;
use crate::world::KinematicWorld;

/// Builds a simulator over a [`KinematicWorld`] from a scenario.
///
/// Every body is validated and spawned before any is registered, so a bad
/// body or an unknown reference name fails the whole scenario and nothing
/// reaches the registry.
pub fn build_simulator(config: &ScenarioConfig) -> Result<Simulator<KinematicWorld>> {
	let mut world = KinematicWorld::new();
	let mut spawned = Vec::with_capacity(config.bodies.len());
	let mut by_name: HashMap<&str, BodyId> = HashMap::new();

	for body in &config.bodies {
		let properties = BodyProperties::new(body.mass, body.radius)?;
		let position = vec3(body.position, "position")?;
		let velocity = vec3(body.velocity, "velocity")?;

		let id = world.spawn(properties, position, velocity);

		if !body.name.is_empty() {
			by_name.insert(body.name.as_str(), id);
		}
		spawned.push((id, descriptor(body, properties, velocity)));
	}

	let mut resolved = Vec::with_capacity(spawned.len());
	for ((id, mut descriptor), body) in spawned.into_iter().zip(&config.bodies) {
		if let Some(name) = &body.reference {
			let reference = by_name
				.get(name.as_str())
				.copied()
				.ok_or_else(|| Error::UnknownReference { name: name.clone() })?;
			descriptor = descriptor.with_reference(reference);
		}
		resolved.push((id, descriptor));
	}

	let mut simulator = Simulator::new(world, &config.simulator, &config.predictor)?;
	for (id, descriptor) in resolved {
		simulator.register(id, descriptor)?;
	}

	Ok(simulator)
}

fn descriptor(body: &BodyConfig, properties: BodyProperties, velocity: Vec3) -> BodyDescriptor {
	let material = Material {
		color: Srgb::new(body.color[0], body.color[1], body.color[2]),
		specular: Srgb::new(body.specular[0], body.specular[1], body.specular[2]),
	};
	let descriptor = BodyDescriptor::new(body.name.clone(), properties)
		.with_initial_velocity(velocity)
		.with_orbit(body.draw_orbit)
		.with_material(material);

	if body.ignore_in_ray_tracing {
		descriptor.ignored_in_ray_tracing()
	} else {
		descriptor
	}
}

fn vec3(v: [Scalar; 3], field: &'static str) -> Result<Vec3> {
	if v.iter().all(|c| c.is_finite()) {
		Ok(Vec3::new(v[0], v[1], v[2]))
	} else {
		Err(Error::NonFiniteValue { field })
	}
}
