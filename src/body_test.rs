use crate::body::{BodyId, BodyProperties, LiveBody, ShadowBody, SimulatedBody};
use crate::error::Error;
use crate::prelude::*;

fn props(mass: Scalar, radius: Scalar) -> BodyProperties {
	BodyProperties::new(mass, radius).unwrap()
}

#[test]
fn test_properties_reject_non_positive_mass() {
	assert_eq!(BodyProperties::new(0.0, 1.0), Err(Error::NonPositiveMass { mass: 0.0 }));
	assert_eq!(BodyProperties::new(-2.0, 1.0), Err(Error::NonPositiveMass { mass: -2.0 }));
}

#[test]
fn test_properties_reject_negative_radius() {
	assert_eq!(BodyProperties::new(1.0, -0.5), Err(Error::NegativeRadius { radius: -0.5 }));
}

#[test]
fn test_properties_reject_non_finite_values() {
	assert_eq!(
		BodyProperties::new(Scalar::NAN, 1.0),
		Err(Error::NonFiniteValue { field: "mass" })
	);
	assert_eq!(
		BodyProperties::new(1.0, Scalar::INFINITY),
		Err(Error::NonFiniteValue { field: "radius" })
	);
}

#[test]
fn test_properties_accept_zero_radius() {
	let properties = props(3.0, 0.0);
	assert_eq!(properties.mass(), 3.0);
	assert_eq!(properties.radius(), 0.0);
}

#[test]
fn test_shadow_from_live_copies_state_and_clears_collision() {
	let live = LiveBody::new(
		BodyId(4),
		props(2.0, 0.25),
		Vec3::new(1.0, 2.0, 3.0),
		Vec3::new(0.0, -1.0, 0.5),
	);

	let shadow = ShadowBody::from_live(&live);

	assert_eq!(shadow.id, BodyId(4));
	assert_eq!(shadow.mass(), 2.0);
	assert_eq!(shadow.radius(), 0.25);
	assert_eq!(shadow.position, live.position);
	assert_eq!(shadow.velocity, live.velocity);
	assert_eq!(shadow.force, Vec3::zeros());
	assert!(!shadow.has_collided);
	assert_eq!(shadow.reference, None);
}

#[test]
fn test_live_body_queues_force_until_taken() {
	let mut live = LiveBody::new(BodyId(0), props(1.0, 0.1), Vec3::zeros(), Vec3::zeros());

	live.add_force(Vec3::new(1.0, 0.0, 0.0));
	live.add_force(Vec3::new(0.5, 2.0, 0.0));
	live.simulate(0.02);

	// Simulating a live body is a no-op; the force waits for the sink
	assert_eq!(live.position, Vec3::zeros());
	assert_eq!(live.take_force(), Vec3::new(1.5, 2.0, 0.0));
	assert_eq!(live.force(), Vec3::zeros());
}

#[test]
fn test_live_body_ignores_collisions() {
	let mut live = LiveBody::new(BodyId(0), props(1.0, 0.1), Vec3::zeros(), Vec3::zeros());
	live.collide();
	assert!(!live.has_collided());
}

#[test]
fn test_momentum_and_kinetic_energy() {
	let body = ShadowBody::new(BodyId(0), props(2.0, 0.1), Vec3::zeros(), Vec3::new(3.0, 4.0, 0.0));

	assert_eq!(body.momentum(), Vec3::new(6.0, 8.0, 0.0));
	// KE = 0.5 * 2 * 25
	assert_eq!(body.kinetic_energy(), 25.0);
}

#[test]
fn test_distance_to() {
	let a = ShadowBody::new(BodyId(0), props(1.0, 0.1), Vec3::zeros(), Vec3::zeros());
	let b = ShadowBody::new(BodyId(1), props(1.0, 0.1), Vec3::new(3.0, 0.0, 4.0), Vec3::zeros());

	assert_eq!(a.distance_to(&b), 5.0);
}
