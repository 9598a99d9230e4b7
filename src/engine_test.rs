use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::body::{BodyId, BodyProperties, LiveBody, ShadowBody, SimulatedBody};
use crate::engine::Engine;
use crate::forces::total_momentum;
use crate::prelude::*;

fn shadow(id: u32, mass: Scalar, radius: Scalar, position: Vec3, velocity: Vec3) -> ShadowBody {
	ShadowBody::new(BodyId(id), BodyProperties::new(mass, radius).unwrap(), position, velocity)
}

/// Shadow body that remembers the force it had accumulated when simulated.
struct RecordingBody {
	inner: ShadowBody,
	forces: Vec<Vec3>,
}

impl SimulatedBody for RecordingBody {
	fn id(&self) -> BodyId {
		self.inner.id()
	}

	fn mass(&self) -> Scalar {
		self.inner.mass()
	}

	fn radius(&self) -> Scalar {
		self.inner.radius()
	}

	fn position(&self) -> Vec3 {
		self.inner.position()
	}

	fn velocity(&self) -> Vec3 {
		self.inner.velocity()
	}

	fn add_force(&mut self, force: Vec3) {
		self.inner.add_force(force);
	}

	fn collide(&mut self) {
		self.inner.collide();
	}

	fn has_collided(&self) -> bool {
		self.inner.has_collided()
	}

	fn simulate(&mut self, dt: Scalar) {
		self.forces.push(self.inner.force);
		self.inner.simulate(dt);
	}
}

#[test]
fn test_two_equal_masses_one_step() {
	let engine = Engine::new(1.0);
	let mut bodies = vec![
		shadow(0, 10.0, 0.1, Vec3::new(0.0, 0.0, 0.0), Vec3::zeros()),
		shadow(1, 10.0, 0.1, Vec3::new(1.0, 0.0, 0.0), Vec3::zeros()),
	];

	engine.step(&mut bodies, 0.02);

	// F = 100, a = 10, dv = 0.2
	assert_relative_eq!(bodies[0].velocity, Vec3::new(0.2, 0.0, 0.0), epsilon = 1e-12);
	assert_relative_eq!(bodies[1].velocity, Vec3::new(-0.2, 0.0, 0.0), epsilon = 1e-12);
	assert_relative_eq!(bodies[0].velocity, -bodies[1].velocity);
	assert_eq!(bodies[0].force, Vec3::zeros());
	assert_eq!(bodies[1].force, Vec3::zeros());
}

#[test]
fn test_two_body_momentum_conserved() {
	let engine = Engine::new(10.0);
	// Heavy primary with a light body on a roughly circular orbit
	let v = (10.0_f64 * 100.0 / 5.0).sqrt();
	let mut bodies = vec![
		shadow(0, 100.0, 0.5, Vec3::zeros(), Vec3::new(0.0, -v / 100.0, 0.0)),
		shadow(1, 1.0, 0.1, Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, v, 0.0)),
	];
	let initial = total_momentum(&bodies);

	engine.run(&mut bodies, 0.001, 5_000);

	assert!(bodies.iter().all(|b| !b.has_collided));
	assert_abs_diff_eq!(total_momentum(&bodies), initial, epsilon = 1e-9);
}

#[test]
fn test_isolated_body_at_rest_stays_put() {
	let engine = Engine::new(10.0);
	let start = Vec3::new(3.0, -2.0, 1.0);
	let mut bodies = vec![shadow(0, 5.0, 1.0, start, Vec3::zeros())];

	engine.run(&mut bodies, 0.02, 1_000);

	assert_eq!(bodies[0].position, start);
	assert_eq!(bodies[0].velocity, Vec3::zeros());
}

#[test]
fn test_symmetric_configuration_center_body_stays_put() {
	let engine = Engine::new(1.0);
	let mut bodies = vec![
		shadow(0, 1.0, 0.1, Vec3::new(-2.0, 0.0, 0.0), Vec3::zeros()),
		shadow(1, 5.0, 0.1, Vec3::zeros(), Vec3::zeros()),
		shadow(2, 1.0, 0.1, Vec3::new(2.0, 0.0, 0.0), Vec3::zeros()),
	];

	engine.run(&mut bodies, 0.01, 10);

	// Net force on the middle body cancels exactly
	assert_eq!(bodies[1].position, Vec3::zeros());
	assert_eq!(bodies[1].velocity, Vec3::zeros());
}

#[test]
fn test_collided_bodies_freeze_but_keep_attracting() {
	let engine = Engine::new(1.0);
	let mut bodies = vec![
		shadow(0, 10.0, 0.5, Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
		shadow(1, 10.0, 0.5, Vec3::new(0.9, 0.0, 0.0), Vec3::new(0.0, -1.0, 0.0)),
		shadow(2, 1.0, 0.1, Vec3::new(0.45, 20.0, 0.0), Vec3::zeros()),
	];

	engine.step(&mut bodies, 0.02);
	let frozen = [bodies[0].position, bodies[1].position];
	assert!(bodies[0].has_collided && bodies[1].has_collided);
	assert!(!bodies[2].has_collided);

	engine.run(&mut bodies, 0.02, 200);

	assert_eq!(bodies[0].position, frozen[0]);
	assert_eq!(bodies[1].position, frozen[1]);
	// The far body still falls toward the frozen pair
	assert!(bodies[2].position.y < 20.0);
	assert!(bodies[2].velocity.y < 0.0);
}

#[test]
fn test_collided_bodies_still_receive_forces() {
	let engine = Engine::new(1.0);
	let mut bodies = vec![
		RecordingBody {
			inner: shadow(0, 10.0, 0.5, Vec3::new(0.0, 0.0, 0.0), Vec3::zeros()),
			forces: Vec::new(),
		},
		RecordingBody {
			inner: shadow(1, 10.0, 0.5, Vec3::new(0.5, 0.0, 0.0), Vec3::zeros()),
			forces: Vec::new(),
		},
	];

	engine.run(&mut bodies, 0.02, 3);

	for body in &bodies {
		assert!(body.has_collided());
		assert_eq!(body.forces.len(), 3);
		assert!(body.forces.iter().all(|f| f.norm() > 0.0));
	}
	assert_eq!(bodies[0].position(), Vec3::zeros());
}

#[test]
fn test_step_over_live_bodies_only_queues_forces() {
	let engine = Engine::new(1.0);
	let properties = BodyProperties::new(10.0, 0.1).unwrap();
	let mut bodies = vec![
		LiveBody::new(BodyId(0), properties, Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0)),
		LiveBody::new(BodyId(1), properties, Vec3::new(1.0, 0.0, 0.0), Vec3::zeros()),
	];

	engine.step(&mut bodies, 0.02);

	assert_eq!(bodies[0].position, Vec3::zeros());
	assert_eq!(bodies[0].velocity, Vec3::new(0.0, 1.0, 0.0));
	assert_relative_eq!(bodies[0].force(), Vec3::new(100.0, 0.0, 0.0), epsilon = 1e-12);
	assert_relative_eq!(bodies[1].force(), Vec3::new(-100.0, 0.0, 0.0), epsilon = 1e-12);
}
