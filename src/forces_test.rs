use approx::assert_relative_eq;

use crate::body::{BodyId, BodyProperties, ShadowBody};
use crate::forces::{apply_gravity_forces, gravity_force, potential_energy, total_momentum};
use crate::prelude::*;

fn body(id: u32, mass: Scalar, position: [Scalar; 3]) -> ShadowBody {
	ShadowBody::new(
		BodyId(id),
		BodyProperties::new(mass, 0.1).unwrap(),
		Vec3::new(position[0], position[1], position[2]),
		Vec3::zeros(),
	)
}

#[test]
fn test_newton_third_law() {
	let a = body(0, 3.0, [0.3, -1.0, 2.0]);
	let b = body(1, 7.0, [-4.0, 0.5, 1.25]);

	let f_ab = gravity_force(&a, &b, 6.674);
	let f_ba = gravity_force(&b, &a, 6.674);

	assert_relative_eq!(f_ab, -f_ba, epsilon = 1e-12);
	assert!(f_ab.norm() > 0.0);
}

#[test]
fn test_force_points_toward_other_body() {
	let a = body(0, 1.0, [0.0, 0.0, 0.0]);
	let b = body(1, 1.0, [0.0, 5.0, 0.0]);

	let f = gravity_force(&a, &b, 1.0);

	assert!(f.y > 0.0);
	assert_eq!(f.x, 0.0);
	assert_eq!(f.z, 0.0);
}

#[test]
fn test_force_magnitude_inverse_square() {
	let a = body(0, 2.0, [0.0, 0.0, 0.0]);
	let b = body(1, 3.0, [2.0, 0.0, 0.0]);

	// F = G * m1 * m2 / r² = 10 * 2 * 3 / 4
	let f = gravity_force(&a, &b, 10.0);
	assert_relative_eq!(f.norm(), 15.0, epsilon = 1e-12);
}

#[test]
fn test_coincident_bodies_have_zero_force() {
	let a = body(0, 5.0, [1.0, 1.0, 1.0]);
	let b = body(1, 5.0, [1.0, 1.0, 1.0]);

	assert_eq!(gravity_force(&a, &b, 10.0), Vec3::zeros());
}

#[test]
fn test_apply_gravity_forces_sums_to_zero() {
	let mut bodies = vec![
		body(0, 1.0, [0.0, 0.0, 0.0]),
		body(1, 2.0, [1.0, 0.0, 0.0]),
		body(2, 3.0, [0.0, 2.0, 1.0]),
	];

	apply_gravity_forces(&mut bodies, 1.0);

	let net = bodies.iter().fold(Vec3::zeros(), |acc, b| acc + b.force);
	assert_relative_eq!(net, Vec3::zeros(), epsilon = 1e-12);
	assert!(bodies.iter().all(|b| b.force.norm() > 0.0));
}

#[test]
fn test_apply_gravity_forces_counts_each_pair_once() {
	let mut bodies = vec![body(0, 10.0, [0.0, 0.0, 0.0]), body(1, 10.0, [1.0, 0.0, 0.0])];

	apply_gravity_forces(&mut bodies, 1.0);

	assert_relative_eq!(bodies[0].force, Vec3::new(100.0, 0.0, 0.0), epsilon = 1e-12);
	assert_relative_eq!(bodies[1].force, Vec3::new(-100.0, 0.0, 0.0), epsilon = 1e-12);
}

#[test]
fn test_apply_gravity_forces_single_body_has_no_force() {
	let mut bodies = vec![body(0, 10.0, [1.0, 2.0, 3.0])];

	apply_gravity_forces(&mut bodies, 1.0);

	assert_eq!(bodies[0].force, Vec3::zeros());
}

#[test]
fn test_total_momentum() {
	let mut bodies = vec![body(0, 2.0, [0.0, 0.0, 0.0]), body(1, 1.0, [1.0, 0.0, 0.0])];
	bodies[0].velocity = Vec3::new(1.0, 0.0, 0.0);
	bodies[1].velocity = Vec3::new(-2.0, 0.0, 0.0);

	assert_eq!(total_momentum(&bodies), Vec3::zeros());
}

#[test]
fn test_potential_energy() {
	let bodies = vec![body(0, 2.0, [0.0, 0.0, 0.0]), body(1, 3.0, [2.0, 0.0, 0.0])];

	// U = -G * m1 * m2 / r = -1 * 6 / 2
	assert_relative_eq!(potential_energy(&bodies, 1.0), -3.0, epsilon = 1e-12);
}
