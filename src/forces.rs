//! Direct pairwise gravity (O(N²)).

use crate::body::SimulatedBody;
use crate::prelude::*;

/// Squared separations at or below this are treated as coincident bodies.
pub const COINCIDENT_DISTANCE_SQUARED: Scalar = 1e-12;

/// Gravitational force exerted on `a` by `b`. The force on `b` is the negation.
///
/// Coincident bodies have no defined direction, so the force between them is
/// zero rather than an error.
///
/// # Examples
///
/// ```
/// use orbits::body::{BodyId, BodyProperties, ShadowBody};
/// use orbits::forces::gravity_force;
/// use orbits::prelude::Vec3;
///
/// let properties = BodyProperties::new(10.0, 0.1).unwrap();
/// let a = ShadowBody::new(BodyId(0), properties, Vec3::zeros(), Vec3::zeros());
/// let b = ShadowBody::new(BodyId(1), properties, Vec3::new(1.0, 0.0, 0.0), Vec3::zeros());
///
/// // F = G * m_a * m_b / r² = 1 * 10 * 10 / 1
/// assert_eq!(gravity_force(&a, &b, 1.0), Vec3::new(100.0, 0.0, 0.0));
/// ```
pub fn gravity_force<A, B>(a: &A, b: &B, g: Scalar) -> Vec3
where
	A: SimulatedBody + ?Sized,
	B: SimulatedBody + ?Sized,
{
	let direction = b.position() - a.position();
	let distance2 = direction.norm_squared();

	if distance2 <= COINCIDENT_DISTANCE_SQUARED {
		return Vec3::zeros();
	}

	// F = G * (m1 * m2) / r^2
	let f = g * a.mass() * b.mass() / distance2;

	direction / distance2.sqrt() * f
}

/// Adds the gravitational force of every unordered pair to both accumulators.
///
/// All pair forces are computed from the positions as they are on entry and
/// only then applied, so the result does not depend on pair order.
pub fn apply_gravity_forces<B: SimulatedBody>(bodies: &mut [B], g: Scalar) {
	let len = bodies.len();
	let mut forces = vec![Vec3::zeros(); len];

	for i in 0..len {
		for j in (i + 1)..len {
			let f = gravity_force(&bodies[i], &bodies[j], g);
			forces[i] += f;
			forces[j] -= f;
		}
	}

	for (body, force) in bodies.iter_mut().zip(forces) {
		body.add_force(force);
	}
}

pub fn total_momentum<B: SimulatedBody>(bodies: &[B]) -> Vec3 {
	bodies
		.iter()
		.map(|b| b.momentum())
		.fold(Vec3::zeros(), |acc, p| acc + p)
}

pub fn kinetic_energy<B: SimulatedBody>(bodies: &[B]) -> Scalar {
	bodies.iter().map(|b| b.kinetic_energy()).sum()
}

/// Gravitational potential energy, each pair counted once. Coincident pairs
/// contribute nothing, matching the zero force between them.
pub fn potential_energy<B: SimulatedBody>(bodies: &[B], g: Scalar) -> Scalar {
	bodies
		.iter()
		.enumerate()
		.flat_map(|(i, a)| {
			bodies[i + 1..].iter().map(move |b| {
				let distance2 = (b.position() - a.position()).norm_squared();
				if distance2 <= COINCIDENT_DISTANCE_SQUARED {
					0.0
				} else {
					-g * a.mass() * b.mass() / distance2.sqrt()
				}
			})
		})
		.sum()
}
