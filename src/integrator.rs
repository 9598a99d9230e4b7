//! Time integration for shadow bodies.
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked with the
//! accumulated force first and the position drifts with the new velocity.
//! The force accumulator is always cleared, even for a frozen body.

use crate::body::ShadowBody;
use crate::prelude::*;

/// Advances `body` by `dt` and consumes its accumulated force.
///
/// A body that has collided keeps its position and velocity.
///
/// # Examples
///
/// ```
/// use orbits::body::{BodyId, BodyProperties, ShadowBody};
/// use orbits::integrator::integrate;
/// use orbits::prelude::Vec3;
///
/// let properties = BodyProperties::new(2.0, 0.1).unwrap();
/// let mut body = ShadowBody::new(BodyId(0), properties, Vec3::zeros(), Vec3::zeros());
/// body.force = Vec3::new(4.0, 0.0, 0.0);
///
/// integrate(&mut body, 0.5);
///
/// assert_eq!(body.velocity, Vec3::new(1.0, 0.0, 0.0));
/// assert_eq!(body.position, Vec3::new(0.5, 0.0, 0.0));
/// assert_eq!(body.force, Vec3::zeros());
/// ```
pub fn integrate(body: &mut ShadowBody, dt: Scalar) {
	if !body.has_collided {
		let acceleration = body.force / body.properties.mass();

		body.velocity += acceleration * dt;
		body.position += body.velocity * dt;
	}

	body.force = Vec3::zeros();
}
