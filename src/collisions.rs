//! Sphere-sphere collision detection and the freeze resolution policy.
//!
//! Resolution is deliberately minimal: both bodies of a touching pair are
//! marked as collided. A collided shadow body stops moving for the rest of
//! the run but keeps exerting and receiving gravity. Mass is never merged.

use log::trace;

use crate::body::{BodyId, SimulatedBody};
use crate::prelude::*;

/// A touching pair found by [`detect_collisions`].
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
	/// Index of the first body in the swept slice
	pub a: usize,
	/// Index of the second body in the swept slice
	pub b: usize,
	pub body_a: BodyId,
	pub body_b: BodyId,
	pub separation: Scalar,
}

/// True when the two spheres touch or overlap.
pub fn intersects(a_center: Vec3, a_radius: Scalar, b_center: Vec3, b_radius: Scalar) -> bool {
	(b_center - a_center).norm() <= a_radius + b_radius
}

pub fn check_collision<A, B>(a: &A, b: &B) -> bool
where
	A: SimulatedBody + ?Sized,
	B: SimulatedBody + ?Sized,
{
	intersects(a.position(), a.radius(), b.position(), b.radius())
}

/// Finds every touching unordered pair without modifying any body.
pub fn detect_collisions<B: SimulatedBody>(bodies: &[B]) -> Vec<CollisionEvent> {
	let mut events = Vec::new();

	for i in 0..bodies.len() {
		for j in (i + 1)..bodies.len() {
			let (a, b) = (&bodies[i], &bodies[j]);
			if check_collision(a, b) {
				events.push(CollisionEvent {
					a: i,
					b: j,
					body_a: a.id(),
					body_b: b.id(),
					separation: a.distance_to(b),
				});
			}
		}
	}

	events
}

/// Applies the resolution policy to every detected pair.
///
/// Returns how many bodies became collided by this call.
pub fn resolve_collisions<B: SimulatedBody>(bodies: &mut [B], events: &[CollisionEvent]) -> usize {
	let mut newly_collided = 0;

	for event in events {
		for &idx in &[event.a, event.b] {
			let body = &mut bodies[idx];
			if !body.has_collided() {
				body.collide();
				if body.has_collided() {
					newly_collided += 1;
				}
			}
		}
		trace!(
			"bodies {} and {} touch (separation {:.4})",
			event.body_a,
			event.body_b,
			event.separation
		);
	}

	newly_collided
}
