//! Orbit prediction on a private copy of the live bodies.
//!
//! A run clones every live body into a [`ShadowBody`], steps the clones with
//! the same [`Engine`] the live tick uses and records each clone's position
//! relative to its reference body's predicted position. Nothing is written
//! back to the live world.

use std::collections::HashMap;

use log::{debug, warn};

use crate::body::{BodyId, LiveBody, ShadowBody};
use crate::config::PredictorConfig;
use crate::engine::Engine;
use crate::prelude::*;
use crate::trajectory::Trajectory;

/// Upper bound on the steps of one prediction run.
pub const MAX_STEPS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPredictor {
	number_of_steps: usize,
	min_point_spacing: Scalar,
	anchor_to_reference: bool,
}

impl TrajectoryPredictor {
	/// `number_of_steps` is clamped to [`MAX_STEPS`].
	pub fn new(number_of_steps: usize, min_point_spacing: Scalar) -> Self {
		TrajectoryPredictor {
			number_of_steps: clamp_steps(number_of_steps),
			min_point_spacing,
			anchor_to_reference: false,
		}
	}

	pub fn from_config(config: &PredictorConfig) -> Self {
		TrajectoryPredictor::new(config.number_of_steps, config.min_point_spacing)
			.anchored(config.anchor_to_reference)
	}

	/// When anchored, a relative point is shifted by where the reference body
	/// was when the run started, so the orbit is drawn around the reference's
	/// current on-screen location instead of around the origin.
	pub fn anchored(mut self, anchor_to_reference: bool) -> Self {
		self.anchor_to_reference = anchor_to_reference;
		self
	}

	pub fn number_of_steps(&self) -> usize {
		self.number_of_steps
	}

	pub fn set_number_of_steps(&mut self, number_of_steps: usize) {
		self.number_of_steps = clamp_steps(number_of_steps);
	}

	pub fn min_point_spacing(&self) -> Scalar {
		self.min_point_spacing
	}

	pub fn set_min_point_spacing(&mut self, min_point_spacing: Scalar) {
		self.min_point_spacing = min_point_spacing;
	}

	/// Clones live bodies into a shadow set and predicts it.
	///
	/// Each entry pairs a live body with the id of its configured reference.
	/// Trajectories come back in the same order as `bodies`.
	pub fn predict(&self, engine: &Engine, bodies: &[(LiveBody, Option<BodyId>)], dt: Scalar) -> Vec<Trajectory> {
		let mut shadows = shadow_bodies(bodies);
		self.run(engine, &mut shadows, dt)
	}

	/// Steps an already built shadow set `number_of_steps` times.
	///
	/// Collision state is cleared first so nothing carries over from an
	/// earlier run on the same set.
	pub fn run(&self, engine: &Engine, shadows: &mut [ShadowBody], dt: Scalar) -> Vec<Trajectory> {
		for shadow in shadows.iter_mut() {
			shadow.has_collided = false;
			shadow.force = Vec3::zeros();
		}

		let origins: Vec<Vec3> = shadows.iter().map(|s| s.position).collect();
		let mut trajectories: Vec<Trajectory> = shadows.iter().map(|s| Trajectory::new(s.id)).collect();

		for _ in 0..self.number_of_steps {
			engine.step(shadows, dt);

			for (idx, trajectory) in trajectories.iter_mut().enumerate() {
				let point = self.relative_position(shadows, idx, &origins);
				trajectory.push_decimated(point, self.min_point_spacing);
			}
		}

		debug!(
			"predicted {} bodies over {} steps ({} points)",
			shadows.len(),
			self.number_of_steps,
			trajectories.iter().map(|t| t.len()).sum::<usize>()
		);

		trajectories
	}

	fn relative_position(&self, shadows: &[ShadowBody], idx: usize, origins: &[Vec3]) -> Vec3 {
		let body = &shadows[idx];
		match body.reference {
			Some(r) if r != idx && r < shadows.len() => {
				let relative = body.position - shadows[r].position;
				if self.anchor_to_reference {
					origins[r] + relative
				} else {
					relative
				}
			}
			_ => body.position,
		}
	}
}

/// Builds the shadow set for a run.
///
/// A clone's reference is the index of its reference's clone. A reference
/// that is not among `bodies`, or that names the body itself, is dropped with
/// a warning and the body's points stay absolute.
pub fn shadow_bodies(bodies: &[(LiveBody, Option<BodyId>)]) -> Vec<ShadowBody> {
	let index: HashMap<BodyId, usize> = bodies
		.iter()
		.enumerate()
		.map(|(idx, (live, _))| (live.id, idx))
		.collect();

	bodies
		.iter()
		.map(|(live, reference)| {
			let reference = reference.and_then(|reference| match index.get(&reference) {
				Some(_) if reference == live.id => {
					warn!("body {} references itself; predicting absolute positions", live.id);
					None
				}
				Some(&r) => Some(r),
				None => {
					warn!(
						"reference {} of body {} is not active; predicting absolute positions",
						reference, live.id
					);
					None
				}
			});
			ShadowBody::from_live(live).with_reference(reference)
		})
		.collect()
}

fn clamp_steps(number_of_steps: usize) -> usize {
	if number_of_steps > MAX_STEPS {
		warn!(
			"{} prediction steps exceeds the limit, clamping to {}",
			number_of_steps, MAX_STEPS
		);
		MAX_STEPS
	} else {
		number_of_steps
	}
}
