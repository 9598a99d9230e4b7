//! Predicted paths and what the orbit renderer receives.

use palette::Srgba;

use crate::body::BodyId;
use crate::prelude::*;

/// Ordered points of one body's predicted path, in its reference frame.
///
/// A trajectory is produced whole by one prediction run; a newer run replaces
/// it rather than extending it.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
	pub body: BodyId,
	points: Vec<Vec3>,
}

impl Trajectory {
	pub fn new(body: BodyId) -> Self {
		Trajectory {
			body,
			points: Vec::new(),
		}
	}

	/// Appends `point` unless it lies within `min_spacing` of the last point.
	///
	/// The first point is always kept. A spacing of zero or less keeps every
	/// point, including repeats.
	pub fn push_decimated(&mut self, point: Vec3, min_spacing: Scalar) -> bool {
		let accept = match self.points.last() {
			None => true,
			Some(_) if min_spacing <= 0.0 => true,
			Some(last) => (point - last).norm() > min_spacing,
		};

		if accept {
			self.points.push(point);
		}
		accept
	}

	pub fn points(&self) -> &[Vec3] {
		&self.points
	}

	pub fn last(&self) -> Option<&Vec3> {
		self.points.last()
	}

	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}
}

impl IntoIterator for Trajectory {
	type Item = Vec3;
	type IntoIter = std::vec::IntoIter<Vec3>;

	fn into_iter(self) -> Self::IntoIter {
		self.points.into_iter()
	}
}

/// Alpha of the base orbit color before the start/end multipliers.
pub const ORBIT_BASE_ALPHA: f32 = 0.6;

/// Line style handed through to the orbit renderer untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitStyle {
	pub color: Srgba<f32>,
	pub start_color_multiplier: f32,
	pub end_color_multiplier: f32,
	pub width_multiplier: f32,
}

impl OrbitStyle {
	pub fn start_color(&self) -> Srgba<f32> {
		scale(self.color, self.start_color_multiplier)
	}

	pub fn end_color(&self) -> Srgba<f32> {
		scale(self.color, self.end_color_multiplier)
	}
}

fn scale(color: Srgba<f32>, factor: f32) -> Srgba<f32> {
	Srgba::new(
		color.color.red * factor,
		color.color.green * factor,
		color.color.blue * factor,
		color.alpha * factor,
	)
}

/// One body's orbit as published after a prediction run.
///
/// `style` is `None` for a body that does not draw its orbit; its path is
/// then empty and the renderer should clear the line.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
	pub body: BodyId,
	pub points: Vec<Vec3>,
	pub style: Option<OrbitStyle>,
}

impl OrbitPath {
	pub fn cleared(body: BodyId) -> Self {
		OrbitPath {
			body,
			points: Vec::new(),
			style: None,
		}
	}

	pub fn is_cleared(&self) -> bool {
		self.style.is_none() && self.points.is_empty()
	}
}
