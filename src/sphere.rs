//! Read-only projection of bodies for the GPU ray tracer.

use bytemuck::{Pod, Zeroable};
use palette::Srgb;

use crate::prelude::*;

/// Colors owned by the visual side of a body. The simulation never reads them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
	/// Trail color, also used as the ray-traced albedo and the orbit color
	pub color: Srgb<f32>,
	pub specular: Srgb<f32>,
}

impl Default for Material {
	fn default() -> Self {
		Material {
			color: Srgb::new(1.0, 1.0, 1.0),
			specular: Srgb::new(0.8, 0.8, 0.8),
		}
	}
}

/// Layout shared with the ray-tracing shader's sphere buffer. Changing the
/// field order or size changes `VisualSphere::STRIDE` and the shader side.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct VisualSphere {
	pub position: [f32; 3],
	pub radius: f32,
	pub albedo: [f32; 3],
	pub specular: [f32; 3],
}

impl VisualSphere {
	pub const STRIDE: usize = std::mem::size_of::<VisualSphere>();

	pub fn new(position: Vec3, radius: Scalar, material: &Material) -> Self {
		VisualSphere {
			position: [position.x as f32, position.y as f32, position.z as f32],
			radius: radius as f32,
			albedo: rgb(material.color),
			specular: rgb(material.specular),
		}
	}
}

fn rgb(color: Srgb<f32>) -> [f32; 3] {
	[color.red, color.green, color.blue]
}
