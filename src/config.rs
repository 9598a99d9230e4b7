//! Configuration types for simulator, predictor and scenario files.
//!
//! Every field has a default, so a scenario file only names what it changes.
//! An example scenario:
//!
//! ```yaml
//! simulator:
//!   gravitational_constant: 10.0
//!   auto_simulation: false
//!   time_scale: 1.0
//!
//! predictor:
//!   number_of_steps: 1000
//!   min_point_spacing: 0.1
//!
//! bodies:
//!   - name: sun
//!     mass: 1000.0
//!     radius: 2.0
//!   - name: planet
//!     mass: 1.0
//!     radius: 0.5
//!     position: [20.0, 0.0, 0.0]
//!     velocity: [0.0, 22.36, 0.0]
//!     reference: sun
//!     draw_orbit: true
//!     color: [0.3, 0.5, 1.0]
//! ```

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::prelude::*;

/// Largest accepted time-scale multiplier.
pub const MAX_TIME_SCALE: Scalar = 10.0;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulatorConfig {
	pub gravitational_constant: Scalar,
	/// Start with the external engine auto-stepping (live mode)
	pub auto_simulation: bool,
	/// Multiplier on the fixed step, clamped to [0, 10]
	pub time_scale: Scalar,
	/// Fixed step at time scale 1
	pub base_fixed_delta_time: Scalar,
}

impl Default for SimulatorConfig {
	fn default() -> Self {
		SimulatorConfig {
			gravitational_constant: 10.0,
			auto_simulation: false,
			time_scale: 1.0,
			base_fixed_delta_time: 0.02,
		}
	}
}

impl SimulatorConfig {
	pub fn validate(&self) -> Result<()> {
		if !self.gravitational_constant.is_finite() || self.gravitational_constant < 0.0 {
			return Err(Error::InvalidConfiguration {
				reason: format!(
					"gravitational constant must be finite and non-negative, got {}",
					self.gravitational_constant
				),
			});
		}
		if !self.base_fixed_delta_time.is_finite() || self.base_fixed_delta_time <= 0.0 {
			return Err(Error::InvalidConfiguration {
				reason: format!(
					"base fixed delta time must be positive, got {}",
					self.base_fixed_delta_time
				),
			});
		}
		if self.time_scale.is_nan() {
			return Err(Error::NonFiniteValue { field: "time_scale" });
		}
		Ok(())
	}
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PredictorConfig {
	/// Steps per prediction run, clamped to 10000
	pub number_of_steps: usize,
	/// Minimum distance between consecutive orbit points; zero keeps every step
	pub min_point_spacing: Scalar,
	/// Alpha multiplier at the far end of a drawn orbit
	pub orbit_alpha: f32,
	pub orbit_width: f32,
	/// Draw orbits around the reference body's current position
	pub anchor_to_reference: bool,
}

impl Default for PredictorConfig {
	fn default() -> Self {
		PredictorConfig {
			number_of_steps: 1000,
			min_point_spacing: 0.1,
			orbit_alpha: 0.3,
			orbit_width: 0.2,
			anchor_to_reference: false,
		}
	}
}

impl PredictorConfig {
	pub fn validate(&self) -> Result<()> {
		if self.min_point_spacing.is_nan() {
			return Err(Error::NonFiniteValue {
				field: "min_point_spacing",
			});
		}
		if !(0.0..=1.0).contains(&self.orbit_alpha) {
			return Err(Error::InvalidConfiguration {
				reason: format!("orbit alpha must be within [0, 1], got {}", self.orbit_alpha),
			});
		}
		if !self.orbit_width.is_finite() || self.orbit_width < 0.0 {
			return Err(Error::InvalidConfiguration {
				reason: format!("orbit width must be finite and non-negative, got {}", self.orbit_width),
			});
		}
		Ok(())
	}
}

/// Initial state and presentation of one body in a scenario file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BodyConfig {
	pub name: String,
	pub mass: Scalar,
	pub radius: Scalar,
	pub position: [Scalar; 3],
	pub velocity: [Scalar; 3],
	/// Name of the body this orbit is drawn relative to
	pub reference: Option<String>,
	pub draw_orbit: bool,
	pub color: [f32; 3],
	pub specular: [f32; 3],
	pub ignore_in_ray_tracing: bool,
}

impl Default for BodyConfig {
	fn default() -> Self {
		BodyConfig {
			name: String::new(),
			mass: 1.0,
			radius: 0.5,
			position: [0.0; 3],
			velocity: [0.0; 3],
			reference: None,
			draw_orbit: false,
			color: [1.0, 1.0, 1.0],
			specular: [0.8, 0.8, 0.8],
			ignore_in_ray_tracing: false,
		}
	}
}

/// Top-level scenario loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ScenarioConfig {
	pub simulator: SimulatorConfig,
	pub predictor: PredictorConfig,
	pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
	pub fn from_yaml(source: &str) -> Result<Self> {
		serde_yaml::from_str(source).map_err(|e| Error::InvalidConfiguration {
			reason: e.to_string(),
		})
	}
}
