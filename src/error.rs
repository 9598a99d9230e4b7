use std::fmt;

use crate::body::BodyId;

pub type Result<T> = std::result::Result<T, Error>;

/// Structurally invalid input rejected before it reaches a registry or a
/// prediction run. Everything that can go wrong inside a step is handled with
/// a fallback value instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
	NonPositiveMass { mass: f64 },
	NegativeRadius { radius: f64 },
	NonFiniteValue { field: &'static str },
	DuplicateBody { id: BodyId },
	UnknownReference { name: String },
	InvalidConfiguration { reason: String },
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::NonPositiveMass { mass } => write!(f, "body mass must be positive, got {}", mass),
			Error::NegativeRadius { radius } => {
				write!(f, "body radius must not be negative, got {}", radius)
			}
			Error::NonFiniteValue { field } => write!(f, "{} must be finite", field),
			Error::DuplicateBody { id } => write!(f, "body {} is already registered", id),
			Error::UnknownReference { name } => {
				write!(f, "reference body `{}` is not defined in the scenario", name)
			}
			Error::InvalidConfiguration { reason } => write!(f, "invalid configuration: {}", reason),
		}
	}
}

impl std::error::Error for Error {}
