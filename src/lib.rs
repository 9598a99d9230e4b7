//! Gravitational simulation of a small set of bodies with orbit prediction.
//!
//! In live mode an external rigid-body engine moves the bodies and the
//! [`Simulator`](controller::Simulator) only feeds it pairwise gravity every
//! fixed tick. In predicting mode the same [`Engine`](engine::Engine) runs
//! ahead on shadow copies and the resulting paths are published relative to
//! each body's reference body.

pub mod body;
pub mod collisions;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod predictor;
pub mod prelude;
pub mod registry;
pub mod scenario;
pub mod sphere;
pub mod trajectory;
pub mod world;

#[cfg(test)]
mod body_test;
#[cfg(test)]
mod engine_test;
#[cfg(test)]
mod forces_test;
