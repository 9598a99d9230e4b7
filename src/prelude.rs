pub use nalgebra as na;

pub type Scalar = f64;

pub type Vec3 = na::Vector3<Scalar>;
pub type Point3 = na::Point3<Scalar>;

pub use crate::{
	body::{BodyId, LiveBody, ShadowBody, SimulatedBody},
	controller::{Mode, Simulator},
	engine::Engine,
	error::{Error, Result},
	predictor::TrajectoryPredictor,
	registry::BodyRegistry,
	trajectory::Trajectory,
	world::RigidBodyWorld,
};
