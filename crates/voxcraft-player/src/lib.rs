//! First-person camera pose and the per-frame movement integrator.
#![forbid(unsafe_code)]

pub mod camera;
pub mod walker;

pub use camera::CameraPose;
pub use walker::{MoveInput, MovementParams, Walker};
