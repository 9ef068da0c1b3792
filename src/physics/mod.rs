//! Physics module - damped rotation of the whole formation
//!
//! Re-exports only. All logic in submodules.

mod rotation;

pub use rotation::RotationPhysics;
