//! Scene module - element populations and their animation
//!
//! Re-exports only. All logic in submodules.

mod config;
mod dust;
mod elements;
mod layout;
mod photos;
mod rng;
mod world;

pub use config::{PerfTier, SceneConfig};
pub use world::{formation_rotation, PopulationKind, Scene};
