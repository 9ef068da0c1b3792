//! Shared engine state for both callback chains
//!
//! The inference chain (throttled landmark detections) and the render
//! chain (requestAnimationFrame) interleave nondeterministically but
//! never in parallel: WASM is single-threaded, so one thread-local cell
//! holds everything. Every consumer treats the cell as "latest sample";
//! smoothing and damping absorb interleaving, so no ordering between
//! the chains is required for correctness.

use std::cell::RefCell;

use nalgebra::Vector3;
use wasm_bindgen::prelude::*;

use crate::gesture::{GestureClassifier, GestureSample};
use crate::interaction::InteractionMachine;
use crate::physics::RotationPhysics;
use crate::scene::Scene;

/// User-facing status surfaced through the shell's status line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ready,
    /// Formation gathering (confirmed fist)
    Gathering,
    /// Dispersed free roam
    Roaming,
    /// Inspecting a pinned photo
    Inspecting,
    /// Focus gesture declined: no photos uploaded yet
    NoPhotos,
}

impl Status {
    pub fn code(self) -> u32 {
        match self {
            Status::Ready => 0,
            Status::Gathering => 1,
            Status::Roaming => 2,
            Status::Inspecting => 3,
            Status::NoPhotos => 4,
        }
    }
}

/// Errors surfaced across the JS boundary
pub enum EngineError {
    UnknownTier(String),
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::UnknownTier(tier) => {
                JsValue::from_str(&format!("Unknown performance tier: {}", tier))
            }
        }
    }
}

pub struct Engine {
    pub classifier: GestureClassifier,
    pub machine: InteractionMachine,
    pub physics: RotationPhysics,
    pub scene: Option<Scene>,
    /// Single-slot latest-value channel from the inference chain to the
    /// render chain
    pub latest_sample: GestureSample,
    /// Set on visibility loss; both chains become no-ops while true
    pub paused: bool,
    /// Frame-skip counter for the inference gate
    pub frame_counter: u32,
    /// Renderer viewpoint, for focus-target distance queries
    pub viewpoint: Vector3<f32>,
    /// World-space inspection placement target
    pub focus_anchor: Vector3<f32>,
    pub status: Status,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            classifier: GestureClassifier::new(),
            machine: InteractionMachine::new(),
            physics: RotationPhysics::new(),
            scene: None,
            latest_sample: GestureSample::default(),
            paused: false,
            frame_counter: 0,
            viewpoint: Vector3::new(0.0, 0.0, 130.0),
            focus_anchor: Vector3::new(0.0, 0.0, 80.0),
            status: Status::Ready,
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    pub(crate) static ENGINE: RefCell<Engine> = RefCell::new(Engine::default());
}
