//! Inference-chain entry points
//!
//! The shell re-arms this chain after each landmark detection resolves
//! (and retries a stalled camera there too). While paused the chain
//! keeps getting re-armed but everything here is a no-op; classifier
//! smoothing, the hysteresis counter, and the mode all hold.

use wasm_bindgen::prelude::*;

use crate::gesture::{parse_landmarks, FLAT_BUFFER_LEN};
use crate::interaction::ModeEvent;
use crate::scene::formation_rotation;

use super::engine::{Engine, Status, ENGINE};

/// Frame-skip gate for the landmark model, driven by the perf tier.
/// Smoothing and hysteresis state persist across skipped frames.
#[wasm_bindgen]
pub fn should_run_inference() -> bool {
    ENGINE.with(|cell| {
        let mut e = cell.borrow_mut();
        if e.paused {
            return false;
        }
        let skip = e
            .scene
            .as_ref()
            .map(|s| s.config().gesture_frame_skip)
            .unwrap_or(1)
            .max(1);
        e.frame_counter = (e.frame_counter + 1) % skip;
        e.frame_counter == 0
    })
}

/// One detection result: 21 landmarks x (x, y, z), normalized [0,1].
/// Anything but 63 floats degrades to "no hand" - never fatal.
#[wasm_bindgen]
pub fn ingest_hand_frame(flat: &[f32]) {
    if flat.len() != FLAT_BUFFER_LEN {
        web_sys::console::warn_1(
            &format!(
                "Invalid landmark buffer length: {} (expected {})",
                flat.len(),
                FLAT_BUFFER_LEN
            )
            .into(),
        );
        ingest_no_hand();
        return;
    }
    ENGINE.with(|cell| {
        let mut e = cell.borrow_mut();
        if e.paused {
            return;
        }
        let landmarks = parse_landmarks(flat);
        let sample = e.classifier.ingest(landmarks.as_ref());
        run_machine(&mut e, sample);
    });
}

/// No hand in this frame (or an empty detection result). Presence drops
/// but the mode is sticky: dropouts alone never force a transition.
#[wasm_bindgen]
pub fn ingest_no_hand() {
    ENGINE.with(|cell| {
        let mut e = cell.borrow_mut();
        if e.paused {
            return;
        }
        let sample = e.classifier.ingest(None);
        run_machine(&mut e, sample);
    });
}

fn run_machine(e: &mut Engine, sample: crate::gesture::GestureSample) {
    let orientation = e.physics.orientation();
    let rotation = formation_rotation(orientation.x, orientation.y);
    let photo_positions = e
        .scene
        .as_ref()
        .map(|s| s.photo_world_positions(&rotation))
        .unwrap_or_default();
    let viewpoint = e.viewpoint;

    let event = e.machine.apply(&sample, &photo_positions, viewpoint);
    match event {
        ModeEvent::Gathered => e.status = Status::Gathering,
        ModeEvent::BeganRoam => {
            // Fresh roam: seed the delta tracker so the first tick
            // computes no velocity from stale data
            e.physics.seed_prev_palm(sample.palm);
            e.status = Status::Roaming;
        }
        ModeEvent::FocusPinned(target) => {
            e.status = Status::Inspecting;
            web_sys::console::log_1(&format!("📸 inspecting photo {}", target).into());
        }
        ModeEvent::FocusReleased => e.status = Status::Roaming,
        ModeEvent::FocusDeclined => e.status = Status::NoPhotos,
        ModeEvent::None => {}
    }
    e.latest_sample = sample;
}
