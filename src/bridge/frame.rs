//! Render-chain entry points and transform exports
//!
//! The shell calls advance_frame() once per presented frame, then pulls
//! flat Float32 buffers for its instanced meshes. While paused the
//! frame callback keeps firing but state progression halts entirely.

use wasm_bindgen::prelude::*;

use nalgebra::Vector3;

use crate::interaction::InteractionMode;
use crate::scene::{formation_rotation, PerfTier, PopulationKind, Scene, SceneConfig};

use super::engine::{Engine, EngineError, ENGINE};

/// Build the scene for the given performance tier. Seed 0 derives one
/// from the clock; any other value gives a reproducible layout.
#[wasm_bindgen]
pub fn init_engine(tier: &str, seed: u32) -> Result<(), JsValue> {
    let tier =
        PerfTier::parse(tier).ok_or_else(|| EngineError::UnknownTier(tier.to_string()))?;
    let config = SceneConfig::for_tier(tier);
    let seed = if seed != 0 {
        seed
    } else {
        js_sys::Date::now() as u32 | 1
    };
    ENGINE.with(|cell| {
        let mut e = cell.borrow_mut();
        *e = Engine::default();
        e.scene = Some(Scene::new(config, seed));
    });
    web_sys::console::log_1(&format!("🎄 scene ready ({:?})", tier).into());
    Ok(())
}

/// Visibility changed. Both chains become no-ops while paused.
#[wasm_bindgen]
pub fn set_paused(paused: bool) {
    ENGINE.with(|cell| cell.borrow_mut().paused = paused);
}

/// Renderer viewpoint, used for focus-target distance queries
#[wasm_bindgen]
pub fn set_viewpoint(x: f32, y: f32, z: f32) {
    ENGINE.with(|cell| cell.borrow_mut().viewpoint = Vector3::new(x, y, z));
}

/// World-space placement target for the inspected photo
#[wasm_bindgen]
pub fn set_focus_anchor(x: f32, y: f32, z: f32) {
    ENGINE.with(|cell| cell.borrow_mut().focus_anchor = Vector3::new(x, y, z));
}

/// Register one more photo element. Returns its index, or -1 once the
/// tier's cap is reached (the shell tells the user).
#[wasm_bindgen]
pub fn add_photo() -> i32 {
    ENGINE.with(|cell| {
        let mut e = cell.borrow_mut();
        let Some(scene) = e.scene.as_mut() else {
            return -1;
        };
        match scene.add_photo() {
            Some(idx) => {
                web_sys::console::log_1(
                    &format!("🖼 photo {} of {} added", idx + 1, scene.config().max_photos).into(),
                );
                idx as i32
            }
            None => {
                web_sys::console::warn_1(&"Photo cap reached".into());
                -1
            }
        }
    })
}

/// Advance physics and element animation one tick.
#[wasm_bindgen]
pub fn advance_frame() {
    ENGINE.with(|cell| {
        let mut e = cell.borrow_mut();
        if e.paused {
            return;
        }
        let sample = e.latest_sample;
        let mode = e.machine.mode();
        e.physics.step(mode, &sample);

        let orientation = e.physics.orientation();
        let anchor_local =
            formation_rotation(orientation.x, orientation.y).inverse() * e.focus_anchor;
        if let Some(scene) = e.scene.as_mut() {
            scene.tick(mode, anchor_local);
        }
    });
}

// ============================================================================
// TRANSFORM EXPORTS (read by the three.js renderer each frame)
// ============================================================================

/// 7 floats per element: position xyz, rotation xyz, scale.
/// Kinds: 0 gold, 1 silver, 2 gem, 3 emerald.
#[wasm_bindgen]
pub fn population_transforms(kind: u32) -> Vec<f32> {
    ENGINE.with(|cell| {
        let e = cell.borrow();
        let mut out = Vec::new();
        if let (Some(scene), Some(kind)) = (e.scene.as_ref(), PopulationKind::from_index(kind)) {
            scene.population(kind).write_transforms(&mut out);
        }
        out
    })
}

/// 3 floats per dust mote
#[wasm_bindgen]
pub fn dust_positions() -> Vec<f32> {
    ENGINE.with(|cell| {
        let e = cell.borrow();
        let mut out = Vec::new();
        if let Some(scene) = e.scene.as_ref() {
            scene.dust().write_positions(&mut out);
        }
        out
    })
}

/// 6 floats per photo: position xyz, scale, faces-viewpoint flag, yaw
#[wasm_bindgen]
pub fn photo_transforms() -> Vec<f32> {
    ENGINE.with(|cell| {
        let e = cell.borrow();
        let mut out = Vec::new();
        if let Some(scene) = e.scene.as_ref() {
            scene.photos().write_transforms(&mut out);
        }
        out
    })
}

/// Centerpiece star: position xyz and accumulated spin
#[wasm_bindgen]
pub fn star_transform() -> Vec<f32> {
    ENGINE.with(|cell| {
        let e = cell.borrow();
        match e.scene.as_ref() {
            Some(scene) => {
                let p = scene.star().position();
                vec![p.x, p.y, p.z, scene.star().spin()]
            }
            None => Vec::new(),
        }
    })
}

/// Formation group orientation: [pitch, yaw]
#[wasm_bindgen]
pub fn formation_orientation() -> Vec<f32> {
    ENGINE.with(|cell| {
        let o = cell.borrow().physics.orientation();
        vec![o.x, o.y]
    })
}

/// 0 Formation, 1 Dispersed, 2 Focused
#[wasm_bindgen]
pub fn current_mode() -> u32 {
    ENGINE.with(|cell| match cell.borrow().machine.mode() {
        InteractionMode::Formation => 0,
        InteractionMode::Dispersed => 1,
        InteractionMode::Focused { .. } => 2,
    })
}

/// Pinned photo index, -1 when not focusing
#[wasm_bindgen]
pub fn focus_target() -> i32 {
    ENGINE.with(|cell| {
        cell.borrow()
            .machine
            .mode()
            .focus_target()
            .map(|t| t as i32)
            .unwrap_or(-1)
    })
}

#[wasm_bindgen]
pub fn photo_count() -> u32 {
    ENGINE.with(|cell| {
        cell.borrow()
            .scene
            .as_ref()
            .map(|s| s.photos().len() as u32)
            .unwrap_or(0)
    })
}

/// Status line code for the shell: 0 ready, 1 gathering, 2 roaming,
/// 3 inspecting, 4 no photos
#[wasm_bindgen]
pub fn status_code() -> u32 {
    ENGINE.with(|cell| cell.borrow().status.code())
}
