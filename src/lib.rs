//! Ornament Web - gesture-controlled ornament tree engine
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - The panic hook installed at module load
//!
//! All #[wasm_bindgen] entry points live in `bridge`. The JS shell owns
//! the three.js renderer, the camera capture, and the MediaPipe hand
//! landmark model; this crate owns gesture classification, the
//! interaction state machine, rotation physics, and element animation.

mod bridge;
mod gesture;
mod interaction;
mod physics;
mod scene;

use wasm_bindgen::prelude::*;

pub use bridge::{advance_frame, ingest_hand_frame, init_engine};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("ornament-web loaded");
}
