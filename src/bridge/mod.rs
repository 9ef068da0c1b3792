//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod engine;
mod frame;
mod hand;

pub use hand::{ingest_hand_frame, ingest_no_hand, should_run_inference};

pub use frame::{
    add_photo, advance_frame, current_mode, dust_positions, focus_target, formation_orientation,
    init_engine, photo_count, photo_transforms, population_transforms, set_focus_anchor,
    set_paused, set_viewpoint, star_transform, status_code,
};
