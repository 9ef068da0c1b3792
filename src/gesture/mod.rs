//! Gesture module - hand-pose classification
//!
//! Pure pose predicates in `landmarks`, smoothing and debouncing state
//! in `classifier`. Re-exports only in mod.rs, logic in submodules.

mod classifier;
mod landmarks;

pub use classifier::{GestureClassifier, GestureSample};
pub use landmarks::{parse_landmarks, FLAT_BUFFER_LEN};
