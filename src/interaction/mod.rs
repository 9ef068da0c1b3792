//! Interaction module - the mode state machine
//!
//! Re-exports only in mod.rs, logic in submodules.

mod machine;

pub use machine::{InteractionMachine, InteractionMode, ModeEvent};
