//! Interaction mode state machine
//!
//! Consumes one `GestureSample` per classifier invocation and owns the
//! current mode. Losing the hand never forces a transition: detection
//! dropouts hold the current mode, only gestures move it.

use nalgebra::Vector3;

use crate::gesture::GestureSample;

/// The three interaction modes. `Focused` carries its target inline;
/// there is no "maybe -1" index anywhere in the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    /// Elements gathered into the tree shape, idle spin
    Formation,
    /// Free-floating cloud the hand can swirl
    Dispersed,
    /// Single photo pulled up for inspection
    Focused { target: usize },
}

impl InteractionMode {
    pub fn focus_target(&self) -> Option<usize> {
        match self {
            InteractionMode::Focused { target } => Some(*target),
            _ => None,
        }
    }
}

/// What one transition step did. The bridge uses this to surface status
/// changes and to seed the rotation physics on Formation -> Dispersed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeEvent {
    None,
    /// Entered Formation (confirmed fist), any pinned target cleared
    Gathered,
    /// Formation -> Dispersed; physics must seed its previous-palm
    /// tracker from the current smoothed palm
    BeganRoam,
    /// Entered Focused with the selected photo index
    FocusPinned(usize),
    /// Focused -> Dispersed on pinch release
    FocusReleased,
    /// Pinch with no photos uploaded; mode unchanged
    FocusDeclined,
}

pub struct InteractionMachine {
    mode: InteractionMode,
}

impl InteractionMachine {
    pub fn new() -> Self {
        Self {
            mode: InteractionMode::Formation,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Evaluate the transition rules, in priority order, for one
    /// classifier invocation. `photo_positions` are the focusable
    /// elements' world-space positions for target selection.
    pub fn apply(
        &mut self,
        sample: &GestureSample,
        photo_positions: &[Vector3<f32>],
        viewpoint: Vector3<f32>,
    ) -> ModeEvent {
        // 1. Pinch while dispersed grabs the nearest photo
        if sample.pinch_active && self.mode == InteractionMode::Dispersed {
            return match select_focus_target(photo_positions, viewpoint) {
                Some(target) => {
                    self.mode = InteractionMode::Focused { target };
                    ModeEvent::FocusPinned(target)
                }
                None => ModeEvent::FocusDeclined,
            };
        }

        // 2. A confirmed fist gathers the formation from any mode
        if sample.confirmed_fist {
            let event = if self.mode == InteractionMode::Formation {
                ModeEvent::None
            } else {
                ModeEvent::Gathered
            };
            self.mode = InteractionMode::Formation;
            return event;
        }

        // 3. Fallbacks: release a pinch, or let an open hand disperse.
        // Both require a detected hand; a dropout sample reports the
        // pinch as inactive and must not release the pin.
        match self.mode {
            InteractionMode::Focused { .. } if sample.hand_present && !sample.pinch_active => {
                self.mode = InteractionMode::Dispersed;
                ModeEvent::FocusReleased
            }
            InteractionMode::Formation if sample.hand_present => {
                self.mode = InteractionMode::Dispersed;
                ModeEvent::BeganRoam
            }
            _ => ModeEvent::None,
        }
    }
}

impl Default for InteractionMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// Nearest focusable element to the viewpoint; the lowest index wins
/// exact ties. None when no focusable elements exist.
pub fn select_focus_target(
    positions: &[Vector3<f32>],
    viewpoint: Vector3<f32>,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, pos) in positions.iter().enumerate() {
        let d = (pos - viewpoint).norm();
        match best {
            Some((_, min)) if d >= min => {}
            _ => best = Some((idx, d)),
        }
    }
    best.map(|(idx, _)| idx)
}
