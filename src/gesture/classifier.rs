//! Palm smoothing and gesture debouncing
//!
//! Turns one frame's landmarks (or their absence) into a `GestureSample`.
//! Smoothing and the fist hysteresis counter live here, not in ambient
//! state, so skipped or dropped frames simply hold the last values.

use nalgebra::Vector2;

use super::landmarks::{
    is_fist, palm_point, pinch_distance, HandLandmark, LANDMARK_COUNT, PINCH_THRESHOLD,
};

/// Weight of the previous smoothed value in the palm EMA
pub const SMOOTHING: f32 = 0.8;

/// The fist counter must exceed this before a fist is confirmed,
/// so a confirmed fist first fires on the 7th consecutive fist frame.
pub const FIST_CONFIRM_FRAMES: u32 = 6;

/// One classifier invocation's output. Immutable once emitted; the
/// render chain always reads the latest sample, never a history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub hand_present: bool,
    /// Smoothed palm position, normalized [0,1] per axis, x mirrored
    pub palm: Vector2<f32>,
    pub confirmed_fist: bool,
    pub pinch_active: bool,
}

impl Default for GestureSample {
    fn default() -> Self {
        Self {
            hand_present: false,
            palm: Vector2::zeros(),
            confirmed_fist: false,
            pinch_active: false,
        }
    }
}

/// Smoothing + hysteresis state for the single tracked hand
pub struct GestureClassifier {
    smoothed: Vector2<f32>,
    initialized: bool,
    fist_frames: u32,
}

impl GestureClassifier {
    pub fn new() -> Self {
        Self {
            smoothed: Vector2::zeros(),
            initialized: false,
            fist_frames: 0,
        }
    }

    /// Consume one detection result. `None` means no hand this frame:
    /// presence drops but smoothing state and the hysteresis counter
    /// hold, so transient dropouts cannot toggle the formation.
    pub fn ingest(&mut self, landmarks: Option<&[HandLandmark; LANDMARK_COUNT]>) -> GestureSample {
        let Some(lm) = landmarks else {
            return GestureSample {
                hand_present: false,
                palm: self.smoothed,
                confirmed_fist: false,
                pinch_active: false,
            };
        };

        let palm = palm_point(lm);
        if self.initialized {
            self.smoothed = self.smoothed * SMOOTHING + palm * (1.0 - SMOOTHING);
        } else {
            // First acquisition snaps straight to the palm point
            self.smoothed = palm;
            self.initialized = true;
        }

        let fist = is_fist(lm);
        // Fist wins: a pinch is only evaluated on non-fist frames
        let pinch = !fist && pinch_distance(lm) < PINCH_THRESHOLD;

        if fist {
            self.fist_frames += 1;
        } else {
            self.fist_frames = 0;
        }

        GestureSample {
            hand_present: true,
            palm: self.smoothed,
            confirmed_fist: self.fist_frames > FIST_CONFIRM_FRAMES,
            pinch_active: pinch,
        }
    }

    pub fn fist_frames(&self) -> u32 {
        self.fist_frames
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new()
    }
}
