//! Hand landmark indices and pose predicates
//!
//! Works on the 21-point MediaPipe hand layout. Every predicate here is
//! a pure function of a single frame's landmarks, so classification is
//! reproducible for a fixed input.

use nalgebra::Vector2;

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

pub const LANDMARK_COUNT: usize = 21;

/// Flat buffer length from JS: 21 landmarks x (x, y, z)
pub const FLAT_BUFFER_LEN: usize = LANDMARK_COUNT * 3;

/// Fingertip / mid-joint pairs for the bend test (thumb excluded)
const FINGER_TIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];
const FINGER_PIPS: [usize; 4] = [INDEX_PIP, MIDDLE_PIP, RING_PIP, PINKY_PIP];

/// Thumb-to-index distance below this counts as a pinch (normalized units)
pub const PINCH_THRESHOLD: f32 = 0.05;

/// Bent fingers needed to call the pose a fist
pub const FIST_FINGER_COUNT: usize = 3;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single landmark point in normalized [0,1] image coordinates
#[derive(Clone, Copy, Default, Debug)]
pub struct HandLandmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Parse the flat Float32Array handed over from JS.
/// Returns None for anything but exactly 63 floats; the caller treats
/// that the same as "no hand detected".
pub fn parse_landmarks(flat: &[f32]) -> Option<[HandLandmark; LANDMARK_COUNT]> {
    if flat.len() != FLAT_BUFFER_LEN {
        return None;
    }
    let mut landmarks = [HandLandmark::default(); LANDMARK_COUNT];
    for (i, lm) in landmarks.iter_mut().enumerate() {
        *lm = HandLandmark {
            x: flat[i * 3],
            y: flat[i * 3 + 1],
            z: flat[i * 3 + 2],
        };
    }
    Some(landmarks)
}

// ============================================================================
// POSE PREDICATES
// ============================================================================

/// Tracked hand position: midpoint of wrist and middle-finger base.
/// The x axis is mirrored to match the mirrored camera preview.
pub fn palm_point(landmarks: &[HandLandmark; LANDMARK_COUNT]) -> Vector2<f32> {
    let wrist = landmarks[WRIST];
    let mcp = landmarks[MIDDLE_MCP];
    Vector2::new(1.0 - (wrist.x + mcp.x) / 2.0, (wrist.y + mcp.y) / 2.0)
}

fn distance_2d(a: HandLandmark, b: HandLandmark) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// A finger counts as bent when its tip sits closer to the wrist than
/// its mid joint does.
pub fn bent_finger_count(landmarks: &[HandLandmark; LANDMARK_COUNT]) -> usize {
    let wrist = landmarks[WRIST];
    FINGER_TIPS
        .iter()
        .zip(FINGER_PIPS.iter())
        .filter(|(&tip, &pip)| {
            distance_2d(landmarks[tip], wrist) < distance_2d(landmarks[pip], wrist)
        })
        .count()
}

pub fn is_fist(landmarks: &[HandLandmark; LANDMARK_COUNT]) -> bool {
    bent_finger_count(landmarks) >= FIST_FINGER_COUNT
}

/// Thumb tip to index tip distance, for the pinch test
pub fn pinch_distance(landmarks: &[HandLandmark; LANDMARK_COUNT]) -> f32 {
    distance_2d(landmarks[THUMB_TIP], landmarks[INDEX_TIP])
}

// ============================================================================
// TEST FIXTURES (shared with classifier tests)
// ============================================================================

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    fn landmark(x: f32, y: f32) -> HandLandmark {
        HandLandmark { x, y, z: 0.0 }
    }

    /// Open hand: wrist at bottom, all tips further from the wrist than
    /// their mid joints.
    pub(crate) fn open_hand() -> [HandLandmark; LANDMARK_COUNT] {
        let mut lm = [landmark(0.5, 0.9); LANDMARK_COUNT];
        lm[MIDDLE_MCP] = landmark(0.5, 0.7);
        lm[THUMB_TIP] = landmark(0.3, 0.6);
        for (i, (&tip, &pip)) in FINGER_TIPS.iter().zip(FINGER_PIPS.iter()).enumerate() {
            let x = 0.35 + 0.1 * i as f32;
            lm[pip] = landmark(x, 0.6);
            lm[tip] = landmark(x, 0.4);
        }
        lm
    }

    /// Fist: all four tips curled back closer to the wrist than the mid
    /// joints.
    pub(crate) fn fist_hand() -> [HandLandmark; LANDMARK_COUNT] {
        let mut lm = open_hand();
        for &tip in FINGER_TIPS.iter() {
            lm[tip] = landmark(0.5, 0.85);
        }
        lm
    }

    /// Open hand with thumb and index tips touching.
    pub(crate) fn pinch_hand() -> [HandLandmark; LANDMARK_COUNT] {
        let mut lm = open_hand();
        lm[THUMB_TIP] = landmark(0.35, 0.41);
        lm[INDEX_TIP] = landmark(0.35, 0.4);
        lm
    }

    pub(crate) fn at(x: f32, y: f32) -> HandLandmark {
        landmark(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{at, fist_hand, open_hand, pinch_hand};
    use super::*;

    fn landmark(x: f32, y: f32) -> HandLandmark {
        at(x, y)
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(parse_landmarks(&[0.0; 62]).is_none());
        assert!(parse_landmarks(&[0.0; 64]).is_none());
        assert!(parse_landmarks(&[]).is_none());
        assert!(parse_landmarks(&[0.0; FLAT_BUFFER_LEN]).is_some());
    }

    #[test]
    fn parse_orders_coordinates() {
        let mut flat = [0.0f32; FLAT_BUFFER_LEN];
        flat[MIDDLE_MCP * 3] = 0.25;
        flat[MIDDLE_MCP * 3 + 1] = 0.75;
        let lm = parse_landmarks(&flat).unwrap();
        assert_eq!(lm[MIDDLE_MCP].x, 0.25);
        assert_eq!(lm[MIDDLE_MCP].y, 0.75);
    }

    #[test]
    fn palm_point_mirrors_x() {
        let mut lm = open_hand();
        lm[WRIST] = landmark(0.2, 0.8);
        lm[MIDDLE_MCP] = landmark(0.4, 0.6);
        let palm = palm_point(&lm);
        assert!((palm.x - 0.7).abs() < 1e-6); // 1 - (0.2+0.4)/2
        assert!((palm.y - 0.7).abs() < 1e-6);
    }

    #[test]
    fn open_hand_is_not_fist() {
        assert_eq!(bent_finger_count(&open_hand()), 0);
        assert!(!is_fist(&open_hand()));
    }

    #[test]
    fn curled_hand_is_fist() {
        assert_eq!(bent_finger_count(&fist_hand()), 4);
        assert!(is_fist(&fist_hand()));
    }

    #[test]
    fn three_bent_fingers_make_a_fist() {
        let mut lm = open_hand();
        for &tip in FINGER_TIPS.iter().take(3) {
            lm[tip] = landmark(0.5, 0.85);
        }
        assert_eq!(bent_finger_count(&lm), 3);
        assert!(is_fist(&lm));
    }

    #[test]
    fn pinch_distance_detects_touching_tips() {
        assert!(pinch_distance(&pinch_hand()) < PINCH_THRESHOLD);
        assert!(pinch_distance(&open_hand()) >= PINCH_THRESHOLD);
    }
}
