//! Per-frame hand pose classification
//!
//! Pure function of one frame's 21 landmarks; no memory of prior frames.
//! A finger counts as extended when its tip sits farther from the wrist
//! than its PIP joint by a fixed ratio, which is robust to hand scale.

use glam::Vec3;

use crate::config;

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single 3D hand landmark (normalized image coordinates)
#[derive(Clone, Copy, Default)]
pub struct HandLandmark {
    pub x: f32, // 0-1 normalized
    pub y: f32, // 0-1 normalized
    pub z: f32, // Relative depth
}

/// Classified hand pose for one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Fist,
    Palm,
    /// Thumb + index + pinky extended, middle and ring curled.
    Ilu,
    Other,
    /// No hand in frame this detector callback.
    None,
}

impl Gesture {
    pub fn label(&self) -> &'static str {
        match self {
            Gesture::Fist => "fist",
            Gesture::Palm => "palm",
            Gesture::Ilu => "ilu",
            Gesture::Other => "other",
            Gesture::None => "none",
        }
    }
}

// ============================================================================
// GEOMETRY HELPERS
// ============================================================================

fn dist(a: HandLandmark, b: HandLandmark) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Midpoint of the wrist and the middle-finger MCP.
pub fn palm_center(landmarks: &[HandLandmark; 21]) -> HandLandmark {
    let w = landmarks[WRIST];
    let m = landmarks[MIDDLE_MCP];
    HandLandmark {
        x: (w.x + m.x) * 0.5,
        y: (w.y + m.y) * 0.5,
        z: (w.z + m.z) * 0.5,
    }
}

/// Map the palm center from normalized image space into world units.
///
/// X is mirrored so the field tracks the hand like a mirror; Y is flipped
/// (image Y grows downward); depth is scaled from the detector's relative z.
pub fn hand_world_position(landmarks: &[HandLandmark; 21]) -> Vec3 {
    let c = palm_center(landmarks);
    Vec3::new(
        (0.5 - c.x) * config::HAND_SPAN_X,
        (0.5 - c.y) * config::HAND_SPAN_Y,
        -c.z * config::HAND_DEPTH_SCALE,
    )
}

/// A finger is extended when its tip clears the wrist by more than the
/// configured ratio of the PIP joint's wrist distance.
fn finger_extended(landmarks: &[HandLandmark; 21], pip: usize, tip: usize) -> bool {
    let wrist = landmarks[WRIST];
    dist(landmarks[tip], wrist) > config::FINGER_EXTENDED_RATIO * dist(landmarks[pip], wrist)
}

/// The thumb folds across the palm rather than toward the wrist, so it is
/// measured against the palm center instead.
fn thumb_extended(landmarks: &[HandLandmark; 21]) -> bool {
    let center = palm_center(landmarks);
    dist(landmarks[THUMB_TIP], center) > dist(landmarks[THUMB_IP], center)
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Classify one frame of landmarks. First match wins: ilu, palm, fist, other.
pub fn classify(landmarks: &[HandLandmark; 21]) -> Gesture {
    let thumb = thumb_extended(landmarks);
    let index = finger_extended(landmarks, INDEX_PIP, INDEX_TIP);
    let middle = finger_extended(landmarks, MIDDLE_PIP, MIDDLE_TIP);
    let ring = finger_extended(landmarks, RING_PIP, RING_TIP);
    let pinky = finger_extended(landmarks, PINKY_PIP, PINKY_TIP);

    if thumb && index && pinky && !middle && !ring {
        Gesture::Ilu
    } else if thumb && index && middle && ring && pinky {
        Gesture::Palm
    } else if !index && !middle && !ring && !pinky {
        // Thumb state is irrelevant for a fist.
        Gesture::Fist
    } else {
        Gesture::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> HandLandmark {
        HandLandmark { x, y, z: 0.0 }
    }

    /// Build a synthetic hand with each finger either extended or curled.
    /// Wrist at the bottom, fingers pointing up (image Y grows downward).
    fn hand(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> [HandLandmark; 21] {
        let mut lm = [HandLandmark::default(); 21];
        lm[WRIST] = at(0.5, 0.9);

        // Finger columns: (mcp, pip, dip, tip, x, extended)
        let fingers = [
            (INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP, 0.40, index),
            (MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP, 0.48, middle),
            (RING_MCP, RING_PIP, RING_DIP, RING_TIP, 0.56, ring),
            (PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP, 0.64, pinky),
        ];
        for (mcp, pip, dip, tip, x, ext) in fingers {
            lm[mcp] = at(x, 0.70);
            lm[pip] = at(x, 0.65);
            lm[dip] = at(x, if ext { 0.52 } else { 0.70 });
            // Extended tip is ~2x the pip-to-wrist distance; curled tip
            // drops back toward the wrist, well under the 1.05 ratio.
            lm[tip] = at(x, if ext { 0.40 } else { 0.78 });
        }

        // Palm center is the wrist / middle-MCP midpoint: (0.49, 0.80).
        lm[THUMB_CMC] = at(0.42, 0.85);
        lm[THUMB_MCP] = at(0.38, 0.82);
        lm[THUMB_IP] = at(0.36, 0.80);
        lm[THUMB_TIP] = if thumb { at(0.24, 0.78) } else { at(0.42, 0.80) };

        lm
    }

    #[test]
    fn all_curled_is_fist() {
        assert_eq!(classify(&hand(false, false, false, false, false)), Gesture::Fist);
    }

    #[test]
    fn fist_ignores_thumb() {
        assert_eq!(classify(&hand(true, false, false, false, false)), Gesture::Fist);
    }

    #[test]
    fn all_extended_is_palm() {
        assert_eq!(classify(&hand(true, true, true, true, true)), Gesture::Palm);
    }

    #[test]
    fn thumb_index_pinky_is_ilu() {
        assert_eq!(classify(&hand(true, true, false, false, true)), Gesture::Ilu);
    }

    #[test]
    fn partial_pose_is_other() {
        // "Peace" - index and middle only.
        assert_eq!(classify(&hand(false, true, true, false, false)), Gesture::Other);
        // Four fingers without thumb: neither palm nor fist.
        assert_eq!(classify(&hand(false, true, true, true, true)), Gesture::Other);
    }

    #[test]
    fn hand_position_mirrors_x_and_flips_y() {
        let lm = hand(false, false, false, false, false);
        let pos = hand_world_position(&lm);
        // Palm center x ~0.49 (left of frame center) -> slightly positive world x.
        assert!(pos.x > 0.0);
        // Palm center y ~0.80 (lower half of image) -> negative world y.
        assert!(pos.y < 0.0);
    }
}
