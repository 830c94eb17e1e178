//! Hand landmark intake - the detector callback path
//!
//! Receives one hand's 21 landmarks per detector frame (or a "hand lost"
//! signal) and runs classify → debounce → possibly transition as one
//! uninterrupted section inside a single borrow of the simulation cell.
//! The Explode transition seeds particle velocities here, so the whole
//! decision is atomic with respect to the render loop.

use wasm_bindgen::prelude::*;

use crate::gesture::{classify, hand_world_position, Gesture, HandLandmark};
use crate::sim::{Mode, Transition};

const LANDMARK_FLOATS: usize = 21 * 3;

/// Called from JavaScript with a flat Float32Array of 63 values
/// (21 landmarks × x, y, z) whenever the detector sees a hand.
#[wasm_bindgen]
pub fn update_hand_landmarks(data: &[f32]) {
    if data.len() != LANDMARK_FLOATS {
        web_sys::console::warn_1(
            &format!(
                "Invalid landmark data length: {} (expected {})",
                data.len(),
                LANDMARK_FLOATS
            )
            .into(),
        );
        return;
    }

    let mut landmarks = [HandLandmark::default(); 21];
    for (i, lm) in landmarks.iter_mut().enumerate() {
        *lm = HandLandmark {
            x: data[i * 3],
            y: data[i * 3 + 1],
            z: data[i * 3 + 2],
        };
    }

    if let Some(transition) = ingest_landmarks(&landmarks, js_sys::Date::now()) {
        web_sys::console::log_1(
            &format!("mode: {} -> {}", transition.from.label(), transition.to.label()).into(),
        );
    }
}

/// Called from JavaScript when the detector reports no hand this frame.
#[wasm_bindgen]
pub fn hand_lost() {
    ingest_hand_lost(js_sys::Date::now());
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Classify, debounce, and apply any confirmed transition. Returns the
/// committed transition, if one fired.
pub(crate) fn ingest_landmarks(
    landmarks: &[HandLandmark; 21],
    now_ms: f64,
) -> Option<Transition> {
    super::with_sim(|sim| {
        let raw = classify(landmarks);
        sim.hand = hand_world_position(landmarks);
        sim.hand_detected = true;

        let confirmed = sim.debouncer.observe(raw, now_ms)?;
        let transition = sim.machine.apply(confirmed)?;
        if transition.to == Mode::Explode {
            let hand = sim.hand;
            sim.field.seed_explode(hand, &mut rand::thread_rng());
        }
        Some(transition)
    })
}

/// No hand counts as `Gesture::None`, which debounces like any other value
/// but matches no transition-table entry. The stored hand position is
/// deliberately left at its last value.
pub(crate) fn ingest_hand_lost(now_ms: f64) {
    super::with_sim(|sim| {
        sim.hand_detected = false;
        if let Some(confirmed) = sim.debouncer.observe(Gesture::None, now_ms) {
            let _ = sim.machine.apply(confirmed);
        }
    });
}
