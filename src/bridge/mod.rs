//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod hand_landmarks;
mod sim;

pub use hand_landmarks::{hand_lost, update_hand_landmarks};
pub use sim::{
    // WASM entry points
    current_gesture_label,
    current_mode_label,
    detector_failed,
    report_detector_failure,
    transition_progress,
    // Internal API
    advance,
    init_text_targets,
};

pub(crate) use sim::with_sim;
