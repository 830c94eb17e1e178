//! Gesture Field - hand-gesture-driven 3D particle field
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The page owns the camera and the hand-landmark detector; this crate owns
//! everything downstream: gesture classification, debouncing, the mode state
//! machine, the particle simulation, and the WebGPU point-sprite renderer.

mod bridge;
mod config;
mod geometry;
mod gesture;
mod renderer;
mod sim;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    current_gesture_label, current_mode_label, detector_failed, hand_lost,
    report_detector_failure, transition_progress, update_hand_landmarks,
};

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
}

/// Initialize WebGPU and the text targets - must be called before render_frame
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn init() -> Result<(), JsValue> {
    renderer::initialize_gpu().await?;
    bridge::init_text_targets();
    console_log!("field ready: {} particles", config::PARTICLE_COUNT);
    Ok(())
}

/// Advance the simulation and render one frame. `now_ms` is the
/// requestAnimationFrame timestamp.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_frame(now_ms: f64) {
    bridge::advance(now_ms);
    renderer::render_frame(now_ms);
}
