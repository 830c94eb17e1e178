//! Shared simulation state and the per-frame step
//!
//! One thread-local cell owns everything the detector callback writes and
//! the render loop reads: mode machine, debouncer, hand snapshot, and the
//! particle buffers. WASM is single-threaded, so the RefCell borrow is the
//! whole synchronization story - each callback runs to completion inside a
//! single borrow.

use std::cell::RefCell;

use glam::Vec3;
use rand::thread_rng;
use wasm_bindgen::prelude::*;

use crate::config;
use crate::geometry;
use crate::gesture::GestureDebouncer;
use crate::sim::{ColorController, FrameInput, ModeMachine, ParticleField};

pub(crate) struct SimState {
    pub machine: ModeMachine,
    pub field: ParticleField,
    pub colors: ColorController,
    pub debouncer: GestureDebouncer,
    /// Last-known hand position in world units. Keeps its value when the
    /// hand leaves the frame.
    pub hand: Vec3,
    pub hand_detected: bool,
    pub detector_failed: bool,
    start_ms: Option<f64>,
    last_frame_ms: Option<f64>,
}

impl SimState {
    fn new() -> Self {
        Self {
            machine: ModeMachine::new(),
            field: ParticleField::new(config::PARTICLE_COUNT, &mut thread_rng()),
            colors: ColorController::new(),
            debouncer: GestureDebouncer::new(),
            hand: Vec3::ZERO,
            hand_detected: false,
            detector_failed: false,
            start_ms: None,
            last_frame_ms: None,
        }
    }
}

thread_local! {
    static SIM: RefCell<SimState> = RefCell::new(SimState::new());
}

pub(crate) fn with_sim<R>(f: impl FnOnce(&mut SimState) -> R) -> R {
    SIM.with(|cell| f(&mut cell.borrow_mut()))
}

// ============================================================================
// FRAME STEP (called from the render loop)
// ============================================================================

/// Advance the simulation one frame: dt, transition-progress, one particle
/// pass, one color pass. Runs before the render submission each refresh.
pub fn advance(now_ms: f64) {
    with_sim(|sim| {
        let start = *sim.start_ms.get_or_insert(now_ms);
        let dt = match sim.last_frame_ms {
            // Clamped so a backgrounded tab does not integrate a huge step.
            Some(prev) => (((now_ms - prev) / 1000.0) as f32).clamp(0.0, 0.1),
            None => 1.0 / 60.0,
        };
        sim.last_frame_ms = Some(now_ms);

        sim.machine.advance(dt);
        let mode = sim.machine.mode();
        let input = FrameInput {
            time_s: ((now_ms - start) / 1000.0) as f32,
            hand: sim.hand,
            hand_detected: sim.hand_detected,
        };
        sim.field.update(mode, &input);
        sim.colors.step(mode);
        sim.field.blend_colors(&sim.colors, mode);
    });
}

// ============================================================================
// STARTUP
// ============================================================================

/// Sample the TextForm glyph targets. Runs once from `init`; a failed
/// rasterization (no DOM, font missing) takes the bounded fallback cloud.
pub fn init_text_targets() {
    let mut rng = thread_rng();
    let targets = match geometry::rasterize_text_luma() {
        Some(luma) => geometry::sample_targets(
            &luma,
            config::TEXT_RASTER_WIDTH as usize,
            config::TEXT_RASTER_HEIGHT as usize,
            config::PARTICLE_COUNT,
            &mut rng,
        ),
        None => {
            web_sys::console::warn_1(&"text rasterization failed, using fallback cloud".into());
            geometry::fallback_cloud(config::PARTICLE_COUNT, &mut rng)
        }
    };
    with_sim(|sim| sim.field.set_text_targets(targets));
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS (UI readouts, failure reporting)
// ============================================================================

/// Name of the active mode, for the status label.
#[wasm_bindgen]
pub fn current_mode_label() -> String {
    with_sim(|sim| sim.machine.mode().label().to_string())
}

/// Raw gesture currently held, for the live feedback readout.
#[wasm_bindgen]
pub fn current_gesture_label() -> String {
    with_sim(|sim| sim.debouncer.current().label().to_string())
}

/// Normalized time since the last mode transition.
#[wasm_bindgen]
pub fn transition_progress() -> f32 {
    with_sim(|sim| sim.machine.progress())
}

/// Called by the page when the camera or detector cannot start. Logged once;
/// the field keeps rendering in Idle.
#[wasm_bindgen]
pub fn report_detector_failure(message: &str) {
    with_sim(|sim| {
        if !sim.detector_failed {
            sim.detector_failed = true;
            web_sys::console::warn_1(&format!("detector unavailable: {message}").into());
        }
    });
}

#[wasm_bindgen]
pub fn detector_failed() -> bool {
    with_sim(|sim| sim.detector_failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Mode;

    #[test]
    fn advance_moves_time_and_progress() {
        advance(0.0);
        let p0 = with_sim(|sim| sim.machine.progress());
        advance(500.0);
        let p1 = with_sim(|sim| sim.machine.progress());
        assert!(p1 > p0);
        assert_eq!(with_sim(|sim| sim.machine.mode()), Mode::Idle);
    }

    #[test]
    fn advance_clamps_large_gaps() {
        advance(0.0);
        let before = with_sim(|sim| sim.machine.progress());
        // A 10-second stall integrates as at most 0.1 s.
        advance(10_000.0);
        let after = with_sim(|sim| sim.machine.progress());
        assert!(after - before <= 0.1 * crate::config::PROGRESS_RATE + 1e-6);
    }
}
