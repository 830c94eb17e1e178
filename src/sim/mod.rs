//! Simulation module - mode state machine, particle field, color easing
//!
//! Re-exports only. All logic in submodules.

mod color;
mod field;
mod mode;

pub use color::{hsl_to_rgb, palette_for, ColorController};
pub use field::{FrameInput, ParticleField};
pub use mode::{next_mode, Mode, ModeMachine, Transition};
