//! Renderer module - WebGPU point-sprite rendering for the particle field
//!
//! Re-exports only. All logic in submodules.

mod camera;
mod particles;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod state;

#[cfg(target_arch = "wasm32")]
pub use render::render_frame;
#[cfg(target_arch = "wasm32")]
pub use state::{initialize_gpu, RendererError};
