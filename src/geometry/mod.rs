//! Geometry module - one-time glyph sampling for the TextForm targets
//!
//! Re-exports only. All logic in submodules.

mod raster;
mod sampler;

pub use raster::rasterize_text_luma;
pub use sampler::{fallback_cloud, sample_targets};
