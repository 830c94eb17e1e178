//! Off-screen text rasterization via a 2D canvas
//!
//! Draws the two fixed text lines white-on-black into a scratch canvas and
//! returns one luma byte per pixel (the red channel - the fill is
//! grayscale). Any failure returns `None` and the caller takes the sampler's
//! fallback cloud instead; a missing font is not an error.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config;

pub fn rasterize_text_luma() -> Option<Vec<u8>> {
    let width = config::TEXT_RASTER_WIDTH;
    let height = config::TEXT_RASTER_HEIGHT;

    let document = web_sys::window()?.document()?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .ok()?
        .dyn_into()
        .ok()?;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into()
        .ok()?;

    let w = width as f64;
    let h = height as f64;

    ctx.set_fill_style_str("#000");
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.set_fill_style_str("#fff");
    ctx.set_font("bold 96px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(config::TEXT_LINE_TOP, w / 2.0, h * 0.30).ok()?;
    ctx.fill_text(config::TEXT_LINE_BOTTOM, w / 2.0, h * 0.70).ok()?;

    let image = ctx.get_image_data(0.0, 0.0, w, h).ok()?;
    let rgba = image.data();

    // RGBA -> luma, one byte per pixel.
    Some(rgba.iter().step_by(4).copied().collect())
}
