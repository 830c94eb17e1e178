//! Color controller - double exponential smoothing over HSL
//!
//! A single global hue eases toward the active mode's palette, and each
//! particle's stored color then eases toward its derived target. The two
//! stages together give a smooth color wash on mode changes instead of a
//! palette pop. Per-particle variation is trigonometric in the index, so it
//! is stable across frames.

use glam::Vec3;

use crate::config::{self, Palette};
use crate::sim::Mode;

pub fn palette_for(mode: Mode) -> Palette {
    match mode {
        Mode::Idle => config::IDLE_PALETTE,
        Mode::Follow => config::FOLLOW_PALETTE,
        Mode::Explode => config::EXPLODE_PALETTE,
        Mode::Implode => config::IMPLODE_PALETTE,
        Mode::TextForm => config::TEXT_PALETTE,
    }
}

/// Standard HSL to RGB. Hue in degrees (any range), s/l in [0,1].
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Vec3 {
    let h = hue.rem_euclid(360.0);
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Vec3::new(r + m, g + m, b + m)
}

pub struct ColorController {
    /// Current global hue in degrees. Eases linearly along the hue axis (no
    /// wraparound shortcut), so a 230 -> 35 transition walks down through
    /// the spectrum monotonically.
    hue: f32,
}

impl ColorController {
    pub fn new() -> Self {
        Self { hue: config::IDLE_PALETTE.hue }
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Ease the global hue one frame toward the active palette.
    pub fn step(&mut self, mode: Mode) {
        let target = palette_for(mode).hue;
        self.hue += (target - self.hue) * config::HUE_LERP;
    }

    /// Target color for one particle: global hue plus a small deterministic
    /// per-index wobble in hue and lightness.
    pub fn particle_color(&self, index: usize, palette: Palette) -> Vec3 {
        let p = index as f32;
        let hue = self.hue + (p * 0.37).sin() * 12.0;
        let lightness = (palette.lightness + (p * 0.91).cos() * 0.08).clamp(0.05, 0.95);
        hsl_to_rgb(hue, palette.saturation, lightness)
    }
}

impl Default for ColorController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_primaries() {
        assert!((hsl_to_rgb(0.0, 1.0, 0.5) - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
        assert!((hsl_to_rgb(120.0, 1.0, 0.5) - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-5);
        assert!((hsl_to_rgb(240.0, 1.0, 0.5) - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
        // Negative hue wraps.
        assert!((hsl_to_rgb(-120.0, 1.0, 0.5) - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn hue_eases_monotonically_without_overshoot() {
        // Idle (230) into Explode (35), one simulated second at 60 steps.
        let mut c = ColorController::new();
        assert_eq!(c.hue(), 230.0);

        let mut prev = c.hue();
        for _ in 0..60 {
            c.step(Mode::Explode);
            assert!(c.hue() < prev, "hue must decrease every step");
            assert!(c.hue() > config::EXPLODE_PALETTE.hue, "no overshoot");
            prev = c.hue();
        }
    }

    #[test]
    fn hue_settles_at_target() {
        let mut c = ColorController::new();
        for _ in 0..2000 {
            c.step(Mode::Explode);
        }
        assert!((c.hue() - config::EXPLODE_PALETTE.hue).abs() < 0.5);
    }

    #[test]
    fn per_index_variation_is_stable() {
        let c = ColorController::new();
        let palette = palette_for(Mode::Idle);
        for i in [0usize, 1, 42, 4999] {
            assert_eq!(c.particle_color(i, palette), c.particle_color(i, palette));
        }
        // And actually varies between indices.
        assert_ne!(c.particle_color(0, palette), c.particle_color(1, palette));
    }

    #[test]
    fn colors_stay_in_unit_range() {
        let mut c = ColorController::new();
        let palette = palette_for(Mode::Explode);
        for _ in 0..120 {
            c.step(Mode::Explode);
        }
        for i in 0..500 {
            let rgb = c.particle_color(i, palette);
            for ch in [rgb.x, rgb.y, rgb.z] {
                assert!((0.0..=1.0).contains(&ch));
            }
        }
    }
}
