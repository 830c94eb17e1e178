//! Glyph pixel sampling - luma raster in, particle targets out
//!
//! Pure core of the geometry sampler: collects bright pixels from a
//! rasterized text image, shuffles them, and maps each particle index onto
//! `pixels[i % len]` in world units with small independent jitter. Runs once
//! at startup. Deterministic in topology (count and bounds), randomized in
//! coordinates.

use glam::Vec3;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config;

/// Sample `count` world-space targets from a grayscale raster.
///
/// Falls back to a bounded random cloud when nothing clears the brightness
/// threshold (e.g. the font failed to load and the raster is blank).
pub fn sample_targets<R: Rng>(
    luma: &[u8],
    width: usize,
    height: usize,
    count: usize,
    rng: &mut R,
) -> Vec<Vec3> {
    // Stride 2 keeps the candidate set small without visibly thinning glyphs.
    let mut bright: Vec<(usize, usize)> = Vec::new();
    for y in (0..height).step_by(2) {
        for x in (0..width).step_by(2) {
            if luma[y * width + x] >= config::LUMA_THRESHOLD {
                bright.push((x, y));
            }
        }
    }

    if bright.is_empty() {
        return fallback_cloud(count, rng);
    }
    bright.shuffle(rng);

    (0..count)
        .map(|i| {
            let (px, py) = bright[i % bright.len()];
            let x = (px as f32 / width as f32 - 0.5) * (2.0 * config::TEXT_HALF_WIDTH);
            let y = (0.5 - py as f32 / height as f32) * (2.0 * config::TEXT_HALF_HEIGHT);
            Vec3::new(
                x + rng.gen_range(-config::TEXT_JITTER_XY..=config::TEXT_JITTER_XY),
                y + rng.gen_range(-config::TEXT_JITTER_XY..=config::TEXT_JITTER_XY),
                rng.gen_range(-config::TEXT_JITTER_Z..=config::TEXT_JITTER_Z),
            )
        })
        .collect()
}

/// Uniform points inside the text box. Used when rasterization yields
/// nothing, so TextForm still has a shape to converge on.
pub fn fallback_cloud<R: Rng>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-config::TEXT_HALF_WIDTH..=config::TEXT_HALF_WIDTH),
                rng.gen_range(-config::TEXT_HALF_HEIGHT..=config::TEXT_HALF_HEIGHT),
                rng.gen_range(-config::TEXT_JITTER_Z..=config::TEXT_JITTER_Z),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const W: usize = 64;
    const H: usize = 32;

    fn raster_with_block() -> Vec<u8> {
        // White 10x6 block in the upper-left quadrant of a black raster.
        let mut luma = vec![0u8; W * H];
        for y in 4..10 {
            for x in 8..18 {
                luma[y * W + x] = 255;
            }
        }
        luma
    }

    fn in_text_box(p: Vec3) -> bool {
        p.x.abs() <= config::TEXT_HALF_WIDTH + config::TEXT_JITTER_XY
            && p.y.abs() <= config::TEXT_HALF_HEIGHT + config::TEXT_JITTER_XY
            && p.z.abs() <= config::TEXT_JITTER_Z
    }

    #[test]
    fn sample_count_is_exact() {
        let mut rng = StdRng::seed_from_u64(1);
        let targets = sample_targets(&raster_with_block(), W, H, 5000, &mut rng);
        assert_eq!(targets.len(), 5000);
    }

    #[test]
    fn samples_stay_in_world_box() {
        let mut rng = StdRng::seed_from_u64(2);
        for p in sample_targets(&raster_with_block(), W, H, 1000, &mut rng) {
            assert!(in_text_box(p), "out of bounds: {p:?}");
        }
    }

    #[test]
    fn samples_cluster_on_bright_region() {
        // The block sits in the upper-left quadrant, so every target (minus
        // jitter) should land at negative x, positive y.
        let mut rng = StdRng::seed_from_u64(3);
        for p in sample_targets(&raster_with_block(), W, H, 500, &mut rng) {
            assert!(p.x < 0.0 + config::TEXT_JITTER_XY);
            assert!(p.y > 0.0 - config::TEXT_JITTER_XY);
        }
    }

    #[test]
    fn blank_raster_falls_back_to_cloud() {
        let mut rng = StdRng::seed_from_u64(4);
        let targets = sample_targets(&vec![0u8; W * H], W, H, 800, &mut rng);
        assert_eq!(targets.len(), 800);
        for p in targets {
            assert!(in_text_box(p));
        }
    }

    #[test]
    fn dim_pixels_do_not_pass_threshold() {
        let mut rng = StdRng::seed_from_u64(5);
        let luma = vec![config::LUMA_THRESHOLD - 1; W * H];
        // Everything below threshold behaves like a blank raster.
        let targets = sample_targets(&luma, W, H, 100, &mut rng);
        assert_eq!(targets.len(), 100);
    }
}
