//! Tunables for the particle field, gesture pipeline, and text sampler.
//!
//! Everything here is a recognized knob; the simulation reads these and
//! nothing else. Lerp rates are fractional per-frame steps tuned against a
//! 60 fps cadence.

/// Number of particles. Fixed at startup; never changes afterwards.
pub const PARTICLE_COUNT: usize = 5000;

// ============================================================================
// FIELD GEOMETRY
// ============================================================================

/// Radius of the resting sphere particles idle on.
pub const IDLE_RADIUS: f32 = 1.3;
/// Radius of the cluster that tracks the hand in Follow/Implode.
pub const FOLLOW_RADIUS: f32 = 0.4;

// ============================================================================
// PER-MODE EASING (fraction of remaining distance per frame)
// ============================================================================

pub const IDLE_LERP: f32 = 0.04;
/// Follow converges 1.5x faster than Idle so the cluster snaps to the hand.
pub const FOLLOW_LERP: f32 = IDLE_LERP * 1.5;
pub const IMPLODE_LERP: f32 = 0.08;
/// Slowest rate: keeps the text formation stable against hand jitter.
pub const TEXT_LERP: f32 = 0.03;

// ============================================================================
// EXPLODE / IMPLODE DYNAMICS
// ============================================================================

/// Base outward speed seeded on the Explode transition (units per frame).
pub const EXPLODE_SPEED: f32 = 0.15;
/// Keeps the seeding direction finite when a particle sits on the hand.
pub const EXPLODE_DISTANCE_FLOOR: f32 = 0.1;
/// Multiplicative velocity decay per frame while exploding.
pub const EXPLODE_DECAY: f32 = 0.995;
/// Residual momentum bleed-off per frame while imploding.
pub const IMPLODE_VELOCITY_DECAY: f32 = 0.9;

// ============================================================================
// MODE MACHINE
// ============================================================================

/// Transition-progress growth per second (reaches 1.0 in 1.25 s).
pub const PROGRESS_RATE: f32 = 0.8;
/// Implode may only return to Follow once progress passes this threshold.
pub const IMPLODE_EXIT_PROGRESS: f32 = 0.9;
/// A raw gesture must persist this long before it can drive a transition.
pub const GESTURE_CONFIRM_MS: f64 = 300.0;

// ============================================================================
// CLASSIFIER
// ============================================================================

/// A finger counts as extended when tip-to-wrist exceeds this ratio of
/// pip-to-wrist.
pub const FINGER_EXTENDED_RATIO: f32 = 1.05;

// ============================================================================
// HAND MAPPING (normalized image coords -> world units)
// ============================================================================

/// Horizontal world span of the camera frame (X mirrored for selfie view).
pub const HAND_SPAN_X: f32 = 2.6;
pub const HAND_SPAN_Y: f32 = 2.0;
pub const HAND_DEPTH_SCALE: f32 = 1.5;

// ============================================================================
// COLOR
// ============================================================================

/// Global hue easing per frame toward the active palette.
pub const HUE_LERP: f32 = 0.02;
/// Per-particle stored color easing per frame.
pub const COLOR_LERP: f32 = 0.03;

/// Mode palette in HSL (hue in degrees, saturation/lightness in [0,1]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

pub const IDLE_PALETTE: Palette = Palette { hue: 230.0, saturation: 0.8, lightness: 0.6 };
pub const FOLLOW_PALETTE: Palette = Palette { hue: 190.0, saturation: 0.9, lightness: 0.6 };
pub const EXPLODE_PALETTE: Palette = Palette { hue: 35.0, saturation: 1.0, lightness: 0.6 };
pub const IMPLODE_PALETTE: Palette = Palette { hue: 285.0, saturation: 0.8, lightness: 0.55 };
pub const TEXT_PALETTE: Palette = Palette { hue: 140.0, saturation: 0.9, lightness: 0.65 };

// ============================================================================
// TEXT SAMPLER
// ============================================================================

/// The two lines the TextForm mode spells out. Fixed at build time.
pub const TEXT_LINE_TOP: &str = "HELLO";
pub const TEXT_LINE_BOTTOM: &str = "WORLD";

/// Off-screen raster size for glyph sampling.
pub const TEXT_RASTER_WIDTH: u32 = 480;
pub const TEXT_RASTER_HEIGHT: u32 = 270;
/// Minimum luma for a raster pixel to become a target candidate.
pub const LUMA_THRESHOLD: u8 = 128;

/// World half-extents of the box the sampled text maps into.
pub const TEXT_HALF_WIDTH: f32 = 1.6;
pub const TEXT_HALF_HEIGHT: f32 = 0.9;
/// Independent per-point jitter applied to sampled targets.
pub const TEXT_JITTER_XY: f32 = 0.03;
pub const TEXT_JITTER_Z: f32 = 0.15;
