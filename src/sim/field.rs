//! Particle field - structure-of-arrays store and per-mode update rules
//!
//! Parallel arrays are deliberate: contiguous buffers feed the renderer's
//! instance buffer directly. The field never allocates after construction;
//! every frame is one pass mutating positions, velocities, alpha and size
//! in place. Targets are per-particle scratch values, recomputed each frame
//! from the active mode, never stored.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::config;
use crate::sim::color::{palette_for, ColorController};
use crate::sim::Mode;

/// Per-frame inputs shared by every particle.
#[derive(Clone, Copy)]
pub struct FrameInput {
    /// Wall-clock time in seconds (drives the oscillation terms).
    pub time_s: f32,
    /// Last-known hand position in world units. Retains its previous value
    /// when no hand is detected; never reset to the origin.
    pub hand: Vec3,
    /// Whether a hand was present in the most recent detector callback.
    pub hand_detected: bool,
}

pub struct ParticleField {
    pub count: usize,
    pub position: Vec<Vec3>,
    pub velocity: Vec<Vec3>,
    /// Resting point on the idle sphere. Assigned once, never mutated.
    pub original: Vec<Vec3>,
    pub color: Vec<Vec3>,
    pub alpha: Vec<f32>,
    pub size: Vec<f32>,
    /// Glyph targets for TextForm, one per particle. Set once at startup.
    pub text_targets: Vec<Vec3>,
    /// Per-particle random in [0,1), fixed at creation. Drives the explode
    /// spin phases and size spread without re-rolling every frame.
    hash: Vec<f32>,
}

impl ParticleField {
    pub fn new<R: Rng>(count: usize, rng: &mut R) -> Self {
        let mut original = Vec::with_capacity(count);
        let mut hash = Vec::with_capacity(count);
        for _ in 0..count {
            // Uniform direction, slight radial spread so the shell has depth.
            let z: f32 = rng.gen_range(-1.0..1.0);
            let theta: f32 = rng.gen_range(0.0..TAU);
            let xy = (1.0 - z * z).sqrt();
            let dir = Vec3::new(xy * theta.cos(), xy * theta.sin(), z);
            original.push(dir * config::IDLE_RADIUS * rng.gen_range(0.9..1.0));
            hash.push(rng.gen::<f32>());
        }

        let idle = palette_for(Mode::Idle);
        let base = crate::sim::color::hsl_to_rgb(idle.hue, idle.saturation, idle.lightness);

        Self {
            count,
            position: original.clone(),
            velocity: vec![Vec3::ZERO; count],
            text_targets: original.clone(),
            original,
            color: vec![base; count],
            alpha: vec![0.6; count],
            size: vec![0.035; count],
            hash,
        }
    }

    /// Install the precomputed glyph targets. Called once after sampling.
    pub fn set_text_targets(&mut self, targets: Vec<Vec3>) {
        debug_assert_eq!(targets.len(), self.count);
        self.text_targets = targets;
    }

    /// Explode side effect: every particle is flung along the line from its
    /// current position through the hand, with independent random spread per
    /// axis (depth gets less than the radial axes). The distance floor keeps
    /// a particle sitting exactly on the hand finite.
    pub fn seed_explode<R: Rng>(&mut self, hand: Vec3, rng: &mut R) {
        for i in 0..self.count {
            let d = hand - self.position[i];
            let dir = d / (d.length() + config::EXPLODE_DISTANCE_FLOOR);
            self.velocity[i] = Vec3::new(
                dir.x * rng.gen_range(0.5..1.5),
                dir.y * rng.gen_range(0.5..1.5),
                dir.z * rng.gen_range(0.3..0.8),
            ) * config::EXPLODE_SPEED;
        }
    }

    /// Advance every particle one simulation step for the active mode.
    pub fn update(&mut self, mode: Mode, input: &FrameInput) {
        match mode {
            Mode::Idle => self.update_idle(input),
            Mode::Follow => self.update_follow(input),
            Mode::Explode => self.update_explode(input),
            Mode::Implode => self.update_implode(input),
            Mode::TextForm => self.update_text(input),
        }
    }

    /// Ease the stored per-particle colors toward the controller's current
    /// derivation for the active palette.
    pub fn blend_colors(&mut self, colors: &ColorController, mode: Mode) {
        let palette = palette_for(mode);
        for i in 0..self.count {
            let target = colors.particle_color(i, palette);
            let current = self.color[i];
            self.color[i] += (target - current) * config::COLOR_LERP;
        }
    }

    fn update_idle(&mut self, input: &FrameInput) {
        let t = input.time_s;
        for i in 0..self.count {
            let p = i as f32;
            // Phase offsets by index desynchronize the drift.
            let drift = Vec3::new(
                (t * 0.9 + p * 0.37).sin() * 0.06,
                (t * 1.1 + p * 0.53).cos() * 0.06,
                (t * 0.7 + p * 0.29).sin() * 0.04,
            );
            let target = self.original[i] + drift;
            let current = self.position[i];
            self.position[i] += (target - current) * config::IDLE_LERP;
            self.alpha[i] = 0.55 + 0.25 * (t * 1.3 + p * 0.8).sin();
            self.size[i] = 0.035 + 0.012 * (t * 1.7 + p * 1.3).cos();
        }
    }

    fn update_follow(&mut self, input: &FrameInput) {
        let t = input.time_s;
        // One breathing term shared by the whole cluster.
        let scale = (config::FOLLOW_RADIUS / config::IDLE_RADIUS) * (1.0 + 0.1 * (t * 2.0).sin());
        for i in 0..self.count {
            let p = i as f32;
            let target = input.hand + self.original[i] * scale;
            let current = self.position[i];
            self.position[i] += (target - current) * config::FOLLOW_LERP;
            self.alpha[i] = 0.7 + 0.2 * (t * 3.0 + p * 0.9).sin();
            self.size[i] = 0.03 + 0.008 * (t * 2.2 + p).sin();
        }
    }

    fn update_explode(&mut self, input: &FrameInput) {
        let t = input.time_s;
        for i in 0..self.count {
            self.position[i] += self.velocity[i];
            self.velocity[i] *= config::EXPLODE_DECAY;
            // Spin turbulence on top of the ballistic path.
            let phase = self.hash[i] * TAU;
            self.position[i].x += (t * 3.0 + phase).sin() * 0.004;
            self.position[i].y += (t * 2.6 + phase).cos() * 0.004;
            self.alpha[i] = (self.alpha[i] + 0.02).min(0.95);
            self.size[i] = 0.03 + self.hash[i] * 0.05;
        }
    }

    fn update_implode(&mut self, input: &FrameInput) {
        // Collapse onto the hand if one is visible, else onto the origin.
        let center = if input.hand_detected { input.hand } else { Vec3::ZERO };
        let scale = config::FOLLOW_RADIUS / config::IDLE_RADIUS;
        for i in 0..self.count {
            let target = center + self.original[i] * scale;
            let current = self.position[i];
            self.position[i] += (target - current) * config::IMPLODE_LERP;
            // Explode momentum bleeds off rather than snapping to zero.
            self.position[i] += self.velocity[i];
            self.velocity[i] *= config::IMPLODE_VELOCITY_DECAY;
            self.alpha[i] += (0.8 - self.alpha[i]) * 0.05;
            self.size[i] += (0.035 - self.size[i]) * 0.05;
        }
    }

    fn update_text(&mut self, input: &FrameInput) {
        let t = input.time_s;
        // The formation shifts with a damped fraction of the hand so it
        // reads as attached without jittering apart.
        let offset = if input.hand_detected { input.hand * 0.3 } else { Vec3::ZERO };
        for i in 0..self.count {
            let p = i as f32;
            let target = self.text_targets[i] + offset;
            let current = self.position[i];
            self.position[i] += (target - current) * config::TEXT_LERP;
            self.alpha[i] = 0.85 + 0.15 * (t * 2.0 + p * 0.05).sin();
            self.size[i] = 0.05 + 0.015 * (t * 1.5).sin();
        }
    }
}
