//! Orbit camera - slow drift around the field origin

use glam::{Mat4, Vec3};

/// View/projection pair uploaded once per frame. Split so the vertex shader
/// can billboard sprites in view space before projecting.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
}

pub struct OrbitCamera {
    angle: f32,
    last_ms: Option<f64>,
}

const ORBIT_SPEED: f32 = 0.12; // radians per second
const ORBIT_DISTANCE: f32 = 4.0;
const ORBIT_HEIGHT: f32 = 0.6;

impl OrbitCamera {
    pub fn new() -> Self {
        Self { angle: 0.0, last_ms: None }
    }

    /// Advance the orbit by this frame's wall time.
    pub fn step(&mut self, now_ms: f64) {
        if let Some(prev) = self.last_ms {
            let dt = (((now_ms - prev) / 1000.0) as f32).clamp(0.0, 0.1);
            self.angle += ORBIT_SPEED * dt;
        }
        self.last_ms = Some(now_ms);
    }

    pub fn uniform(&self, aspect: f32) -> CameraUniform {
        let eye = Vec3::new(
            self.angle.sin() * ORBIT_DISTANCE,
            ORBIT_HEIGHT,
            self.angle.cos() * ORBIT_DISTANCE,
        );
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(50f32.to_radians(), aspect, 0.1, 100.0);
        CameraUniform {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_advances_with_time() {
        let mut cam = OrbitCamera::new();
        cam.step(0.0);
        let a = cam.uniform(16.0 / 9.0);
        cam.step(2000.0);
        let b = cam.uniform(16.0 / 9.0);
        assert_ne!(a.view, b.view);
        // Projection is time-invariant.
        assert_eq!(a.proj, b.proj);
    }
}
