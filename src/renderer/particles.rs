//! Point-sprite geometry - quad corners plus per-particle instances
//!
//! Each particle is one instance; the vertex shader expands a shared
//! 6-vertex quad around the instance position in view space. The instance
//! layout mirrors the field's parallel arrays: position, size, color, alpha.

use crate::sim::ParticleField;

/// Shared quad corner, also used as the sprite's local UV.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub corner: [f32; 2],
}

pub const QUAD_VERTICES: [QuadVertex; 6] = [
    QuadVertex { corner: [-1.0, -1.0] },
    QuadVertex { corner: [1.0, -1.0] },
    QuadVertex { corner: [1.0, 1.0] },
    QuadVertex { corner: [-1.0, -1.0] },
    QuadVertex { corner: [1.0, 1.0] },
    QuadVertex { corner: [-1.0, 1.0] },
];

impl QuadVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// One particle's render state for this frame.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    pub alpha: f32,
}

impl ParticleInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x3,
        2 => Float32,
        3 => Float32x3,
        4 => Float32
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Snapshot the field's parallel arrays into the instance layout.
pub fn build_instances(field: &ParticleField) -> Vec<ParticleInstance> {
    (0..field.count)
        .map(|i| ParticleInstance {
            position: field.position[i].to_array(),
            size: field.size[i],
            color: field.color[i].to_array(),
            alpha: field.alpha[i].clamp(0.0, 1.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn instances_mirror_the_field() {
        let field = ParticleField::new(64, &mut StdRng::seed_from_u64(1));
        let instances = build_instances(&field);
        assert_eq!(instances.len(), 64);
        for (i, inst) in instances.iter().enumerate() {
            assert_eq!(inst.position, field.position[i].to_array());
            assert!((0.0..=1.0).contains(&inst.alpha));
        }
    }

    #[test]
    fn instance_layout_is_tightly_packed() {
        // 8 floats: the shader-side struct must match.
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 32);
    }
}
