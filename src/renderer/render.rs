//! Per-frame render submission - snapshot the field and draw the sprites

use super::particles::build_instances;
use super::state::GPU_STATE;
use crate::bridge;

const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.012,
    g: 0.012,
    b: 0.035,
    a: 1.0,
};

/// Render one frame of the particle field. Silently skips when the GPU is
/// not initialized or the surface is temporarily unavailable.
pub fn render_frame(now_ms: f64) {
    GPU_STATE.with(|state_cell| {
        let mut state_ref = state_cell.borrow_mut();
        let state = match state_ref.as_mut() {
            Some(s) => s,
            None => return,
        };

        // Snapshot the simulation buffers into instance layout.
        let instances = bridge::with_sim(|sim| build_instances(&sim.field));

        state.camera.step(now_ms);
        let camera_uniform = state.camera.uniform(state.aspect);
        state
            .queue
            .write_buffer(&state.camera_buffer, 0, bytemuck::bytes_of(&camera_uniform));

        if !instances.is_empty() {
            state
                .queue
                .write_buffer(&state.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }

        let output = match state.surface.get_current_texture() {
            Ok(t) => t,
            Err(_) => return,
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = state
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Particle Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(BACKGROUND),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !instances.is_empty() {
                pass.set_pipeline(&state.render_pipeline);
                pass.set_bind_group(0, &state.camera_bind_group, &[]);
                pass.set_vertex_buffer(0, state.quad_buffer.slice(..));
                pass.set_vertex_buffer(1, state.instance_buffer.slice(..));
                pass.draw(0..6, 0..instances.len() as u32);
            }
        }

        state.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    });
}
