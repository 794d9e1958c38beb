//! Renderer
//!
//! Owns the GPU context and both passes. One frame is a depth-tested scene
//! pass followed by the overlay pass on the same surface texture.

use std::sync::Arc;

use glam::Mat4;
use winit::window::Window;

use crate::game::scene::RenderScene;
use crate::game::types::Mesh;

use super::gpu_context::{GpuContext, GpuContextConfig};
use super::overlay_pass::OverlayPass;
use super::scene_pass::ScenePass;

pub struct Renderer {
    gpu: GpuContext,
    scene_pass: ScenePass,
    overlay_pass: OverlayPass,
}

impl Renderer {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(window: Arc<Window>, config: GpuContextConfig) -> Self {
        Self::from_context(GpuContext::new(window, config))
    }

    pub async fn new_async(window: Arc<Window>, config: GpuContextConfig) -> Self {
        Self::from_context(GpuContext::new_async(window, config).await)
    }

    pub fn from_context(gpu: GpuContext) -> Self {
        let scene_pass = ScenePass::new(&gpu);
        let overlay_pass = OverlayPass::new(&gpu);
        log::info!("renderer ready ({:?})", gpu.format());
        Self {
            gpu,
            scene_pass,
            overlay_pass,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.gpu.dimensions()
    }

    /// Draw one frame. A lost or outdated surface is reconfigured and the
    /// frame skipped; other surface errors are returned.
    pub fn render(
        &mut self,
        scene: &RenderScene,
        view_proj: Mat4,
        overlay: &Mesh,
    ) -> Result<(), wgpu::SurfaceError> {
        let output = match self.gpu.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.scene_pass.prepare(&self.gpu, scene, view_proj);
        self.overlay_pass.prepare(&self.gpu, overlay);

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let [r, g, b, a] = scene.background;
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: srgb_to_linear(r),
                            g: srgb_to_linear(g),
                            b: srgb_to_linear(b),
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.gpu.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.scene_pass.render(&mut pass);
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Overlay Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.overlay_pass.render(&mut pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

fn srgb_to_linear(c: f32) -> f64 {
    (c.clamp(0.0, 1.0) as f64).powf(2.2)
}
