//! Overlay Render Pass
//!
//! 2D interface drawn on top of the scene from a mesh in NDC.
//! No depth testing, uses alpha blending.

use crate::game::types::Mesh;

use super::gpu_context::GpuContext;
use super::instancing::vertex_buffer_layout;
use super::shader::OVERLAY_SHADER;

const INITIAL_VERTEX_CAPACITY: usize = 4096;

pub struct OverlayPass {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    index_count: u32,
}

impl OverlayPass {
    pub fn new(gpu: &GpuContext) -> Self {
        let device = &gpu.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Overlay Shader"),
            source: wgpu::ShaderSource::Wgsl(OVERLAY_SHADER.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Overlay Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        // No depth testing, alpha blending
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Overlay Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_buffer_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.format(),
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let (vertex_buffer, index_buffer) = create_buffers(device, INITIAL_VERTEX_CAPACITY);

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            index_count: 0,
        }
    }

    /// Upload this frame's overlay mesh.
    pub fn prepare(&mut self, gpu: &GpuContext, mesh: &Mesh) {
        self.index_count = 0;
        if mesh.is_empty() {
            return;
        }

        // Overlay meshes are quads: 6 indices per 4 vertices
        let needed = mesh.vertices.len().max((mesh.indices.len() * 2).div_ceil(3));
        if needed > self.vertex_capacity {
            self.vertex_capacity = needed.next_power_of_two();
            (self.vertex_buffer, self.index_buffer) = create_buffers(&gpu.device, self.vertex_capacity);
        }

        gpu.queue
            .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&mesh.vertices));
        gpu.queue
            .write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(&mesh.indices));
        self.index_count = mesh.indices.len() as u32;
    }

    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        if self.index_count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// Vertex and index buffers sized for `vertices` vertices worth of quads.
fn create_buffers(device: &wgpu::Device, vertices: usize) -> (wgpu::Buffer, wgpu::Buffer) {
    let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Overlay Vertex Buffer"),
        size: (vertices * 40) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Overlay Index Buffer"),
        size: (vertices * 3 / 2 * 4) as u64,
        usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    (vertex_buffer, index_buffer)
}
