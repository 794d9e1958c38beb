//! Scene Render Pass
//!
//! Draws every mesh of a [`RenderScene`] with depth testing. Geometry is
//! uploaded once, when a mesh first appears; transforms and materials travel
//! in a per-frame instance buffer, one instance per mesh in scene order.

use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::game::scene::{RenderScene, Shading};
use crate::game::types::Mesh;

use super::gpu_context::{DEPTH_FORMAT, GpuContext};
use super::instancing::{MeshInstance, instance_buffer_layout, vertex_buffer_layout};
use super::shader::SCENE_SHADER;
use super::uniforms::SceneUniforms;

const INITIAL_INSTANCE_CAPACITY: usize = 64;

/// Uploaded geometry of one scene mesh.
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    wireframe: bool,
}

impl GpuMesh {
    /// `None` for meshes with nothing to draw.
    fn upload(device: &wgpu::Device, mesh: &Mesh, wireframe: bool) -> Option<Self> {
        let indices = if wireframe {
            mesh.edge_indices()
        } else {
            mesh.indices.clone()
        };
        if mesh.vertices.is_empty() || indices.is_empty() {
            return None;
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Mesh Vertices"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Mesh Indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Some(Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            wireframe,
        })
    }
}

pub struct ScenePass {
    fill_pipeline: wgpu::RenderPipeline,
    wire_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    meshes: Vec<Option<GpuMesh>>,
    instances: Vec<MeshInstance>,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
}

impl ScenePass {
    pub fn new(gpu: &GpuContext) -> Self {
        let device = &gpu.device;

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Uniform Buffer"),
            contents: bytemuck::bytes_of(&SceneUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Scene Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_SHADER.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let fill_pipeline = create_pipeline(
            gpu,
            "Scene Fill",
            &shader,
            &pipeline_layout,
            wgpu::PrimitiveTopology::TriangleList,
        );
        let wire_pipeline = create_pipeline(
            gpu,
            "Scene Wireframe",
            &shader,
            &pipeline_layout,
            wgpu::PrimitiveTopology::LineList,
        );

        Self {
            fill_pipeline,
            wire_pipeline,
            uniform_buffer,
            bind_group,
            meshes: Vec::new(),
            instances: Vec::new(),
            instance_buffer: create_instance_buffer(device, INITIAL_INSTANCE_CAPACITY),
            instance_capacity: INITIAL_INSTANCE_CAPACITY,
        }
    }

    /// Upload new meshes, this frame's instances and the camera.
    pub fn prepare(&mut self, gpu: &GpuContext, scene: &RenderScene, view_proj: Mat4) {
        for (id, visual) in scene.iter().skip(self.meshes.len()) {
            let uploaded = GpuMesh::upload(&gpu.device, &visual.geometry, visual.material.wireframe);
            if uploaded.is_none() {
                log::debug!("mesh {id:?} has no geometry, skipping");
            }
            self.meshes.push(uploaded);
        }

        self.instances.clear();
        self.instances.extend(scene.iter().map(|(_, visual)| {
            MeshInstance::new(
                visual.transform().matrix(),
                visual.material.color,
                visual.material.shading == Shading::Lambert,
            )
        }));

        if self.instances.len() > self.instance_capacity {
            self.instance_capacity = self.instances.len().next_power_of_two();
            self.instance_buffer = create_instance_buffer(&gpu.device, self.instance_capacity);
            log::debug!("instance buffer grown to {}", self.instance_capacity);
        }
        if !self.instances.is_empty() {
            gpu.queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.instances));
        }

        let uniforms = SceneUniforms::new(view_proj, scene.light_direction, scene.ambient);
        gpu.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(1, self.instance_buffer.slice(..));

        let drawable = self.meshes.len().min(self.instances.len());
        for (index, mesh) in self.meshes[..drawable].iter().enumerate() {
            let Some(mesh) = mesh else {
                continue;
            };
            pass.set_pipeline(if mesh.wireframe {
                &self.wire_pipeline
            } else {
                &self.fill_pipeline
            });
            pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            let instance = index as u32;
            pass.draw_indexed(0..mesh.index_count, 0, instance..instance + 1);
        }
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Scene Instance Buffer"),
        size: (capacity * std::mem::size_of::<MeshInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_pipeline(
    gpu: &GpuContext,
    label: &str,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    topology: wgpu::PrimitiveTopology,
) -> wgpu::RenderPipeline {
    gpu.device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("{} Pipeline", label)),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_buffer_layout(), instance_buffer_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.format(),
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Ground plane is double-sided
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}
