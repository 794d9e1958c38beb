//! Render Module
//!
//! wgpu rendering for the sketches: a depth-tested scene pass that draws a
//! [`crate::game::scene::RenderScene`], and an alpha-blended overlay pass for
//! the camera panel and frame stats.

pub mod gpu_context;
pub mod instancing;
pub mod overlay_pass;
pub mod renderer;
pub mod scene_pass;
pub mod shader;
pub mod uniforms;

pub use gpu_context::{GpuContext, GpuContextConfig};
pub use instancing::{MeshInstance, instance_buffer_layout, vertex_buffer_layout};
pub use renderer::Renderer;
pub use shader::{OVERLAY_SHADER, SCENE_SHADER};
pub use uniforms::SceneUniforms;
