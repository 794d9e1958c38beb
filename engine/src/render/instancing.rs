//! Per-Mesh Instance Data
//!
//! Every visual mesh is drawn as one instance carrying its model matrix and
//! material. The instance buffer is rewritten each frame.

use glam::Mat4;

/// GPU instance data for one visual mesh.
///
/// Layout (96 bytes total, 16-byte aligned):
/// - model:  4 x vec4<f32> (64 bytes) - column-major model matrix
/// - color:  vec4<f32> (16 bytes) - material color (sRGB)
/// - params: vec4<f32> (16 bytes) - x = 1.0 when lit, rest unused
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub params: [f32; 4],
}

// Compile-time assertion to verify struct size is exactly 96 bytes
static_assertions::const_assert_eq!(std::mem::size_of::<MeshInstance>(), 96);

impl Default for MeshInstance {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, [1.0; 4], false)
    }
}

impl MeshInstance {
    pub fn new(model: Mat4, color: [f32; 4], lit: bool) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color,
            params: [if lit { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
        }
    }
}

/// Instance attributes at shader locations 3..=8.
const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4,
    7 => Float32x4,
    8 => Float32x4,
];

/// Vertex buffer layout for [`MeshInstance`] (step mode: instance).
pub fn instance_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRIBUTES,
    }
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
    0 => Float32x3,
    1 => Float32x3,
    2 => Float32x4,
];

/// Vertex buffer layout for position/normal/color vertices (40 bytes).
pub fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: 40, // 3 + 3 + 4 floats = 40 bytes
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBUTES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_instance_layout_covers_struct() {
        let layout = instance_buffer_layout();
        let last = layout.attributes.last().unwrap();
        assert_eq!(last.offset + 16, layout.array_stride);
    }

    #[test]
    fn test_lit_flag() {
        assert_eq!(MeshInstance::new(Mat4::IDENTITY, [1.0; 4], true).params[0], 1.0);
        assert_eq!(MeshInstance::default().params[0], 0.0);
    }

    #[test]
    fn test_model_is_column_major() {
        let inst = MeshInstance::new(Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)), [1.0; 4], false);
        assert_eq!(inst.model[3], [1.0, 2.0, 3.0, 1.0]);
    }
}
