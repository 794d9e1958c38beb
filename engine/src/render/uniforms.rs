//! Uniform Structs for GPU Shaders
//!
//! Must match the WGSL layout in [`super::shader`] exactly.

use glam::{Mat4, Vec3};

/// Per-frame scene uniforms.
///
/// WGSL layout (80 bytes):
///   offset  0: view_proj (mat4x4<f32>) = 64 bytes
///   offset 64: light (vec4<f32>)       = 16 bytes, xyz = direction the light travels, w = ambient
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub light: [f32; 4],
}

static_assertions::const_assert_eq!(std::mem::size_of::<SceneUniforms>(), 80);
static_assertions::const_assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);

impl Default for SceneUniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Vec3::NEG_Y, 0.25)
    }
}

impl SceneUniforms {
    pub fn new(view_proj: Mat4, light_direction: Vec3, ambient: f32) -> Self {
        let dir = light_direction.normalize_or(Vec3::NEG_Y);
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            light: [dir.x, dir.y, dir.z, ambient.clamp(0.0, 1.0)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_is_normalized() {
        let u = SceneUniforms::new(Mat4::IDENTITY, Vec3::new(0.0, -3.0, 4.0), 2.0);
        let dir = Vec3::new(u.light[0], u.light[1], u.light[2]);
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert_eq!(u.light[3], 1.0);
    }
}
