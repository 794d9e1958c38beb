//! Render Scene
//!
//! The scene graph the renderer draws: a flat list of visual meshes, each a
//! piece of geometry with a material and a rigid transform. Meshes are only
//! ever added. GPU-agnostic; the scene pass uploads geometry by [`MeshId`].

use glam::{Quat, Vec3};

use crate::game::types::Mesh;
use crate::physics::Transform;

/// Index of a mesh in a [`RenderScene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub u32);

impl MeshId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// How a surface responds to light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    /// Flat color, no lighting
    Basic,
    /// Diffuse lighting from the scene's directional light
    Lambert,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: [f32; 4],
    pub shading: Shading,
    /// Draw triangle edges instead of filled faces
    pub wireframe: bool,
}

impl Material {
    pub fn basic(color: [f32; 4]) -> Self {
        Self {
            color,
            shading: Shading::Basic,
            wireframe: false,
        }
    }

    pub fn lambert(color: [f32; 4]) -> Self {
        Self {
            color,
            shading: Shading::Lambert,
            wireframe: false,
        }
    }

    pub fn wireframe(mut self) -> Self {
        self.wireframe = true;
        self
    }
}

/// Geometry plus material plus transform.
#[derive(Debug, Clone)]
pub struct VisualMesh {
    pub geometry: Mesh,
    pub material: Material,
    pub position: Vec3,
    pub orientation: Quat,
}

impl VisualMesh {
    pub fn new(geometry: Mesh, material: Material) -> Self {
        Self {
            geometry,
            material,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.orientation)
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.position = transform.position;
        self.orientation = transform.orientation;
    }
}

/// Everything drawn in the 3D view.
#[derive(Debug, Clone)]
pub struct RenderScene {
    meshes: Vec<VisualMesh>,
    /// Background clear color
    pub background: [f32; 4],
    /// Direction the light travels (toward the scene)
    pub light_direction: Vec3,
    pub ambient: f32,
}

impl Default for RenderScene {
    fn default() -> Self {
        Self {
            meshes: Vec::new(),
            background: [0.0, 0.0, 0.0, 1.0],
            light_direction: Vec3::new(-0.4, -1.0, -0.6).normalize(),
            ambient: 0.25,
        }
    }
}

impl RenderScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, mesh: VisualMesh) -> MeshId {
        let id = MeshId(self.meshes.len() as u32);
        self.meshes.push(mesh);
        id
    }

    pub fn get(&self, id: MeshId) -> Option<&VisualMesh> {
        self.meshes.get(id.index())
    }

    pub fn get_mut(&mut self, id: MeshId) -> Option<&mut VisualMesh> {
        self.meshes.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MeshId, &VisualMesh)> {
        self.meshes
            .iter()
            .enumerate()
            .map(|(i, m)| (MeshId(i as u32), m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::generate_box;

    #[test]
    fn test_ids_are_sequential() {
        let mut scene = RenderScene::new();
        let a = scene.add(VisualMesh::new(Mesh::new(), Material::basic([1.0; 4])));
        let b = scene.add(VisualMesh::new(Mesh::new(), Material::basic([1.0; 4])));
        assert_eq!((a, b), (MeshId(0), MeshId(1)));
        assert_eq!(scene.len(), 2);
        assert!(scene.get(MeshId(2)).is_none());
    }

    #[test]
    fn test_set_transform() {
        let mut mesh = VisualMesh::new(generate_box(Vec3::ONE, [1.0; 4]), Material::lambert([1.0; 4]));
        let t = Transform::new(Vec3::new(1.0, 2.0, 3.0), Quat::from_rotation_z(0.5));
        mesh.set_transform(t);
        assert_eq!(mesh.transform(), t);
    }

    #[test]
    fn test_wireframe_material() {
        let m = Material::basic([1.0, 0.0, 0.0, 1.0]).wireframe();
        assert!(m.wireframe);
        assert_eq!(m.shading, Shading::Basic);
    }
}
