//! Shared Types Module
//!
//! Vertex and mesh structures plus the primitive generators the sketches
//! build their scenes from. Meshes are CPU-side; the render pass uploads them.

use std::collections::HashSet;

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

// ============================================================================
// GPU VERTEX TYPES
// ============================================================================

/// Vertex for meshes and overlay quads
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

static_assertions::const_assert_eq!(std::mem::size_of::<Vertex>(), 40);

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color,
        }
    }
}

// ============================================================================
// MESH STRUCTURE
// ============================================================================

/// A mesh with vertices and indices (triangle list)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn merge(&mut self, other: &Mesh) {
        let base_idx = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base_idx));
    }

    /// Append a quad given its corners in counter-clockwise order.
    pub fn add_quad(&mut self, corners: [Vec3; 4], normal: Vec3, color: [f32; 4]) {
        let base = self.vertices.len() as u32;
        for corner in corners {
            self.vertices.push(Vertex::new(corner, normal, color));
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Axis-aligned bounds as (min, max). `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.vertices.iter().map(|v| Vec3::from_array(v.position));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }

    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            v.position = (Vec3::from_array(v.position) + offset).to_array();
        }
    }

    /// Move the mesh so its bounding box is centered on the origin.
    ///
    /// Returns the offset that was applied.
    pub fn center(&mut self) -> Vec3 {
        let Some((min, max)) = self.bounds() else {
            return Vec3::ZERO;
        };
        let offset = -(min + max) * 0.5;
        self.translate(offset);
        offset
    }

    pub fn set_color(&mut self, color: [f32; 4]) {
        for v in &mut self.vertices {
            v.color = color;
        }
    }

    /// Unique triangle edges as a line list, for wireframe drawing.
    pub fn edge_indices(&self) -> Vec<u32> {
        let mut seen = HashSet::new();
        let mut lines = Vec::new();
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                if seen.insert((a.min(b), a.max(b))) {
                    lines.extend_from_slice(&[a, b]);
                }
            }
        }
        lines
    }
}

// ============================================================================
// MESH GENERATION PRIMITIVES
// ============================================================================

/// Generate a box mesh centered on the origin
pub fn generate_box(half_extents: Vec3, color: [f32; 4]) -> Mesh {
    let (hx, hy, hz) = (half_extents.x, half_extents.y, half_extents.z);

    let corners = [
        Vec3::new(-hx, -hy, -hz),
        Vec3::new(hx, -hy, -hz),
        Vec3::new(hx, hy, -hz),
        Vec3::new(-hx, hy, -hz),
        Vec3::new(-hx, -hy, hz),
        Vec3::new(hx, -hy, hz),
        Vec3::new(hx, hy, hz),
        Vec3::new(-hx, hy, hz),
    ];

    let faces = [
        ([1, 0, 3, 2], Vec3::NEG_Z),
        ([4, 5, 6, 7], Vec3::Z),
        ([0, 4, 7, 3], Vec3::NEG_X),
        ([5, 1, 2, 6], Vec3::X),
        ([7, 6, 2, 3], Vec3::Y),
        ([0, 1, 5, 4], Vec3::NEG_Y),
    ];

    let mut mesh = Mesh::new();
    for (face, normal) in faces {
        mesh.add_quad(face.map(|i| corners[i]), normal, color);
    }
    mesh
}

/// Generate a flat plane in the local XY plane facing +Z, split into
/// `segments` x `segments` cells.
pub fn generate_plane(size: Vec2, segments: u32, color: [f32; 4]) -> Mesh {
    let segments = segments.max(1);
    let half = size * 0.5;
    let step = size / segments as f32;

    let mut mesh = Mesh::new();
    for row in 0..=segments {
        for col in 0..=segments {
            let x = -half.x + col as f32 * step.x;
            let y = -half.y + row as f32 * step.y;
            mesh.vertices
                .push(Vertex::new(Vec3::new(x, y, 0.0), Vec3::Z, color));
        }
    }

    let stride = segments + 1;
    for row in 0..segments {
        for col in 0..segments {
            let a = row * stride + col;
            let b = a + 1;
            let c = a + stride + 1;
            let d = a + stride;
            mesh.indices.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }
    mesh
}

/// Convert an 0xRRGGBB color to linear-ish RGBA floats.
pub fn hex_color(rgb: u32) -> [f32; 4] {
    [
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
        1.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_bounds() {
        let mesh = generate_box(Vec3::new(1.0, 2.0, 0.5), [1.0; 4]);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, Vec3::new(-1.0, -2.0, -0.5));
        assert_eq!(max, Vec3::new(1.0, 2.0, 0.5));
    }

    #[test]
    fn test_box_winding_faces_outward() {
        let mesh = generate_box(Vec3::ONE, [1.0; 4]);
        for tri in mesh.indices.chunks_exact(3) {
            let p = |i: u32| Vec3::from_array(mesh.vertices[i as usize].position);
            let n = Vec3::from_array(mesh.vertices[tri[0] as usize].normal);
            let face_normal = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
            assert!(face_normal.dot(n) > 0.0);
        }
    }

    #[test]
    fn test_center_moves_bounds_to_origin() {
        let mut mesh = generate_box(Vec3::ONE, [1.0; 4]);
        mesh.translate(Vec3::new(3.0, -1.0, 2.0));
        let offset = mesh.center();
        assert_eq!(offset, Vec3::new(-3.0, 1.0, -2.0));
        let (min, max) = mesh.bounds().unwrap();
        assert!(((min + max) * 0.5).length() < 1e-6);
    }

    #[test]
    fn test_center_empty_mesh() {
        let mut mesh = Mesh::new();
        assert_eq!(mesh.center(), Vec3::ZERO);
        assert!(mesh.bounds().is_none());
    }

    #[test]
    fn test_plane_grid() {
        let mesh = generate_plane(Vec2::splat(20.0), 4, [1.0; 4]);
        assert_eq!(mesh.vertices.len(), 25);
        assert_eq!(mesh.triangle_count(), 32);
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, Vec3::new(-10.0, -10.0, 0.0));
        assert_eq!(max, Vec3::new(10.0, 10.0, 0.0));
    }

    #[test]
    fn test_edge_indices_deduplicated() {
        let mut mesh = Mesh::new();
        mesh.add_quad([Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::Y], Vec3::Z, [1.0; 4]);
        // 4 outer edges + 1 diagonal
        assert_eq!(mesh.edge_indices().len(), 10);
    }

    #[test]
    fn test_merge_offsets_indices() {
        let mut a = generate_box(Vec3::ONE, [1.0; 4]);
        let b = generate_box(Vec3::ONE, [1.0; 4]);
        a.merge(&b);
        assert_eq!(a.vertices.len(), 48);
        assert_eq!(*a.indices.iter().max().unwrap(), 47);
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(0xff0000), [1.0, 0.0, 0.0, 1.0]);
    }
}
