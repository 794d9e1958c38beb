//! Glyph Extrusion
//!
//! Turns a glyph bitmap into a solid mesh: every set pixel becomes a voxel
//! of `size / cell_height` by `size / cell_height` by `depth`. Faces shared
//! by two set pixels are skipped, so the mesh is a closed hull of the glyph.

use glam::Vec3;

use crate::game::font::{FontFace, GlyphBitmap};
use crate::game::types::Mesh;

/// Extrusion parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMeshOptions {
    /// Height of a full cell (cap height), meters
    pub size: f32,
    /// Thickness along Z, meters
    pub depth: f32,
    pub color: [f32; 4],
}

impl Default for GlyphMeshOptions {
    fn default() -> Self {
        Self {
            size: 2.0,
            depth: 0.2,
            color: [1.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Extrude a bitmap. The cell's bottom-left corner sits at the origin and
/// the glyph spans z in [-depth/2, depth/2].
pub fn extrude_bitmap(bitmap: &GlyphBitmap, options: &GlyphMeshOptions) -> Mesh {
    let mut mesh = Mesh::new();
    if bitmap.height == 0 {
        return mesh;
    }

    let px = options.size / bitmap.height as f32;
    let zf = options.depth * 0.5;
    let zb = -zf;
    let color = options.color;

    for row in 0..bitmap.height as i32 {
        for col in 0..bitmap.width as i32 {
            if !bitmap.is_set(col, row) {
                continue;
            }
            let x0 = col as f32 * px;
            let x1 = x0 + px;
            let y0 = (bitmap.height as i32 - 1 - row) as f32 * px;
            let y1 = y0 + px;

            mesh.add_quad(
                [
                    Vec3::new(x0, y0, zf),
                    Vec3::new(x1, y0, zf),
                    Vec3::new(x1, y1, zf),
                    Vec3::new(x0, y1, zf),
                ],
                Vec3::Z,
                color,
            );
            mesh.add_quad(
                [
                    Vec3::new(x1, y0, zb),
                    Vec3::new(x0, y0, zb),
                    Vec3::new(x0, y1, zb),
                    Vec3::new(x1, y1, zb),
                ],
                Vec3::NEG_Z,
                color,
            );

            if !bitmap.is_set(col + 1, row) {
                mesh.add_quad(
                    [
                        Vec3::new(x1, y0, zf),
                        Vec3::new(x1, y0, zb),
                        Vec3::new(x1, y1, zb),
                        Vec3::new(x1, y1, zf),
                    ],
                    Vec3::X,
                    color,
                );
            }
            if !bitmap.is_set(col - 1, row) {
                mesh.add_quad(
                    [
                        Vec3::new(x0, y0, zb),
                        Vec3::new(x0, y0, zf),
                        Vec3::new(x0, y1, zf),
                        Vec3::new(x0, y1, zb),
                    ],
                    Vec3::NEG_X,
                    color,
                );
            }
            // Rows grow downward, so the pixel above is row - 1.
            if !bitmap.is_set(col, row - 1) {
                mesh.add_quad(
                    [
                        Vec3::new(x0, y1, zf),
                        Vec3::new(x1, y1, zf),
                        Vec3::new(x1, y1, zb),
                        Vec3::new(x0, y1, zb),
                    ],
                    Vec3::Y,
                    color,
                );
            }
            if !bitmap.is_set(col, row + 1) {
                mesh.add_quad(
                    [
                        Vec3::new(x0, y0, zb),
                        Vec3::new(x1, y0, zb),
                        Vec3::new(x1, y0, zf),
                        Vec3::new(x0, y0, zf),
                    ],
                    Vec3::NEG_Y,
                    color,
                );
            }
        }
    }
    mesh
}

/// Geometry for one character, centered on its own bounding box.
///
/// Returns the mesh and the offset that re-centering applied to it.
pub fn text_geometry(glyph: char, font: &FontFace, options: &GlyphMeshOptions) -> (Mesh, Vec3) {
    let mut mesh = extrude_bitmap(font.glyph(glyph), options);
    let offset = mesh.center();
    (mesh, offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_pixel_is_a_cube() {
        let bitmap = GlyphBitmap::filled(1, 1);
        let mesh = extrude_bitmap(
            &bitmap,
            &GlyphMeshOptions {
                size: 1.0,
                depth: 1.0,
                ..Default::default()
            },
        );
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_shared_faces_culled() {
        // Two adjacent pixels: 2 front + 2 back + 2 ends + 2 top + 2 bottom
        let bitmap = GlyphBitmap::filled(2, 1);
        let mesh = extrude_bitmap(&bitmap, &GlyphMeshOptions::default());
        assert_eq!(mesh.triangle_count(), 20);
    }

    #[test]
    fn test_winding_matches_normals() {
        let font = FontFace::builtin();
        let (mesh, _) = text_geometry('R', &font, &GlyphMeshOptions::default());
        for tri in mesh.indices.chunks_exact(3) {
            let p = |i: u32| Vec3::from_array(mesh.vertices[i as usize].position);
            let n = Vec3::from_array(mesh.vertices[tri[0] as usize].normal);
            let face = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
            assert!(face.normalize().dot(n) > 0.99);
        }
    }

    #[test]
    fn test_glyph_is_centered() {
        let font = FontFace::builtin();
        for c in ['A', 'L', '7', '.'] {
            let (mesh, _) = text_geometry(c, &font, &GlyphMeshOptions::default());
            let (min, max) = mesh.bounds().unwrap();
            assert!(((min + max) * 0.5).length() < 1e-5, "{c} not centered");
        }
    }

    #[test]
    fn test_glyph_extent() {
        let font = FontFace::builtin();
        let options = GlyphMeshOptions::default();
        let (mesh, _) = text_geometry('H', &font, &options);
        let (min, max) = mesh.bounds().unwrap();
        let size = max - min;
        assert_relative_eq!(size.y, options.size, epsilon = 1e-5);
        assert_relative_eq!(size.z, options.depth, epsilon = 1e-5);
        assert_relative_eq!(size.x, options.size * 5.0 / 7.0, epsilon = 1e-5);
    }
}
