//! Text Rendering
//!
//! Pixel-font text built from quads in normalized device coordinates.
//! Screen positions are pixels from the top-left corner.

use glam::Vec3;

use crate::game::types::Mesh;

/// Window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1) as f32,
            height: height.max(1) as f32,
        }
    }

    pub fn to_ndc(&self, px: f32, py: f32) -> Vec3 {
        Vec3::new(
            (px / self.width) * 2.0 - 1.0,
            1.0 - (py / self.height) * 2.0,
            0.0,
        )
    }
}

/// Add a screen-space rectangle.
pub fn add_rect(mesh: &mut Mesh, x: f32, y: f32, w: f32, h: f32, color: [f32; 4], screen: ScreenSize) {
    // Counter-clockwise in NDC (y up).
    mesh.add_quad(
        [
            screen.to_ndc(x, y + h),
            screen.to_ndc(x + w, y + h),
            screen.to_ndc(x + w, y),
            screen.to_ndc(x, y),
        ],
        Vec3::Z,
        color,
    );
}

// ============================================================================
// SIMPLE PIXEL FONT FOR UI TEXT
// ============================================================================
// Each character is 5x7 pixels, one row per byte, bit 4 is the leftmost column.

const GLYPH_TABLE: &[(char, [u8; 7])] = &[
    ('A', [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11]),
    ('B', [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E]),
    ('C', [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E]),
    ('D', [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E]),
    ('E', [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F]),
    ('F', [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10]),
    ('G', [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0E]),
    ('H', [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11]),
    ('I', [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E]),
    ('J', [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C]),
    ('K', [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11]),
    ('L', [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F]),
    ('M', [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11]),
    ('N', [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11]),
    ('O', [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E]),
    ('P', [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10]),
    ('Q', [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D]),
    ('R', [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11]),
    ('S', [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E]),
    ('T', [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04]),
    ('U', [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E]),
    ('V', [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04]),
    ('W', [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11]),
    ('X', [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11]),
    ('Y', [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04]),
    ('Z', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F]),
    ('0', [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E]),
    ('1', [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E]),
    ('2', [0x0E, 0x11, 0x01, 0x06, 0x08, 0x10, 0x1F]),
    ('3', [0x0E, 0x11, 0x01, 0x06, 0x01, 0x11, 0x0E]),
    ('4', [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02]),
    ('5', [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E]),
    ('6', [0x0E, 0x10, 0x1E, 0x11, 0x11, 0x11, 0x0E]),
    ('7', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08]),
    ('8', [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E]),
    ('9', [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x01, 0x0E]),
    (' ', [0x00; 7]),
    ('.', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04]),
    ('-', [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00]),
    ('+', [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00]),
];

/// Rows of a character; unknown characters are a filled box.
pub fn get_char_bitmap(c: char) -> [u8; 7] {
    let upper = c.to_ascii_uppercase();
    GLYPH_TABLE
        .iter()
        .find(|(g, _)| *g == upper)
        .map_or([0x1F; 7], |(_, rows)| *rows)
}

/// Width in pixels of `text` drawn at `scale`.
pub fn text_width(text: &str, scale: f32) -> f32 {
    text.chars().count() as f32 * 6.0 * scale
}

/// Draw text at screen position using pixel font
pub fn draw_text(
    mesh: &mut Mesh,
    text: &str,
    x: f32,
    y: f32,
    scale: f32,
    color: [f32; 4],
    screen: ScreenSize,
) {
    let char_width = 6.0 * scale; // 5 pixels + 1 spacing

    for (char_idx, c) in text.chars().enumerate() {
        let bitmap = get_char_bitmap(c);
        let char_x = x + (char_idx as f32) * char_width;

        for (row, &row_bits) in bitmap.iter().enumerate() {
            for col in 0..5 {
                if (row_bits >> (4 - col)) & 1 == 1 {
                    let px = char_x + (col as f32) * scale;
                    let py = y + (row as f32) * scale;
                    add_rect(mesh, px, py, scale, scale, color, screen);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_uses_uppercase_bitmap() {
        assert_eq!(get_char_bitmap('a'), get_char_bitmap('A'));
        assert_eq!(get_char_bitmap('~'), [0x1F; 7]);
    }

    #[test]
    fn test_draw_text_quad_count() {
        let mut mesh = Mesh::new();
        let screen = ScreenSize::new(800, 600);
        draw_text(&mut mesh, "-", 0.0, 0.0, 2.0, [1.0; 4], screen);
        // '-' is a single row of 5 pixels
        assert_eq!(mesh.vertices.len(), 20);
        draw_text(&mut mesh, " ", 0.0, 0.0, 2.0, [1.0; 4], screen);
        assert_eq!(mesh.vertices.len(), 20);
    }

    #[test]
    fn test_ndc_corners() {
        let screen = ScreenSize::new(200, 100);
        assert_eq!(screen.to_ndc(0.0, 0.0), Vec3::new(-1.0, 1.0, 0.0));
        assert_eq!(screen.to_ndc(200.0, 100.0), Vec3::new(1.0, -1.0, 0.0));
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("FPS", 2.0), 36.0);
    }
}
