//! UI Slider
//!
//! A horizontal slider over a numeric range, drawn with the pixel font.

use super::text::{ScreenSize, add_rect, draw_text};
use crate::game::types::Mesh;

const TRACK_COLOR: [f32; 4] = [0.15, 0.15, 0.18, 0.85];
const LABEL_COLOR: [f32; 4] = [0.9, 0.9, 0.9, 1.0];
const TEXT_SCALE: f32 = 2.0;

/// A single labelled slider
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UISlider {
    pub label: &'static str,
    /// Screen position (pixels from top-left)
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min: f32,
    pub max: f32,
    /// Displayed value; may lie outside `min..=max`, the bar is clamped
    pub value: f32,
    /// Color of the filled part of the bar
    pub color: [f32; 4],
}

impl UISlider {
    pub fn new(label: &'static str, x: f32, y: f32, min: f32, max: f32, color: [f32; 4]) -> Self {
        Self {
            label,
            x,
            y,
            width: 200.0,
            height: 24.0,
            min,
            max,
            value: min,
            color,
        }
    }

    /// Check if a point is within this slider
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    /// Position of the value within the range, 0.0 to 1.0.
    pub fn normalized(&self) -> f32 {
        if self.max <= self.min {
            return 0.0;
        }
        ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Set the value from a mouse X position and return it.
    pub fn set_from_x(&mut self, px: f32) -> f32 {
        let t = ((px - self.x) / self.width).clamp(0.0, 1.0);
        self.value = self.min + t * (self.max - self.min);
        self.value
    }

    pub fn draw(&self, mesh: &mut Mesh, screen: ScreenSize) {
        add_rect(mesh, self.x, self.y, self.width, self.height, TRACK_COLOR, screen);
        add_rect(
            mesh,
            self.x,
            self.y,
            self.width * self.normalized(),
            self.height,
            self.color,
            screen,
        );
        let text = format!("{} {:.2}", self.label, self.value);
        let text_y = self.y + (self.height - 7.0 * TEXT_SCALE) * 0.5;
        draw_text(mesh, &text, self.x + 6.0, text_y, TEXT_SCALE, LABEL_COLOR, screen);
    }
}
