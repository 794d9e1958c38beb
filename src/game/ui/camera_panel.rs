//! Camera Panel
//!
//! Three sliders bound to the camera eye position. The panel shows the live
//! camera values every frame; dragging a slider writes the camera.

use glam::Vec3;

use super::slider::UISlider;
use super::text::{ScreenSize, draw_text};
use crate::game::types::Mesh;

const PANEL_WIDTH: f32 = 200.0;
const PANEL_MARGIN: f32 = 10.0;
const ROW_SPACING: f32 = 30.0;
const AXIS_COLORS: [[f32; 4]; 3] = [
    [0.8, 0.25, 0.25, 0.9],
    [0.25, 0.7, 0.3, 0.9],
    [0.3, 0.45, 0.85, 0.9],
];

pub struct CameraPanel {
    sliders: [UISlider; 3],
    dragging: Option<usize>,
    pub visible: bool,
}

impl CameraPanel {
    /// Panel in the top-right corner; each slider spans `[-range, range]`.
    pub fn new(range: f32, screen_width: f32) -> Self {
        let x = screen_width - PANEL_WIDTH - PANEL_MARGIN;
        let labels = ["X", "Y", "Z"];
        let sliders = std::array::from_fn(|i| {
            UISlider::new(
                labels[i],
                x,
                PANEL_MARGIN + 20.0 + i as f32 * ROW_SPACING,
                -range,
                range,
                AXIS_COLORS[i],
            )
        });
        Self {
            sliders,
            dragging: None,
            visible: true,
        }
    }

    /// Keep the panel pinned to the right edge.
    pub fn resize(&mut self, screen_width: f32) {
        let x = screen_width - PANEL_WIDTH - PANEL_MARGIN;
        for slider in &mut self.sliders {
            slider.x = x;
        }
    }

    pub fn sliders(&self) -> &[UISlider; 3] {
        &self.sliders
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Show the current camera position.
    pub fn sync_from(&mut self, position: Vec3) {
        for (slider, value) in self.sliders.iter_mut().zip(position.to_array()) {
            slider.value = value;
        }
    }

    /// Returns true if the press landed on the panel (and was consumed).
    pub fn on_mouse_press(&mut self, px: f32, py: f32, position: &mut Vec3) -> bool {
        if !self.visible {
            return false;
        }
        let Some(index) = self.sliders.iter().position(|s| s.contains(px, py)) else {
            return false;
        };
        self.dragging = Some(index);
        position[index] = self.sliders[index].set_from_x(px);
        true
    }

    /// Returns true while a slider drag is writing the camera.
    pub fn on_mouse_move(&mut self, px: f32, position: &mut Vec3) -> bool {
        let Some(index) = self.dragging else {
            return false;
        };
        position[index] = self.sliders[index].set_from_x(px);
        true
    }

    /// Returns true if a drag ended.
    pub fn on_mouse_release(&mut self) -> bool {
        self.dragging.take().is_some()
    }

    pub fn draw(&self, mesh: &mut Mesh, screen: ScreenSize) {
        if !self.visible {
            return;
        }
        let first = &self.sliders[0];
        draw_text(mesh, "CAMERA", first.x, PANEL_MARGIN, 2.0, [1.0; 4], screen);
        for slider in &self.sliders {
            slider.draw(mesh, screen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider_center(panel: &CameraPanel, i: usize) -> (f32, f32) {
        let s = panel.sliders()[i];
        (s.x + s.width * 0.5, s.y + s.height * 0.5)
    }

    #[test]
    fn test_sync_shows_live_values() {
        let mut panel = CameraPanel::new(10.0, 1280.0);
        panel.sync_from(Vec3::new(13.0, -2.0, 16.0));
        let values: Vec<f32> = panel.sliders().iter().map(|s| s.value).collect();
        assert_eq!(values, vec![13.0, -2.0, 16.0]);
    }

    #[test]
    fn test_drag_writes_camera_within_range() {
        let mut panel = CameraPanel::new(10.0, 1280.0);
        let mut position = Vec3::new(13.0, 13.0, 16.0);
        let (cx, cy) = slider_center(&panel, 1);
        assert!(panel.on_mouse_press(cx, cy, &mut position));
        assert_eq!(position.y, 0.0);
        assert_eq!(position.x, 13.0);

        assert!(panel.on_mouse_move(cx + 10_000.0, &mut position));
        assert_eq!(position.y, 10.0);
        assert!(panel.on_mouse_move(cx - 10_000.0, &mut position));
        assert_eq!(position.y, -10.0);

        assert!(panel.on_mouse_release());
        assert!(!panel.on_mouse_move(cx, &mut position));
        assert_eq!(position.y, -10.0);
    }

    #[test]
    fn test_press_outside_not_consumed() {
        let mut panel = CameraPanel::new(10.0, 1280.0);
        let mut position = Vec3::ONE;
        assert!(!panel.on_mouse_press(5.0, 5.0, &mut position));
        assert_eq!(position, Vec3::ONE);
        assert!(!panel.is_dragging());
    }
}
