//! Mouse Input Module
//!
//! Cursor position and button state, in window pixels (origin top-left).

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Additional mouse buttons (button 4, 5, etc.)
    Other(u16),
}

impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => MouseButton::Left,
            winit::event::MouseButton::Middle => MouseButton::Middle,
            winit::event::MouseButton::Right => MouseButton::Right,
            winit::event::MouseButton::Back => MouseButton::Other(3),
            winit::event::MouseButton::Forward => MouseButton::Other(4),
            winit::event::MouseButton::Other(n) => MouseButton::Other(n),
        }
    }
}

/// Tracks cursor position and the three main buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    /// Last known cursor position in pixels; `None` until the first move.
    pub position: Option<(f32, f32)>,
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left = pressed,
            MouseButton::Middle => self.middle = pressed,
            MouseButton::Right => self.right = pressed,
            MouseButton::Other(_) => {}
        }
    }

    pub fn is_pressed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Middle => self.middle,
            MouseButton::Right => self.right,
            MouseButton::Other(_) => false,
        }
    }

    /// Record a new cursor position and return the delta from the previous one.
    ///
    /// The first move after startup yields a zero delta.
    pub fn move_to(&mut self, x: f32, y: f32) -> (f32, f32) {
        let delta = match self.position {
            Some((px, py)) => (x - px, y - py),
            None => (0.0, 0.0),
        };
        self.position = Some((x, y));
        delta
    }
}
