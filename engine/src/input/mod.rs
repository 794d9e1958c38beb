//! Input Module
//!
//! Platform-agnostic keyboard and mouse input for the sketches.
//!
//! # Example
//!
//! ```rust,ignore
//! use letterfall_engine::input::{KeyPress, MouseState, MouseButton};
//!
//! let press = KeyPress::character('a');
//! sketch.on_key(&press);
//!
//! let mut mouse = MouseState::new();
//! mouse.set_button(MouseButton::Left, true);
//! let (dx, dy) = mouse.move_to(120.0, 80.0);
//! ```

pub mod keyboard;
pub mod mouse;

pub use keyboard::{KeyCode, KeyPress, ModifierState};
pub use mouse::{MouseButton, MouseState};
