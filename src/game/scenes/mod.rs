//! Scene Module
//!
//! The runnable sketches. Each owns its physics world and render scene and
//! advances them once per displayed frame. **No wgpu imports** - the window
//! shell in [`crate::game::app`] draws whatever [`Sketch::scene`] returns.

pub mod cube_drop;
pub mod letter_drop;

pub use cube_drop::CubeDrop;
pub use letter_drop::LetterDrop;

use glam::Vec3;

use crate::game::input::{IgnoreReason, InputCommand};
use crate::game::scene::RenderScene;
use crate::input::KeyPress;

/// One demo the window shell can run.
pub trait Sketch {
    /// Window title.
    fn title(&self) -> &str;

    /// Advance one displayed frame. `dt` is wall-clock time since the
    /// previous frame; physics always advances by its fixed step.
    fn frame(&mut self, dt: f32);

    /// React to a key press.
    fn on_key(&mut self, _press: &KeyPress) -> InputCommand {
        InputCommand::Ignored(IgnoreReason::NotPrintable)
    }

    fn scene(&self) -> &RenderScene;

    /// Where the camera starts.
    fn camera_position(&self) -> Vec3;

    /// Short status line for the overlay (pixel font: A-Z, 0-9, '.', '-', '+').
    fn status(&self) -> String {
        String::new()
    }
}
