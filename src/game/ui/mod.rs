//! UI Module
//!
//! 2D overlay widgets drawn as NDC quads.

pub mod camera_panel;
pub mod fps;
pub mod slider;
pub mod text;

pub use camera_panel::CameraPanel;
pub use fps::FpsStats;
pub use slider::UISlider;
pub use text::{ScreenSize, add_rect, draw_text, get_char_bitmap, text_width};
