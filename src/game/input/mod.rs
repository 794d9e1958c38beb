//! Input Module
//!
//! Key presses to sketch commands.

pub mod actions;
pub mod controller;

pub use actions::{IgnoreReason, InputCommand};
pub use controller::{InputController, InputMode, SpawnRegion};
