//! Input Commands
//!
//! What a key press asks the sketch to do.

use glam::Vec3;

/// Outcome of one key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputCommand {
    /// Drop a letter at `position`
    Spawn { glyph: char, position: Vec3 },
    /// Start the ground tilt; spawning stays off until it finishes
    StartTilt,
    Ignored(IgnoreReason),
}

impl InputCommand {
    pub fn is_ignored(&self) -> bool {
        matches!(self, InputCommand::Ignored(_))
    }
}

/// Why a key press was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Ctrl, Alt or Meta was held
    Modifier,
    Space,
    /// No printable character (arrows, Enter, lone modifiers, ...)
    NotPrintable,
    /// The tilt animation is running
    Disabled,
    /// Assets have not finished loading
    Loading,
}
