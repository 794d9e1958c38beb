//! Keyboard Input Module
//!
//! Key presses as the sketches consume them: a generic key code, the text
//! the key produced (if any), and the modifier flags held at the time.
//! Decoupled from winit; [`KeyPress::from_winit`] does the translation.

use winit::event::KeyEvent;
use winit::keyboard::{Key, ModifiersState, NamedKey, PhysicalKey};

/// Generic key codes, independent of windowing system.
///
/// Only keys the sketches react to get their own variant; everything else
/// that produced text is [`KeyCode::Character`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Space,
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    MetaLeft,
    MetaRight,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// A key whose meaning is carried by the produced text.
    Character,
    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Modifier keys themselves (pressing Shift alone, etc.).
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            KeyCode::ShiftLeft
                | KeyCode::ShiftRight
                | KeyCode::ControlLeft
                | KeyCode::ControlRight
                | KeyCode::AltLeft
                | KeyCode::AltRight
                | KeyCode::MetaLeft
                | KeyCode::MetaRight
        )
    }
}

/// State of keyboard modifier keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl ModifierState {
    /// Create a new empty modifier state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }

    /// Ctrl, Alt or Meta held. Shift only changes case, so it does not count.
    pub fn has_command(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

impl From<ModifiersState> for ModifierState {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
            meta: state.super_key(),
        }
    }
}

/// One key-down event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: KeyCode,
    /// Single character the key produced, if any.
    pub text: Option<char>,
    pub modifiers: ModifierState,
}

impl KeyPress {
    /// A plain character key without modifiers.
    pub fn character(c: char) -> Self {
        let key = if c == ' ' { KeyCode::Space } else { KeyCode::Character };
        Self {
            key,
            text: Some(c),
            modifiers: ModifierState::default(),
        }
    }

    /// A named (non-text) key without modifiers.
    pub fn named(key: KeyCode) -> Self {
        Self {
            key,
            text: None,
            modifiers: ModifierState::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: ModifierState) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Translate a winit key event. Returns `None` for releases and repeats.
    pub fn from_winit(event: &KeyEvent, modifiers: ModifiersState) -> Option<Self> {
        if !event.state.is_pressed() || event.repeat {
            return None;
        }

        let key = match &event.logical_key {
            Key::Named(named) => map_named(*named),
            Key::Character(_) => KeyCode::Character,
            _ => match event.physical_key {
                PhysicalKey::Code(winit::keyboard::KeyCode::Space) => KeyCode::Space,
                _ => KeyCode::Unknown,
            },
        };

        let text = match &event.logical_key {
            Key::Named(NamedKey::Space) => Some(' '),
            Key::Character(s) => single_char(s),
            _ => None,
        };

        Some(Self {
            key,
            text,
            modifiers: modifiers.into(),
        })
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn map_named(key: NamedKey) -> KeyCode {
    match key {
        NamedKey::Space => KeyCode::Space,
        NamedKey::Backspace => KeyCode::Backspace,
        NamedKey::Delete => KeyCode::Delete,
        NamedKey::Enter => KeyCode::Enter,
        NamedKey::Tab => KeyCode::Tab,
        NamedKey::Escape => KeyCode::Escape,
        NamedKey::Shift => KeyCode::ShiftLeft,
        NamedKey::Control => KeyCode::ControlLeft,
        NamedKey::Alt => KeyCode::AltLeft,
        NamedKey::Super | NamedKey::Meta => KeyCode::MetaLeft,
        NamedKey::ArrowUp => KeyCode::ArrowUp,
        NamedKey::ArrowDown => KeyCode::ArrowDown,
        NamedKey::ArrowLeft => KeyCode::ArrowLeft,
        NamedKey::ArrowRight => KeyCode::ArrowRight,
        _ => KeyCode::Unknown,
    }
}
