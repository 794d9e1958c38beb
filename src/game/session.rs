//! Session State
//!
//! Tracks whether the sketch's assets are ready. The font load is the only
//! thing that completes outside the frame loop; the session polls it once
//! per frame and keeps the result.

use crate::game::font::{FontFace, FontLoad};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetState {
    Loading,
    Ready,
    /// The requested font failed; the built-in one is in use
    Fallback,
}

pub struct Session {
    load: FontLoad,
    font: Option<FontFace>,
    state: AssetState,
}

impl Session {
    pub fn new(load: FontLoad) -> Self {
        Self {
            load,
            font: None,
            state: AssetState::Loading,
        }
    }

    /// Check on the font load. Returns true on the one call where the
    /// assets became available.
    pub fn poll(&mut self) -> bool {
        if self.font.is_some() {
            return false;
        }
        match self.load.poll() {
            None => false,
            Some(Ok(face)) => {
                log::info!("font '{}' loaded ({} glyphs)", face.name, face.len());
                self.font = Some(face);
                self.state = AssetState::Ready;
                true
            }
            Some(Err(err)) => {
                log::error!("font load failed: {err}; using built-in font");
                self.font = Some(FontFace::builtin());
                self.state = AssetState::Fallback;
                true
            }
        }
    }

    pub fn state(&self) -> AssetState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.font.is_some()
    }

    pub fn font(&self) -> Option<&FontFace> {
        self.font.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::font::FontError;

    #[test]
    fn test_ready_font() {
        let mut session = Session::new(FontLoad::ready(FontFace::builtin()));
        assert!(!session.is_loaded());
        assert!(session.poll());
        assert!(session.is_loaded());
        assert_eq!(session.state(), AssetState::Ready);
        assert!(!session.poll());
    }

    #[test]
    fn test_failed_font_falls_back() {
        let mut session = Session::new(FontLoad::failed(FontError::WorkerGone));
        assert!(session.poll());
        assert_eq!(session.state(), AssetState::Fallback);
        assert!(session.font().is_some_and(|f| f.has_glyph('A')));
    }
}
