//! Glyph Bitmap Fonts
//!
//! A font is a set of fixed-size on/off bitmaps, one per character, read from
//! a JSON asset:
//!
//! ```json
//! { "name": "Pixel Bold", "cell_width": 5, "cell_height": 7,
//!   "glyphs": { "A": ["01110", "10001", "10001", "11111", "10001", "10001", "10001"] } }
//! ```
//!
//! Row 0 is the top row. Loading happens off the frame loop through
//! [`FontLoad`], which resolves exactly once.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::game::ui::text::get_char_bitmap;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("font is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("glyph {glyph:?}: {reason}")]
    InvalidGlyph { glyph: String, reason: String },
    #[error("cell size {width}x{height} must be 1..={} pixels per side", MAX_CELL_SIZE)]
    InvalidCell { width: u32, height: u32 },
    #[error("font loader stopped before delivering a result")]
    WorkerGone,
}

// ============================================================================
// GLYPH BITMAP
// ============================================================================

/// One character as a grid of pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    pub width: u32,
    pub height: u32,
    pixels: Vec<bool>,
}

impl GlyphBitmap {
    /// Every pixel set (drawn for characters the font lacks).
    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![true; width as usize * height as usize],
        }
    }

    fn from_rows(rows: &[String], width: u32, height: u32) -> Result<Self, String> {
        if rows.len() != height as usize {
            return Err(format!("expected {height} rows, found {}", rows.len()));
        }
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for row in rows {
            if row.chars().count() != width as usize {
                return Err(format!("row {row:?} is not {width} pixels wide"));
            }
            for c in row.chars() {
                match c {
                    '1' => pixels.push(true),
                    '0' => pixels.push(false),
                    other => return Err(format!("unexpected pixel {other:?}")),
                }
            }
        }
        Ok(Self { width, height, pixels })
    }

    /// Whether the pixel at column `x`, row `y` (from the top) is set.
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.pixels[(y as u32 * self.width + x as u32) as usize]
    }

    pub fn filled_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }
}

// ============================================================================
// FONT FACE
// ============================================================================

#[derive(Deserialize)]
struct FontFile {
    name: String,
    cell_width: u32,
    cell_height: u32,
    glyphs: BTreeMap<String, Vec<String>>,
}

/// A loaded font.
#[derive(Debug, Clone)]
pub struct FontFace {
    pub name: String,
    pub cell_width: u32,
    pub cell_height: u32,
    glyphs: HashMap<char, GlyphBitmap>,
    missing: GlyphBitmap,
}

/// Largest accepted glyph cell side, in pixels.
pub const MAX_CELL_SIZE: u32 = 256;

/// Characters included in [`FontFace::builtin`].
const BUILTIN_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.-+";

impl FontFace {
    pub fn from_json(json: &str) -> Result<Self, FontError> {
        let file: FontFile = serde_json::from_str(json)?;
        let cell = 1..=MAX_CELL_SIZE;
        if !cell.contains(&file.cell_width) || !cell.contains(&file.cell_height) {
            return Err(FontError::InvalidCell {
                width: file.cell_width,
                height: file.cell_height,
            });
        }

        let mut glyphs = HashMap::with_capacity(file.glyphs.len());
        for (key, rows) in &file.glyphs {
            let mut chars = key.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(FontError::InvalidGlyph {
                    glyph: key.clone(),
                    reason: "key must be a single character".into(),
                });
            };
            let bitmap = GlyphBitmap::from_rows(rows, file.cell_width, file.cell_height)
                .map_err(|reason| FontError::InvalidGlyph {
                    glyph: key.clone(),
                    reason,
                })?;
            glyphs.insert(c, bitmap);
        }

        Ok(Self {
            name: file.name,
            cell_width: file.cell_width,
            cell_height: file.cell_height,
            glyphs,
            missing: GlyphBitmap::filled(file.cell_width, file.cell_height),
        })
    }

    pub fn load(path: &Path) -> Result<Self, FontError> {
        let json = std::fs::read_to_string(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The 5x7 UI font, always available.
    pub fn builtin() -> Self {
        let glyphs = BUILTIN_CHARSET
            .chars()
            .map(|c| {
                let rows = get_char_bitmap(c);
                let pixels = rows
                    .iter()
                    .flat_map(|bits| (0..5).map(move |col| (bits >> (4 - col)) & 1 == 1))
                    .collect();
                (c, GlyphBitmap { width: 5, height: 7, pixels })
            })
            .collect();

        Self {
            name: "Builtin 5x7".into(),
            cell_width: 5,
            cell_height: 7,
            glyphs,
            missing: GlyphBitmap::filled(5, 7),
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Exact match, or the upper-case form of `c`.
    pub fn has_glyph(&self, c: char) -> bool {
        self.lookup(c).is_some()
    }

    /// Bitmap for `c`; a filled block when the font has no such glyph.
    pub fn glyph(&self, c: char) -> &GlyphBitmap {
        self.lookup(c).unwrap_or(&self.missing)
    }

    fn lookup(&self, c: char) -> Option<&GlyphBitmap> {
        self.glyphs
            .get(&c)
            .or_else(|| c.to_uppercase().next().and_then(|u| self.glyphs.get(&u)))
    }
}

// ============================================================================
// ASYNC LOADING
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
use std::sync::mpsc::{self, Receiver, TryRecvError};

enum LoadState {
    #[cfg(not(target_arch = "wasm32"))]
    Pending(Receiver<Result<FontFace, FontError>>),
    Ready(Result<FontFace, FontError>),
    Taken,
}

/// A font that becomes available later.
///
/// [`poll`](FontLoad::poll) returns `Some` exactly once: on the first call
/// after the load finished. Every call after that returns `None`.
pub struct FontLoad {
    state: LoadState,
}

impl FontLoad {
    /// Start loading `path` on a background thread.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn(path: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel();
        let builder = std::thread::Builder::new().name("font-loader".to_string());
        let spawned = builder.spawn(move || {
            let _ = tx.send(FontFace::load(&path));
        });
        match spawned {
            Ok(_) => Self {
                state: LoadState::Pending(rx),
            },
            Err(_) => Self::failed(FontError::WorkerGone),
        }
    }

    /// In the browser the default font ships inside the binary.
    #[cfg(target_arch = "wasm32")]
    pub fn spawn(_path: PathBuf) -> Self {
        Self {
            state: LoadState::Ready(FontFace::from_json(include_str!(
                "../../assets/pixel_bold.json"
            ))),
        }
    }

    /// An already-resolved load.
    pub fn ready(face: FontFace) -> Self {
        Self {
            state: LoadState::Ready(Ok(face)),
        }
    }

    pub fn failed(err: FontError) -> Self {
        Self {
            state: LoadState::Ready(Err(err)),
        }
    }

    pub fn poll(&mut self) -> Option<Result<FontFace, FontError>> {
        match std::mem::replace(&mut self.state, LoadState::Taken) {
            #[cfg(not(target_arch = "wasm32"))]
            LoadState::Pending(rx) => match rx.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => {
                    self.state = LoadState::Pending(rx);
                    None
                }
                Err(TryRecvError::Disconnected) => Some(Err(FontError::WorkerGone)),
            },
            LoadState::Ready(result) => Some(result),
            LoadState::Taken => None,
        }
    }

    /// True once the result has been handed out.
    pub fn is_consumed(&self) -> bool {
        matches!(self.state, LoadState::Taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY: &str = r#"{
        "name": "Tiny",
        "cell_width": 3,
        "cell_height": 2,
        "glyphs": { "A": ["010", "111"], "b": ["100", "111"] }
    }"#;

    #[test]
    fn test_parse_font() {
        let font = FontFace::from_json(TINY).unwrap();
        assert_eq!(font.name, "Tiny");
        assert_eq!(font.len(), 2);
        let a = font.glyph('A');
        assert!(a.is_set(1, 0));
        assert!(!a.is_set(0, 0));
        assert_eq!(a.filled_count(), 4);
    }

    #[test]
    fn test_lowercase_falls_back_to_uppercase() {
        let font = FontFace::from_json(TINY).unwrap();
        assert_eq!(font.glyph('a'), font.glyph('A'));
        assert!(font.has_glyph('b'));
        assert!(!font.has_glyph('B'));
    }

    #[test]
    fn test_missing_glyph_is_filled_block() {
        let font = FontFace::from_json(TINY).unwrap();
        assert!(!font.has_glyph('?'));
        assert_eq!(font.glyph('?').filled_count(), 6);
    }

    #[test]
    fn test_bad_row_width() {
        let json = r#"{ "name": "x", "cell_width": 3, "cell_height": 1, "glyphs": { "A": ["01"] } }"#;
        assert!(matches!(
            FontFace::from_json(json),
            Err(FontError::InvalidGlyph { .. })
        ));
    }

    #[test]
    fn test_multi_char_key() {
        let json = r#"{ "name": "x", "cell_width": 1, "cell_height": 1, "glyphs": { "AB": ["1"] } }"#;
        assert!(matches!(
            FontFace::from_json(json),
            Err(FontError::InvalidGlyph { .. })
        ));
    }

    #[test]
    fn test_cell_size_limits() {
        let huge = r#"{ "name": "x", "cell_width": 4294967295, "cell_height": 4294967295, "glyphs": {} }"#;
        assert!(matches!(
            FontFace::from_json(huge),
            Err(FontError::InvalidCell { width: u32::MAX, height: u32::MAX })
        ));
        let empty = r#"{ "name": "x", "cell_width": 0, "cell_height": 7, "glyphs": {} }"#;
        assert!(matches!(FontFace::from_json(empty), Err(FontError::InvalidCell { .. })));
        let largest = format!(
            r#"{{ "name": "x", "cell_width": {MAX_CELL_SIZE}, "cell_height": {MAX_CELL_SIZE}, "glyphs": {{}} }}"#
        );
        let font = FontFace::from_json(&largest).unwrap();
        assert_eq!(font.glyph('A'), &GlyphBitmap::filled(MAX_CELL_SIZE, MAX_CELL_SIZE));
    }

    #[test]
    fn test_builtin_font() {
        let font = FontFace::builtin();
        assert_eq!(font.len(), BUILTIN_CHARSET.chars().count());
        assert!(font.has_glyph('q'));
        assert!(font.glyph('I').is_set(2, 3));
    }

    #[test]
    fn test_out_of_range_pixel_is_unset() {
        let font = FontFace::builtin();
        assert!(!font.glyph('A').is_set(-1, 0));
        assert!(!font.glyph('A').is_set(5, 0));
    }

    #[test]
    fn test_ready_resolves_once() {
        let mut load = FontLoad::ready(FontFace::builtin());
        assert!(!load.is_consumed());
        assert!(matches!(load.poll(), Some(Ok(_))));
        assert!(load.is_consumed());
        assert!(load.poll().is_none());
    }

    #[test]
    fn test_spawn_missing_file_reports_io_error() {
        let mut load = FontLoad::spawn(PathBuf::from("no/such/font.json"));
        let result = loop {
            if let Some(result) = load.poll() {
                break result;
            }
            std::thread::yield_now();
        };
        assert!(matches!(result, Err(FontError::Io { .. })));
    }

    #[test]
    fn test_bundled_asset_parses() {
        let font = FontFace::from_json(include_str!("../../assets/pixel_bold.json")).unwrap();
        assert!(font.has_glyph('A'));
        assert!(font.has_glyph('z'));
        assert!(font.has_glyph('7'));
    }
}
