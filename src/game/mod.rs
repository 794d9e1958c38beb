//! Game Module
//!
//! The sketches and everything they are built from: scene graph, entity
//! factory, synchronizer, input controller, assets and the window shell.

pub mod app;
pub mod clock;
pub mod config;
pub mod entity;
pub mod font;
pub mod glyph_mesh;
pub mod input;
pub mod scene;
pub mod scenes;
pub mod session;
pub mod sync;
pub mod tilt;
pub mod types;
pub mod ui;

pub use config::{ConfigError, DemoConfig};
pub use entity::{EntityFactory, EntityPair, EntitySpawn, Pairing, ScatterRange};
pub use font::{FontError, FontFace, FontLoad, GlyphBitmap};
pub use glyph_mesh::{GlyphMeshOptions, text_geometry};
pub use input::{IgnoreReason, InputCommand, InputController, InputMode, SpawnRegion};
pub use scene::{Material, MeshId, RenderScene, Shading, VisualMesh};
pub use scenes::{CubeDrop, LetterDrop, Sketch};
pub use session::{AssetState, Session};
pub use sync::synchronize;
pub use tilt::TiltAnimation;
pub use types::{Mesh, Vertex};
