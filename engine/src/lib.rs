//! Letterfall Engine Library
//!
//! Small rigid-body physics, rendering and input plumbing for the falling
//! letter sketches, plus the sketches themselves (in `src/game/`).
//!
//! # Modules
//!
//! - [`physics`] - Rigid-body world stepped at a fixed rate
//! - [`render`] - wgpu context, scene and overlay passes
//! - [`input`] - Platform-agnostic keyboard and mouse state
//! - [`camera`] - Orbit camera
//! - [`game`] - Scene graph, entity pairing, input controller, sketches
//!
//! # Example
//!
//! ```ignore
//! use letterfall_engine::game::scenes::LetterDrop;
//! use letterfall_engine::game::app::SketchApp;
//! use letterfall_engine::game::config::DemoConfig;
//!
//! let config = DemoConfig::load_or_default();
//! let sketch = LetterDrop::new(config.clone());
//! SketchApp::new(sketch, config).run();
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod render;

// Sketch-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use camera::OrbitCamera;
pub use input::{KeyCode, KeyPress, ModifierState, MouseButton, MouseState};
pub use physics::{BodyHandle, BodyShape, CollisionEvent, FIXED_TIME_STEP, PhysicsWorld};
