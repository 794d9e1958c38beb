//! Letter Drop - Typing Sketch
//!
//! Run with: `cargo run --bin letter_drop`
//!
//! Every printable key drops that letter as a 3D block above the ground. A
//! letter bounces off in a random direction the first time it hits anything.
//!
//! Controls:
//! - Printable keys: Drop a letter (ignored while the ground is tilting)
//! - Backspace: Tilt the ground to dump the pile
//! - Left-drag: Orbit camera
//! - Right-drag: Pan camera
//! - Scroll: Zoom
//! - Camera panel (top-right): Drag X/Y/Z sliders to move the eye
//! - ESC: Exit
//!
//! Set `LETTERFALL_CONFIG` to load settings from a JSON file other than
//! `letterfall.json`, and `RUST_LOG=debug` to trace spawns and collisions.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use letterfall_engine::game::app::SketchApp;
use letterfall_engine::game::config::DemoConfig;
use letterfall_engine::game::scenes::LetterDrop;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("===========================================");
    println!("   Letterfall - Letter Drop");
    println!("===========================================");
    println!();
    println!("*** Type to drop letters ***");
    println!();
    println!("Controls: A-Z 0-9 Drop letter, Backspace Tilt ground");
    println!("Left-drag Orbit, Right-drag Pan, Scroll Zoom, ESC: Exit");
    println!();

    let config = DemoConfig::load_or_default();
    SketchApp::new(LetterDrop::new(config.clone()), config).run();
}

#[cfg(target_arch = "wasm32")]
fn main() {}

/// Browser entry point. The font is bundled into the binary on wasm.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();

    let config = DemoConfig::default();
    SketchApp::new(LetterDrop::new(config.clone()), config).run();
}
