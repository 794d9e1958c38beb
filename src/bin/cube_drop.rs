//! Cube Drop - Physics Smoke Test
//!
//! Run with: `cargo run --bin cube_drop`
//!
//! A single wireframe cube falls from 10 m and settles on a grey ground plane.
//!
//! Controls:
//! - Left-drag: Orbit camera
//! - Right-drag: Pan camera
//! - Scroll: Zoom
//! - Camera panel (top-right): Drag X/Y/Z sliders to move the eye
//! - ESC: Exit
//!
//! Browser (wasm): build with `cargo build --bin cube_drop --target wasm32-unknown-unknown`,
//! then run `wasm-bindgen` and serve.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use letterfall_engine::game::app::SketchApp;
use letterfall_engine::game::config::DemoConfig;
use letterfall_engine::game::scenes::CubeDrop;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("===========================================");
    println!("   Letterfall - Cube Drop");
    println!("===========================================");
    println!();
    println!("Controls: Left-drag Orbit, Right-drag Pan, Scroll Zoom");
    println!("Camera panel (top-right): drag X/Y/Z, ESC: Exit");
    println!();

    let config = DemoConfig::load_or_default();
    SketchApp::new(CubeDrop::new(config.clone()), config).run();
}

#[cfg(target_arch = "wasm32")]
fn main() {}

/// Browser entry point. The app requests the GPU asynchronously once the canvas exists.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();

    let config = DemoConfig::default();
    SketchApp::new(CubeDrop::new(config.clone()), config).run();
}
