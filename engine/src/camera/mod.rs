//! Camera Module
//!
//! Camera state and math for the sketches.
//! This module is window-system agnostic - input arrives as pixel deltas.

pub mod orbit;

pub use orbit::OrbitCamera;
