//! Physics module
//!
//! Rigid-body physics for the sketches, built on `glam` without an external
//! physics library.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, seconds, kilograms. The sketches use a strong
//! gravity (40 m/s²) so letters drop briskly.
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types (Vec3, Quat) re-exported from glam
//! - [`body`] - Rigid bodies, shapes and handles
//! - [`collision`] - Corner-based contact generation (box/plane, box/box)
//! - [`world`] - The simulation context and its fixed-step solver

pub mod body;
pub mod collision;
pub mod types;
pub mod world;

pub use body::{BodyHandle, BodyShape, RigidBody};
pub use collision::{Contact, collide};
pub use types::{Quat, Transform, Vec3};
pub use world::{CollisionEvent, PhysicsWorld, WorldConfig};

/// Physics step used by every sketch (60 Hz).
pub const FIXED_TIME_STEP: f32 = 1.0 / 60.0;
