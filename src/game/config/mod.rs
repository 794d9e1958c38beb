//! Config Module
//!
//! Centralized configuration for window, physics and letter parameters.

pub mod demo_config;

pub use demo_config::{
    CONFIG_ENV_VAR, ConfigError, DEFAULT_CONFIG_FILE, DemoConfig, LetterConfig, PhysicsConfig,
    ViewConfig,
};
