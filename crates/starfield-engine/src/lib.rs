//! Starfield engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the demo binaries:
//! a single-window winit runtime, the wgpu device/surface, a 2D draw list and
//! the renderers that consume it.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
