//! Starfield demo.
//!
//! The animation model (points, ship, flame, glow layout) is plain data and
//! math so it can be exercised without a window; [`app::StarfieldApp`] wires
//! it to the engine runtime and renderers.

pub mod app;
pub mod config;
pub mod scene;
pub mod ship;
pub mod starfield;

pub use app::StarfieldApp;
pub use config::StarfieldConfig;
