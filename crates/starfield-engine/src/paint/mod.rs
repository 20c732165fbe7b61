//! Paint model shared between applications and renderers.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - CPU-side RGBA bitmaps and the generators that fill them
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod image;
pub mod radial;

pub use color::Color;
pub use image::Image;
pub use radial::RadialFalloff;
