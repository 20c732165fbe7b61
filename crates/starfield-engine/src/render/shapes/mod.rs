//! Shape renderers.

mod common;

pub mod points;
pub mod sprite;
pub mod triangle;

pub use common::BlendMode;
