//! Coordinate and geometry types shared across renderers and applications.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Renderers convert to NDC in shaders using a viewport uniform.

mod presentation;
mod rect;
mod vec2;
mod viewport;

pub use presentation::LogicalPresentation;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
