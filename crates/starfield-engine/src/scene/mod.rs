//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;
mod order;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use shapes::points::PointsCmd;
pub use shapes::sprite::{SpriteCmd, TextureId};
pub use shapes::triangle::{ColoredVertex, TriangleCmd};
pub use order::{SortKey, ZIndex};
