use crate::scene::shapes::points::PointsCmd;
use crate::scene::shapes::sprite::SpriteCmd;
use crate::scene::shapes::triangle::TriangleCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add a matching renderer under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Points(PointsCmd),
    Triangle(TriangleCmd),
    Sprite(SpriteCmd),
}
