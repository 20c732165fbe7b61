use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Triangle corner with its own color; colors are interpolated across the face.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColoredVertex {
    pub pos: Vec2,
    pub color: Color,
}

impl ColoredVertex {
    #[inline]
    pub const fn new(pos: Vec2, color: Color) -> Self {
        Self { pos, color }
    }
}

/// Filled triangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub vertices: [ColoredVertex; 3],
}

impl TriangleCmd {
    #[inline]
    pub fn new(vertices: [ColoredVertex; 3]) -> Self {
        Self { vertices }
    }
}

impl DrawList {
    /// Records a vertex-colored triangle.
    #[inline]
    pub fn push_triangle(&mut self, z: ZIndex, vertices: [ColoredVertex; 3]) {
        self.push(z, DrawCmd::Triangle(TriangleCmd::new(vertices)));
    }
}
