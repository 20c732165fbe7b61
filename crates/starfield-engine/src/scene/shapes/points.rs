use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Point-cloud draw payload: every point is drawn as a single pixel in `color`.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
}

impl PointsCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, color: Color) -> Self {
        Self { points, color }
    }
}

impl DrawList {
    /// Records a point cloud.
    #[inline]
    pub fn push_points(&mut self, z: ZIndex, points: Vec<Vec2>, color: Color) {
        self.push(z, DrawCmd::Points(PointsCmd::new(points, color)));
    }
}
