use super::{Rect, Viewport};

/// Fixed virtual resolution that is letterboxed into the physical surface.
///
/// Renderers always see `size` as their viewport; the runtime maps it onto the
/// largest centered rectangle with the same aspect ratio that fits the surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LogicalPresentation {
    pub size: Viewport,
}

impl LogicalPresentation {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { size: Viewport::new(width, height) }
    }

    /// Returns the letterboxed destination rect in physical pixels.
    ///
    /// Returns `None` when either the logical size or the surface is degenerate.
    pub fn letterbox(self, surface_width: u32, surface_height: u32) -> Option<Rect> {
        if !self.size.is_valid() || surface_width == 0 || surface_height == 0 {
            return None;
        }

        let sw = surface_width as f32;
        let sh = surface_height as f32;
        let scale = (sw / self.size.width).min(sh / self.size.height);

        let w = (self.size.width * scale).min(sw);
        let h = (self.size.height * scale).min(sh);

        Some(Rect::new((sw - w) * 0.5, (sh - h) * 0.5, w, h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fit_fills_surface() {
        let rect = LogicalPresentation::new(640.0, 480.0).letterbox(640, 480).unwrap();
        assert_eq!(rect, Rect::new(0.0, 0.0, 640.0, 480.0));
    }

    #[test]
    fn wide_surface_gets_pillarbox() {
        let rect = LogicalPresentation::new(640.0, 480.0).letterbox(1920, 960).unwrap();
        assert_eq!(rect.size.y, 960.0);
        assert_eq!(rect.size.x, 1280.0);
        assert_eq!(rect.origin.x, 320.0);
        assert_eq!(rect.origin.y, 0.0);
    }

    #[test]
    fn tall_surface_gets_letterbox() {
        let rect = LogicalPresentation::new(640.0, 480.0).letterbox(640, 1000).unwrap();
        assert_eq!(rect.size.x, 640.0);
        assert_eq!(rect.size.y, 480.0);
        assert_eq!(rect.origin.y, 260.0);
    }

    #[test]
    fn aspect_ratio_is_preserved() {
        let rect = LogicalPresentation::new(640.0, 480.0).letterbox(1366, 768).unwrap();
        assert!((rect.size.x / rect.size.y - 640.0 / 480.0).abs() < 1e-4);
    }

    #[test]
    fn zero_surface_has_no_rect() {
        assert!(LogicalPresentation::new(640.0, 480.0).letterbox(0, 480).is_none());
        assert!(LogicalPresentation::new(0.0, 480.0).letterbox(640, 480).is_none());
    }
}
