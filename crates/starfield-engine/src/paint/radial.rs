use super::Image;

/// Radial falloff bitmap generator.
///
/// Produces a `2r × 2r` image tinted with `rgb` whose alpha falls linearly from
/// 255 at the center to 0 at distance `r` and beyond. Used for glow sprites.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RadialFalloff {
    pub radius: u32,
    pub rgb: [u8; 3],
}

impl RadialFalloff {
    #[inline]
    pub const fn new(radius: u32, rgb: [u8; 3]) -> Self {
        Self { radius, rgb }
    }

    /// Alpha at pixel `(x, y)` of the generated image.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if self.radius == 0 {
            return 0;
        }
        let r = self.radius as f32;
        let dx = x as f32 - r;
        let dy = y as f32 - r;
        let dist = (dx.hypot(dy) / r).min(1.0);
        ((1.0 - dist) * 255.0) as u8
    }

    pub fn render(&self) -> Image {
        let side = self.radius * 2;
        let mut img = Image::new(side, side);
        let [r, g, b] = self.rgb;

        for y in 0..side {
            for x in 0..side {
                img.set_pixel(x, y, [r, g, b, self.alpha_at(x, y)]);
            }
        }

        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLOW: RadialFalloff = RadialFalloff::new(40, [255, 255, 200]);

    #[test]
    fn image_is_twice_the_radius() {
        let img = GLOW.render();
        assert_eq!((img.width(), img.height()), (80, 80));
    }

    #[test]
    fn center_is_fully_opaque() {
        let img = GLOW.render();
        assert_eq!(img.pixel(40, 40), Some([255, 255, 200, 255]));
    }

    #[test]
    fn corners_are_transparent() {
        let img = GLOW.render();
        for (x, y) in [(0, 0), (79, 0), (0, 79), (79, 79)] {
            assert_eq!(img.pixel(x, y).map(|p| p[3]), Some(0), "corner ({x}, {y})");
        }
    }

    #[test]
    fn alpha_falls_off_linearly_along_a_row() {
        // Halfway to the edge is half brightness (truncated).
        assert_eq!(GLOW.alpha_at(60, 40), 127);
        let row: Vec<u8> = (40..80).map(|x| GLOW.alpha_at(x, 40)).collect();
        assert!(row.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn zero_radius_renders_empty_image() {
        let img = RadialFalloff::new(0, [255; 3]).render();
        assert!(img.is_empty());
    }
}
