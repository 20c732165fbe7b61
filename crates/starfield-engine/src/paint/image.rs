/// CPU-side RGBA8 bitmap (straight alpha, row-major, top row first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    /// Creates a fully transparent image.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 4;
        Self { width, height, pixels: vec![0; len] }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw RGBA bytes, `4 * width * height` long.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let i = self.offset(x, y)?;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]])
    }

    /// Writes the pixel at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i..i + 4].copy_from_slice(&rgba);
        }
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_image_is_transparent() {
        let img = Image::new(3, 2);
        assert_eq!(img.as_bytes().len(), 24);
        assert!(img.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn set_then_get_pixel() {
        let mut img = Image::new(4, 4);
        img.set_pixel(2, 3, [1, 2, 3, 4]);
        assert_eq!(img.pixel(2, 3), Some([1, 2, 3, 4]));
        assert_eq!(img.pixel(3, 2), Some([0, 0, 0, 0]));
    }

    #[test]
    fn out_of_bounds_is_none() {
        let mut img = Image::new(2, 2);
        img.set_pixel(2, 0, [9; 4]);
        assert_eq!(img.pixel(2, 0), None);
        assert!(img.as_bytes().iter().all(|&b| b == 0));
    }
}
