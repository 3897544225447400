use serde::{Deserialize, Serialize};

use super::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

// ============================================================================
// Color
// ============================================================================

/// Opaque fill color. Alpha is not part of the model: every write stores 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

/// Write RGBA pixel to slice, alpha forced opaque
#[inline]
fn write_pixel(dest: &mut [u8], color: Color) {
    dest[0] = color.r;
    dest[1] = color.g;
    dest[2] = color.b;
    dest[3] = 255;
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// RGBA8 pixel buffer, row-major with the origin at the top-left.
///
/// Dimensions are fixed at construction. The flat byte offset of a pixel is
/// private to this type; callers only see bounds-checked writes and the
/// read-only [`as_bytes`](Self::as_bytes) view used for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a new pixel buffer with default resolution (320x180)
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create a new pixel buffer with custom resolution, all bytes zero
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height
    }

    /// Calculate byte offset for pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Clear to a solid color
    pub fn clear(&mut self, color: Color) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            write_pixel(chunk, color);
        }
    }

    /// Set a single pixel. Out-of-range coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            write_pixel(&mut self.pixels[idx..idx + 4], color);
        }
    }

    /// Read a pixel's color, or None if out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.get_pixel_rgba(x, y)
            .map(|[r, g, b, _]| Color::rgb(r, g, b))
    }

    /// Read all 4 channels of a pixel (bounds checked)
    #[inline]
    pub fn get_pixel_rgba(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            let p = &self.pixels[idx..idx + 4];
            Some([p[0], p[1], p[2], p[3]])
        } else {
            None
        }
    }

    /// Fill the half-open span `[x_start, x_end)` of row `y`.
    ///
    /// The span is clipped to the buffer first, so any part lying outside is
    /// dropped. An empty or inverted span writes nothing. Returns the number
    /// of pixels written.
    pub fn fill_span(&mut self, y: i32, x_start: i32, x_end: i32, color: Color) -> usize {
        if y < 0 || y as u32 >= self.height {
            return 0;
        }
        let start = x_start.max(0);
        let end = x_end.min(self.width as i32);
        if start >= end {
            return 0;
        }

        let from = self.pixel_index(start as u32, y as u32);
        let to = self.pixel_index(end as u32, y as u32);
        for chunk in self.pixels[from..to].chunks_exact_mut(4) {
            write_pixel(chunk, color);
        }
        (end - start) as usize
    }

    /// Raw RGBA bytes for texture upload, `width * height * 4` long
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Number of pixels currently holding exactly `color`
    pub fn count_color(&self, color: Color) -> usize {
        self.pixels
            .chunks_exact(4)
            .filter(|p| p[0] == color.r && p[1] == color.g && p[2] == color.b)
            .count()
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_size() {
        let buffer = PixelBuffer::new();
        assert_eq!(buffer.width(), 320);
        assert_eq!(buffer.height(), 180);
        assert_eq!(buffer.as_bytes().len(), 320 * 180 * 4);
        assert!(buffer.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_pixel_layout_and_alpha() {
        let mut buffer = PixelBuffer::with_size(4, 3);
        buffer.set_pixel(1, 2, Color::rgb(10, 20, 30));

        // (x + y * width) * 4
        let idx = (1 + 2 * 4) * 4;
        assert_eq!(&buffer.as_bytes()[idx..idx + 4], &[10, 20, 30, 255]);
        assert_eq!(buffer.get_pixel_rgba(1, 2), Some([10, 20, 30, 255]));
        assert_eq!(buffer.count_color(Color::rgb(10, 20, 30)), 1);
    }

    #[test]
    fn test_set_pixel_out_of_bounds_is_noop() {
        let mut buffer = PixelBuffer::with_size(4, 4);
        let before = buffer.clone();
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (i32::MIN, i32::MAX)] {
            buffer.set_pixel(x, y, Color::WHITE);
            assert_eq!(buffer.get_pixel(x, y), None);
        }
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_fill_span_is_half_open() {
        let mut buffer = PixelBuffer::with_size(8, 2);
        let written = buffer.fill_span(1, 2, 5, Color::WHITE);
        assert_eq!(written, 3);
        assert_eq!(buffer.get_pixel(1, 1), Some(Color::BLACK));
        assert_eq!(buffer.get_pixel(2, 1), Some(Color::WHITE));
        assert_eq!(buffer.get_pixel(4, 1), Some(Color::WHITE));
        assert_eq!(buffer.get_pixel(5, 1), Some(Color::BLACK));
    }

    #[test]
    fn test_fill_span_clips_to_buffer() {
        let mut buffer = PixelBuffer::with_size(8, 2);
        assert_eq!(buffer.fill_span(0, -50, 58, Color::WHITE), 8);
        assert_eq!(buffer.fill_span(5, 0, 8, Color::WHITE), 0);
        assert_eq!(buffer.fill_span(-1, 0, 8, Color::WHITE), 0);
        assert_eq!(buffer.fill_span(1, 6, 3, Color::WHITE), 0);
        assert_eq!(buffer.fill_span(1, i32::MIN, i32::MAX, Color::WHITE), 8);
        assert_eq!(buffer.count_color(Color::WHITE), 16);
    }

    #[test]
    fn test_clear_sets_every_pixel_opaque() {
        let mut buffer = PixelBuffer::with_size(3, 3);
        buffer.clear(Color::rgb(1, 2, 3));
        assert!(buffer
            .as_bytes()
            .chunks_exact(4)
            .all(|p| p == [1, 2, 3, 255]));
    }
}
