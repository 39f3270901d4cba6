//! Raw RGBA pixel buffer.

use crate::error::{TypeError, TypeResult};
use crate::Rgb;

/// A raw RGBA image in row-major order.
///
/// The pipeline never decodes file formats itself; an external
/// collaborator produces this buffer. The core only ever borrows it
/// immutably for the duration of one extraction call.
///
/// # Layout
///
/// `data[(y * width + x) * 4 .. + 4]` holds the `[r, g, b, a]` bytes
/// for the pixel at column `x`, row `y`, with `(0, 0)` at the top-left.
///
/// # Example
///
/// ```
/// use hull_types::{PixelBuffer, Rgb};
///
/// let mut image = PixelBuffer::solid(10, 5, Rgb::WHITE).unwrap();
/// image.fill_rect(2, 1, 4, 3, Rgb::BLACK);
///
/// assert_eq!(image.pixel(2, 1), Rgb::BLACK);
/// assert_eq!(image.pixel(0, 0), Rgb::WHITE);
/// ```
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from caller-supplied RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if either size is zero, or if `data.len()` is
    /// not exactly `width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> TypeResult<Self> {
        if width == 0 || height == 0 {
            return Err(TypeError::EmptyImage { width, height });
        }

        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(TypeError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer filled with a single opaque color.
    ///
    /// # Errors
    ///
    /// Returns an error if either size is zero.
    pub fn solid(width: u32, height: u32, color: Rgb) -> TypeResult<Self> {
        if width == 0 || height == 0 {
            return Err(TypeError::EmptyImage { width, height });
        }

        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            data.extend_from_slice(&[color.r, color.g, color.b, 255]);
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Read the color at `(x, y)`.
    ///
    /// Alpha is dropped. Coordinates are clamped to the image, so
    /// out-of-range reads return the nearest edge pixel.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let x = x.min(self.width - 1) as usize;
        let y = y.min(self.height - 1) as usize;
        let offset = (y * self.width as usize + x) * 4;
        Rgb::new(self.data[offset], self.data[offset + 1], self.data[offset + 2])
    }

    /// Fill an axis-aligned rectangle with an opaque color.
    ///
    /// The rectangle is clipped to the image; a rectangle entirely
    /// outside is a no-op. Intended for tests and synthetic fixtures.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);

        for row in y.min(self.height)..y_end {
            for col in x.min(self.width)..x_end {
                let offset = (row as usize * self.width as usize + col as usize) * 4;
                self.data[offset] = color.r;
                self.data[offset + 1] = color.g;
                self.data[offset + 2] = color.b;
                self.data[offset + 3] = 255;
            }
        }
    }
}
