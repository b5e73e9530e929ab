use crate::error::{CodecError, CodecResult};
use crate::utils::grayscale::bgra_to_grayscale_parallel;

/// Bytes per pixel in a [`PixelImage`] (B, G, R, A)
pub const BYTES_PER_PIXEL: usize = 4;

/// Raw 2D pixel grid produced by a barcode writer
///
/// Pixels are stored row-major, 4 bytes each in B, G, R, A order, which is
/// the layout toolkit bitmaps expect for direct copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl PixelImage {
    /// Wrap an existing BGRA buffer, checking it matches the dimensions
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> CodecResult<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL));
        if width == 0 || height == 0 || expected != Some(pixels.len()) {
            return Err(CodecError::InvalidDimensions {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// All-white opaque image
    ///
    /// Same size rules as [`PixelImage::new`]: a zero width or height is
    /// rejected.
    pub fn blank(width: usize, height: usize) -> CodecResult<Self> {
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(CodecError::InvalidDimensions {
                width,
                height,
                len: 0,
            })?;
        Self::new(width, height, vec![0xFF; len])
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw BGRA bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get the BGRA value at (x, y), or `None` when out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * BYTES_PER_PIXEL;
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    /// Luminance of every pixel, row-major
    pub fn to_luminance(&self) -> Vec<u8> {
        bgra_to_grayscale_parallel(&self.pixels, self.width, self.height)
    }
}
