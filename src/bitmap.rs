//! Bitmap adapter
//!
//! Bridges codec pixel buffers and displayable `image` bitmaps, and loads
//! or saves pictures on disk.

use crate::error::CodecResult;
use crate::models::PixelImage;
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use std::path::Path;
use tracing::debug;

/// Displayable bitmap handed to the UI surface
pub type Bitmap = RgbaImage;

/// Convert a BGRA pixel image into a displayable RGBA bitmap
pub fn to_bitmap(image: &PixelImage) -> Bitmap {
    RgbaImage::from_fn(image.width() as u32, image.height() as u32, |x, y| {
        let [b, g, r, a] = image
            .pixel(x as usize, y as usize)
            .unwrap_or([0xFF, 0xFF, 0xFF, 0xFF]);
        Rgba([r, g, b, a])
    })
}

/// Convert any decoded picture into a BGRA pixel image
pub fn from_dynamic(picture: DynamicImage) -> CodecResult<PixelImage> {
    let rgba = picture.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut pixels = rgba.into_raw();
    for px in pixels.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
    PixelImage::new(width as usize, height as usize, pixels)
}

/// Load a picture file (PNG, JPEG, ...) as a pixel image
pub fn load<P: AsRef<Path>>(path: P) -> CodecResult<PixelImage> {
    let path = path.as_ref();
    let picture = image::open(path)?;
    let (width, height) = picture.dimensions();
    debug!(path = %path.display(), width, height, "loaded picture");
    from_dynamic(picture)
}

/// Write a pixel image to disk as PNG
pub fn save_png<P: AsRef<Path>>(image: &PixelImage, path: P) -> CodecResult<()> {
    to_bitmap(image).save_with_format(path.as_ref(), image::ImageFormat::Png)?;
    Ok(())
}
