//! Barcode codec seam
//!
//! The page controller only sees [`BarcodeCodec`]. [`QrCodec`] is the
//! production implementation; symbology work is delegated to the `qrcode`
//! crate for writing and the `rqrr` crate for reading.

/// Writer and reader settings
pub mod options;
mod reader;
mod writer;

pub use options::{DecodingOptions, EncodingOptions};

use crate::error::{CodecError, CodecResult};
use crate::models::{BarcodeFormat, DecodeResult, PixelImage};
use tracing::{debug, trace};

/// Converts text to a barcode image and back
pub trait BarcodeCodec {
    /// Encode `text` as a barcode of the given format
    fn encode(
        &self,
        text: &str,
        format: BarcodeFormat,
        options: &EncodingOptions,
    ) -> CodecResult<PixelImage>;

    /// Look for a barcode in `image`
    ///
    /// `Ok(None)` means the image was read but no allowed barcode was
    /// recognized.
    fn decode(
        &self,
        image: &PixelImage,
        options: &DecodingOptions,
    ) -> CodecResult<Option<DecodeResult>>;
}

/// QR code writer and reader
#[derive(Debug, Clone, Copy, Default)]
pub struct QrCodec;

impl QrCodec {
    /// Create a new codec
    pub fn new() -> Self {
        Self
    }
}

impl BarcodeCodec for QrCodec {
    fn encode(
        &self,
        text: &str,
        format: BarcodeFormat,
        options: &EncodingOptions,
    ) -> CodecResult<PixelImage> {
        if format != BarcodeFormat::QrCode {
            return Err(CodecError::UnsupportedFormat(format));
        }
        let grid = writer::encode_modules(text, options)?;
        let image = writer::render(&grid, options)?;
        debug!(
            modules = grid.size(),
            width = image.width(),
            height = image.height(),
            "encoded QR code"
        );
        Ok(image)
    }

    fn decode(
        &self,
        image: &PixelImage,
        options: &DecodingOptions,
    ) -> CodecResult<Option<DecodeResult>> {
        if !options.allows(BarcodeFormat::QrCode) {
            trace!(formats = ?options.possible_formats, "QR not in possible formats, skipping");
            return Ok(None);
        }
        Ok(reader::read_qr(image, options))
    }
}
