//! Error types for the codec and the page controller
//!
//! `CodecError` covers everything the barcode codec and bitmap adapter can
//! fail with. `PageError` is what the controller hands back to its host:
//! either the input was rejected, or a codec failure passed through untouched.

use crate::models::BarcodeFormat;
use thiserror::Error;

/// Failure reported by the barcode codec or the bitmap adapter
#[derive(Debug, Error)]
pub enum CodecError {
    /// The writer was asked to encode an empty string
    #[error("Found empty contents")]
    EmptyContents,

    /// The requested symbology has no writer in this codec
    #[error("Unsupported barcode format: {0}")]
    UnsupportedFormat(BarcodeFormat),

    /// The QR writer rejected the data (too long, invalid characters, ...)
    #[error("QR encoding failed: {0}")]
    Encode(#[source] qrcode::types::QrError),

    /// A pixel buffer does not match its declared dimensions
    #[error("Pixel buffer of {len} bytes does not fit a {width}x{height} BGRA image")]
    InvalidDimensions {
        /// Declared width in pixels
        width: usize,
        /// Declared height in pixels
        height: usize,
        /// Actual buffer length in bytes
        len: usize,
    },

    /// The requested output would exceed the writer's size limits
    #[error("Requested image of {width}x{height} pixels exceeds the supported size")]
    ImageTooLarge {
        /// Requested or computed width in pixels
        width: usize,
        /// Requested or computed height in pixels
        height: usize,
    },

    /// Image file could not be loaded or saved
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Error returned by the page controller's actions
#[derive(Debug, Error)]
pub enum PageError {
    /// Generate was triggered with an empty input field
    #[error("Input text is empty")]
    EmptyInput,

    /// The codec failed; the controller does not recover from this
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result alias for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Result alias for page controller operations
pub type Result<T> = std::result::Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_error_passes_through_page_error() {
        let err: PageError = CodecError::UnsupportedFormat(BarcodeFormat::Aztec).into();
        assert!(matches!(
            err,
            PageError::Codec(CodecError::UnsupportedFormat(BarcodeFormat::Aztec))
        ));
        assert_eq!(err.to_string(), "Unsupported barcode format: AZTEC");
    }

    #[test]
    fn test_invalid_dimensions_message() {
        let err = CodecError::InvalidDimensions {
            width: 2,
            height: 2,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "Pixel buffer of 3 bytes does not fit a 2x2 BGRA image"
        );
    }
}
