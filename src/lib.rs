//! qr_page - QR code generate/decode page
//!
//! A retained-state page controller that takes text, encodes it into a QR
//! code image through a barcode codec, shows it, and decodes the stored
//! image back into text on request.
//!
//! ```no_run
//! use qr_page::{PageController, QrCodec, RecordingView};
//!
//! let mut page = PageController::with_defaults(QrCodec::new(), RecordingView::new());
//! page.generate_code("hello").unwrap();
//! let outcome = page.decode_code().unwrap();
//! assert_eq!(outcome.display_text(), "hello");
//! ```

#![warn(missing_docs)]

/// Bitmap adapter between pixel images and displayable bitmaps
pub mod bitmap;
/// Barcode codec trait, options and the QR implementation
pub mod codec;
/// Environment-backed page configuration
pub mod config;
/// Error types
pub mod error;
/// Logging setup
pub mod logging;
/// Core data structures (PixelImage, BarcodeFormat, DecodeResult)
pub mod models;
/// Page controller and UI surface trait
pub mod page;
/// Utility functions (grayscale, binarization)
pub mod utils;

pub use bitmap::Bitmap;
pub use codec::{BarcodeCodec, DecodingOptions, EncodingOptions, QrCodec};
pub use config::PageConfig;
pub use error::{CodecError, PageError};
pub use models::{BarcodeFormat, DecodeResult, ErrorCorrection, PixelImage};
pub use page::{DecodeOutcome, PageController, PageView, RecordingView};

/// Encode `text` as a QR code with `options` and read it straight back
///
/// Returns the decoded text, or `None` when the reader could not find the
/// code it was just given.
pub fn round_trip(text: &str, options: &EncodingOptions) -> Result<Option<String>, CodecError> {
    let codec = QrCodec::new();
    let image = codec.encode(text, BarcodeFormat::QrCode, options)?;
    let found = codec.decode(&image, &DecodingOptions::for_formats(&[BarcodeFormat::QrCode]))?;
    Ok(found.map(|r| r.text))
}
