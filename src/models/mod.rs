/// Text and metadata recovered by the reader
pub mod decode_result;
/// Barcode symbologies and QR error correction levels
pub mod format;
/// BGRA pixel buffer exchanged with the codec
pub mod pixel_image;

pub use decode_result::DecodeResult;
pub use format::{BarcodeFormat, ErrorCorrection};
pub use pixel_image::PixelImage;
