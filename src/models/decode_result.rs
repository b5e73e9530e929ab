use super::BarcodeFormat;

/// Text recovered from a barcode image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    /// Decoded content
    pub text: String,
    /// Symbology the content was read from
    pub format: BarcodeFormat,
    /// QR version (1-40) reported by the reader
    pub version: usize,
}

impl DecodeResult {
    /// Create a new result for a QR code read
    pub fn qr(text: String, version: usize) -> Self {
        Self {
            text,
            format: BarcodeFormat::QrCode,
            version,
        }
    }
}

