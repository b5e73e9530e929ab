use crate::models::{BarcodeFormat, ErrorCorrection};

/// Default quiet zone around a QR symbol, in modules
pub const DEFAULT_MARGIN: usize = 4;
/// Largest quiet zone the writer accepts, in modules
pub const MAX_MARGIN: usize = 64;
/// Largest output side the writer renders, in pixels
pub const MAX_IMAGE_SIDE: usize = 8192;

/// Writer settings
///
/// `width` and `height` are the requested output size in pixels. Zero (or
/// anything smaller than the symbol) means "natural size", one pixel per
/// module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingOptions {
    /// Requested output width in pixels
    pub width: usize,
    /// Requested output height in pixels
    pub height: usize,
    /// Quiet zone in modules
    pub margin: usize,
    /// Error correction level for the symbol
    pub error_correction: ErrorCorrection,
}

impl EncodingOptions {
    /// Set the requested output size
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the quiet zone in modules
    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    /// Copy of these options with size and margin pulled into the writer's limits
    pub fn clamped(mut self) -> Self {
        self.width = self.width.min(MAX_IMAGE_SIDE);
        self.height = self.height.min(MAX_IMAGE_SIDE);
        self.margin = self.margin.min(MAX_MARGIN);
        self
    }

    /// Set the error correction level
    pub fn with_error_correction(mut self, level: ErrorCorrection) -> Self {
        self.error_correction = level;
        self
    }
}

impl Default for EncodingOptions {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            margin: DEFAULT_MARGIN,
            error_correction: ErrorCorrection::default(),
        }
    }
}

/// Reader settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodingOptions {
    /// Symbologies the reader may report; anything else is ignored
    pub possible_formats: Vec<BarcodeFormat>,
    /// Spend extra passes on hard images
    pub try_harder: bool,
    /// Retry with the image rotated by 90, 180 and 270 degrees
    pub auto_rotate: bool,
}

impl DecodingOptions {
    /// Options restricted to the given formats
    pub fn for_formats(formats: &[BarcodeFormat]) -> Self {
        Self {
            possible_formats: formats.to_vec(),
            ..Self::default()
        }
    }

    /// Enable or disable the extra reading passes
    pub fn with_try_harder(mut self, try_harder: bool) -> Self {
        self.try_harder = try_harder;
        self
    }

    /// Enable or disable rotated retries
    pub fn with_auto_rotate(mut self, auto_rotate: bool) -> Self {
        self.auto_rotate = auto_rotate;
        self
    }

    /// Whether `format` may be reported
    pub fn allows(&self, format: BarcodeFormat) -> bool {
        self.possible_formats.contains(&format)
    }
}

impl Default for DecodingOptions {
    fn default() -> Self {
        Self {
            possible_formats: BarcodeFormat::ALL.to_vec(),
            try_harder: false,
            auto_rotate: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_defaults() {
        let opts = EncodingOptions::default();
        assert_eq!((opts.width, opts.height), (0, 0));
        assert_eq!(opts.margin, DEFAULT_MARGIN);
        assert_eq!(opts.error_correction, ErrorCorrection::L);
    }

    #[test]
    fn test_clamped_limits() {
        let opts = EncodingOptions::default()
            .with_size(usize::MAX, 10)
            .with_margin(usize::MAX)
            .clamped();
        assert_eq!((opts.width, opts.height), (MAX_IMAGE_SIDE, 10));
        assert_eq!(opts.margin, MAX_MARGIN);
    }

    #[test]
    fn test_decoding_formats() {
        let opts = DecodingOptions::for_formats(&[BarcodeFormat::QrCode]);
        assert!(opts.allows(BarcodeFormat::QrCode));
        assert!(!opts.allows(BarcodeFormat::Aztec));
        assert!(!opts.try_harder);

        let all = DecodingOptions::default().with_try_harder(true);
        assert!(all.allows(BarcodeFormat::Pdf417));
        assert!(all.try_harder);
    }
}
