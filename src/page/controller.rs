use super::view::PageView;
use crate::bitmap;
use crate::codec::{BarcodeCodec, DecodingOptions, EncodingOptions};
use crate::config::PageConfig;
use crate::error::{PageError, Result};
use crate::models::{BarcodeFormat, DecodeResult, PixelImage};
use tracing::{debug, info, warn};

/// Notice shown when Generate is pressed with an empty input
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text.";
/// Decoded-text shown when Decode is pressed before any Generate
pub const NO_IMAGE_MESSAGE: &str = "Please generate a barcode first.";
/// Decoded-text shown when the reader recognizes nothing
pub const NOT_FOUND_MESSAGE: &str = "No barcode found";

/// How a decode or scan action ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// A barcode was read
    Decoded(DecodeResult),
    /// Nothing has been generated yet; the codec was not called
    NoImage,
    /// The image holds no recognizable barcode
    NotFound,
}

impl DecodeOutcome {
    /// The text shown in the decoded-text region for this outcome
    pub fn display_text(&self) -> &str {
        match self {
            DecodeOutcome::Decoded(result) => &result.text,
            DecodeOutcome::NoImage => NO_IMAGE_MESSAGE,
            DecodeOutcome::NotFound => NOT_FOUND_MESSAGE,
        }
    }
}

/// Retained-state controller behind the generate/decode page
///
/// Owns the last generated image and nothing else. Every action runs to
/// completion on the caller's thread.
pub struct PageController<C, V> {
    codec: C,
    view: V,
    encoding: EncodingOptions,
    decoding: DecodingOptions,
    scanning: DecodingOptions,
    last_image: Option<PixelImage>,
}

impl<C: BarcodeCodec, V: PageView> PageController<C, V> {
    /// Create a controller with settings taken from `config`
    pub fn new(codec: C, view: V, config: &PageConfig) -> Self {
        Self {
            codec,
            view,
            encoding: config.encoding_options(),
            decoding: config.decode_options(),
            scanning: config.scan_options(),
            last_image: None,
        }
    }

    /// Create a controller with default settings
    pub fn with_defaults(codec: C, view: V) -> Self {
        Self::new(codec, view, &PageConfig::default())
    }

    /// Generate action: encode `input` as a QR code and display it
    ///
    /// An empty input shows a notice, restores input focus and returns
    /// [`PageError::EmptyInput`] without touching the stored image. Codec
    /// failures are returned as-is and also leave the stored image alone.
    pub fn generate_code(&mut self, input: &str) -> Result<()> {
        if input.is_empty() {
            debug!("generate rejected: empty input");
            self.view.show_notice(EMPTY_INPUT_MESSAGE);
            self.view.focus_input();
            return Err(PageError::EmptyInput);
        }

        let image = self
            .codec
            .encode(input, BarcodeFormat::QrCode, &self.encoding)
            .inspect_err(|e| warn!("encode failed: {e}"))?;
        let bitmap = bitmap::to_bitmap(&image);
        info!(
            chars = input.chars().count(),
            width = image.width(),
            height = image.height(),
            "generated QR code"
        );

        self.last_image = Some(image);
        self.view.show_image(&bitmap);
        Ok(())
    }

    /// Decode action: read the stored image back into text
    pub fn decode_code(&mut self) -> Result<DecodeOutcome> {
        let Some(image) = self.last_image.as_ref() else {
            debug!("decode requested before any image was generated");
            self.view.show_decoded_text(NO_IMAGE_MESSAGE);
            return Ok(DecodeOutcome::NoImage);
        };

        let outcome = match self
            .codec
            .decode(image, &self.decoding)
            .inspect_err(|e| warn!("decode failed: {e}"))?
        {
            Some(result) => {
                info!(format = %result.format, version = result.version, "decoded stored image");
                DecodeOutcome::Decoded(result)
            }
            None => DecodeOutcome::NotFound,
        };

        self.view.show_decoded_text(outcome.display_text());
        Ok(outcome)
    }

    /// Scan action: look for a barcode in an arbitrary picture
    ///
    /// Uses the more thorough scan settings. The picture is displayed only
    /// when something was read. The stored image is never replaced.
    pub fn scan_image(&mut self, image: &PixelImage) -> Result<DecodeOutcome> {
        let outcome = match self
            .codec
            .decode(image, &self.scanning)
            .inspect_err(|e| warn!("scan failed: {e}"))?
        {
            Some(result) => {
                info!(format = %result.format, version = result.version, "scanned picture");
                self.view.show_image(&bitmap::to_bitmap(image));
                DecodeOutcome::Decoded(result)
            }
            None => DecodeOutcome::NotFound,
        };

        self.view.show_decoded_text(outcome.display_text());
        Ok(outcome)
    }

    /// The image produced by the last successful generate, if any
    pub fn last_image(&self) -> Option<&PixelImage> {
        self.last_image.as_ref()
    }

    /// The codec behind this page
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// The UI surface
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the UI surface
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Tear the controller down into its codec and view
    pub fn into_parts(self) -> (C, V) {
        (self.codec, self.view)
    }
}
