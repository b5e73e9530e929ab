//! Page configuration from the environment
//!
//! Every knob has a default; unset or unparsable variables fall back to it.
//!
//! | Variable             | Default |
//! |----------------------|---------|
//! | `QR_PAGE_WIDTH`      | 200     |
//! | `QR_PAGE_HEIGHT`     | 200     |
//! | `QR_PAGE_MARGIN`     | 4       |
//! | `QR_PAGE_EC_LEVEL`   | L       |
//! | `QR_PAGE_TRY_HARDER` | 1       |

use crate::codec::options::{
    DEFAULT_MARGIN, DecodingOptions, EncodingOptions, MAX_IMAGE_SIDE, MAX_MARGIN,
};
use crate::models::{BarcodeFormat, ErrorCorrection};
use std::str::FromStr;

const DEFAULT_SIZE: usize = 200;

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

/// Settings for the generate, decode and scan actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Generated image width in pixels
    pub width: usize,
    /// Generated image height in pixels
    pub height: usize,
    /// Quiet zone in modules
    pub margin: usize,
    /// Error correction level for generated codes
    pub error_correction: ErrorCorrection,
    /// Extra reading passes when scanning pictures
    pub try_harder: bool,
}

impl PageConfig {
    /// Read the configuration from `QR_PAGE_*` variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            width: parse_env("QR_PAGE_WIDTH", defaults.width),
            height: parse_env("QR_PAGE_HEIGHT", defaults.height),
            margin: parse_env("QR_PAGE_MARGIN", defaults.margin),
            error_correction: parse_env("QR_PAGE_EC_LEVEL", defaults.error_correction),
            try_harder: parse_env_bool_u8("QR_PAGE_TRY_HARDER", defaults.try_harder),
        }
    }

    /// Writer settings for the generate action
    ///
    /// Size and margin are clamped to the writer's limits whichever way they
    /// were set (environment, flags or code).
    pub fn encoding_options(&self) -> EncodingOptions {
        EncodingOptions::default()
            .with_size(self.width, self.height)
            .with_margin(self.margin)
            .with_error_correction(self.error_correction)
            .clamped()
    }

    /// Reader settings for the decode action: QR only, single pass
    pub fn decode_options(&self) -> DecodingOptions {
        DecodingOptions::for_formats(&[BarcodeFormat::QrCode])
    }

    /// Reader settings for scanning arbitrary pictures
    pub fn scan_options(&self) -> DecodingOptions {
        DecodingOptions::for_formats(&[BarcodeFormat::QrCode])
            .with_try_harder(self.try_harder)
            .with_auto_rotate(true)
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            margin: DEFAULT_MARGIN,
            error_correction: ErrorCorrection::L,
            try_harder: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let config = PageConfig::default();
        let enc = config.encoding_options();
        assert_eq!((enc.width, enc.height, enc.margin), (200, 200, 4));
        assert_eq!(enc.error_correction, ErrorCorrection::L);

        let dec = config.decode_options();
        assert_eq!(dec.possible_formats, vec![BarcodeFormat::QrCode]);
        assert!(!dec.try_harder && !dec.auto_rotate);

        let scan = config.scan_options();
        assert!(scan.try_harder && scan.auto_rotate);
    }

    #[test]
    fn test_oversized_settings_are_clamped() {
        let config = PageConfig {
            width: usize::MAX,
            height: usize::MAX / 2,
            margin: usize::MAX,
            ..PageConfig::default()
        };
        let enc = config.encoding_options();
        assert_eq!((enc.width, enc.height), (MAX_IMAGE_SIDE, MAX_IMAGE_SIDE));
        assert_eq!(enc.margin, MAX_MARGIN);
    }

    #[test]
    fn test_unparsable_env_falls_back() {
        // Variable names unique to this test so parallel tests don't race
        unsafe {
            std::env::set_var("QR_PAGE_TEST_BAD_NUMBER", "wide");
            std::env::set_var("QR_PAGE_TEST_GOOD_NUMBER", " 321 ");
        }
        assert_eq!(parse_env("QR_PAGE_TEST_BAD_NUMBER", 7usize), 7);
        assert_eq!(parse_env("QR_PAGE_TEST_GOOD_NUMBER", 7usize), 321);
        assert_eq!(parse_env("QR_PAGE_TEST_UNSET", ErrorCorrection::M), ErrorCorrection::M);
        assert!(parse_env_bool_u8("QR_PAGE_TEST_UNSET", true));
    }
}
