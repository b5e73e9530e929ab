//! Utility functions for pixel buffers
//!
//! - Grayscale conversion (BGRA to luminance)
//! - Binarization (Otsu's method and fixed threshold)

/// Luminance to black/white thresholding
pub mod binarization;
/// BGRA to luminance conversion
pub mod grayscale;
