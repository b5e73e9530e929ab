//! Luminance conversion for BGRA pixel buffers
//!
//! Y = 0.299*R + 0.587*G + 0.114*B, computed with integer arithmetic as
//! Y = (76*R + 150*G + 29*B) >> 8.

use rayon::prelude::*;

/// Coefficients for grayscale conversion: Y = (76*R + 150*G + 29*B) >> 8
const COEF_R: u32 = 76;
const COEF_G: u32 = 150;
const COEF_B: u32 = 29;

const STRIDE: usize = 4;

#[inline]
fn luma(px: &[u8]) -> u8 {
    let (b, g, r) = (px[0] as u32, px[1] as u32, px[2] as u32);
    ((COEF_R * r + COEF_G * g + COEF_B * b) >> 8).min(255) as u8
}

/// Convert BGRA image to grayscale (ignores alpha channel)
pub fn bgra_to_grayscale(bgra: &[u8], width: usize, height: usize) -> Vec<u8> {
    bgra.chunks_exact(STRIDE)
        .take(width * height)
        .map(luma)
        .collect()
}

/// Convert BGRA to grayscale using parallel processing
pub fn bgra_to_grayscale_parallel(bgra: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut gray = vec![0u8; width * height];
    if width == 0 {
        return gray;
    }

    gray.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let row_start = y * width * STRIDE;
        let src = &bgra[row_start..row_start + width * STRIDE];
        for (out, px) in row.iter_mut().zip(src.chunks_exact(STRIDE)) {
            *out = luma(px);
        }
    });

    gray
}
