use super::options::{EncodingOptions, MAX_IMAGE_SIDE, MAX_MARGIN};
use crate::error::{CodecError, CodecResult};
use crate::models::PixelImage;
use crate::models::pixel_image::BYTES_PER_PIXEL;
use qrcode::{Color, QrCode};
use rayon::prelude::*;

const DARK: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];
const LIGHT: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

/// Module grid of an encoded symbol (true = dark), without quiet zone
#[derive(Debug, Clone)]
pub(crate) struct ModuleGrid {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleGrid {
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.size + x]
    }
}

/// Encode `text` into a QR module grid
pub(crate) fn encode_modules(text: &str, options: &EncodingOptions) -> CodecResult<ModuleGrid> {
    if text.is_empty() {
        return Err(CodecError::EmptyContents);
    }
    let code = QrCode::with_error_correction_level(text.as_bytes(), options.error_correction.to_qrcode())
        .map_err(CodecError::Encode)?;
    let size = code.width();
    let modules = code
        .to_colors()
        .into_iter()
        .map(|c| c == Color::Dark)
        .collect();
    Ok(ModuleGrid { size, modules })
}

/// Render a module grid to a BGRA image
///
/// The symbol plus quiet zone is scaled by the largest whole factor that
/// fits the requested size, then centred. Leftover space is white.
pub(crate) fn render(grid: &ModuleGrid, options: &EncodingOptions) -> CodecResult<PixelImage> {
    let input = grid.size();
    let too_large = CodecError::ImageTooLarge {
        width: options.width,
        height: options.height,
    };
    let full = Some(options.margin)
        .filter(|&m| m <= MAX_MARGIN)
        .and_then(|m| m.checked_mul(2))
        .and_then(|m| m.checked_add(input))
        .filter(|&f| f <= MAX_IMAGE_SIDE)
        .ok_or(too_large)?;
    if options.width > MAX_IMAGE_SIDE || options.height > MAX_IMAGE_SIDE {
        return Err(CodecError::ImageTooLarge {
            width: options.width,
            height: options.height,
        });
    }
    let out_w = options.width.max(full);
    let out_h = options.height.max(full);
    let multiple = (out_w / full).min(out_h / full).max(1);
    let left = (out_w - input * multiple) / 2;
    let top = (out_h - input * multiple) / 2;

    let row_bytes = out_w * BYTES_PER_PIXEL;
    let len = row_bytes
        .checked_mul(out_h)
        .ok_or(CodecError::ImageTooLarge {
            width: out_w,
            height: out_h,
        })?;
    let mut pixels = vec![0u8; len];

    pixels
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            let module_y = (y >= top && y < top + input * multiple).then(|| (y - top) / multiple);
            for (x, px) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let dark = match module_y {
                    Some(my) if x >= left && x < left + input * multiple => {
                        grid.is_dark((x - left) / multiple, my)
                    }
                    _ => false,
                };
                px.copy_from_slice(if dark { &DARK } else { &LIGHT });
            }
        });

    PixelImage::new(out_w, out_h, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_rejected() {
        assert!(matches!(
            encode_modules("", &EncodingOptions::default()),
            Err(CodecError::EmptyContents)
        ));
    }

    #[test]
    fn test_version_one_grid() {
        let grid = encode_modules("hello", &EncodingOptions::default()).unwrap();
        assert_eq!(grid.size(), 21);
        // Top-left finder pattern corner is dark, its inner ring is light
        assert!(grid.is_dark(0, 0));
        assert!(!grid.is_dark(1, 1));
        assert!(grid.is_dark(2, 2));
    }

    #[test]
    fn test_natural_size_render() {
        let opts = EncodingOptions::default();
        let grid = encode_modules("hello", &opts).unwrap();
        let img = render(&grid, &opts).unwrap();
        assert_eq!(img.width(), 21 + 8);
        assert_eq!(img.height(), 21 + 8);
        // Quiet zone is white, symbol starts after four modules
        assert_eq!(img.pixel(3, 3), Some(LIGHT));
        assert_eq!(img.pixel(4, 4), Some(DARK));
    }

    #[test]
    fn test_scaled_render_is_centred() {
        let opts = EncodingOptions::default().with_size(200, 200);
        let grid = encode_modules("hello", &opts).unwrap();
        let img = render(&grid, &opts).unwrap();
        assert_eq!((img.width(), img.height()), (200, 200));
        // 200 / 29 = 6 pixels per module, 21 * 6 = 126, (200 - 126) / 2 = 37
        assert_eq!(img.pixel(36, 37), Some(LIGHT));
        assert_eq!(img.pixel(37, 37), Some(DARK));
        assert_eq!(img.pixel(37 + 6, 37 + 6), Some(LIGHT));
        assert_eq!(img.pixel(37 + 126, 37), Some(LIGHT));
    }

    #[test]
    fn test_zero_margin() {
        let opts = EncodingOptions::default().with_margin(0);
        let grid = encode_modules("hello", &opts).unwrap();
        let img = render(&grid, &opts).unwrap();
        assert_eq!(img.width(), 21);
        assert_eq!(img.pixel(0, 0), Some(DARK));
    }

    #[test]
    fn test_extreme_options_are_errors() {
        let grid = encode_modules("hi", &EncodingOptions::default()).unwrap();

        for opts in [
            EncodingOptions::default().with_margin(usize::MAX),
            EncodingOptions::default().with_margin(usize::MAX / 2 + 1),
            EncodingOptions::default().with_margin(MAX_MARGIN + 1),
            EncodingOptions::default().with_size(usize::MAX, 1),
            EncodingOptions::default().with_size(usize::MAX / 2, 1),
            EncodingOptions::default().with_size(1, MAX_IMAGE_SIDE + 1),
        ] {
            assert!(matches!(
                render(&grid, &opts),
                Err(CodecError::ImageTooLarge { .. })
            ));
        }
    }

    #[test]
    fn test_clamped_options_render() {
        let opts = EncodingOptions::default()
            .with_size(usize::MAX, 64)
            .with_margin(usize::MAX)
            .clamped();
        let grid = encode_modules("hi", &opts).unwrap();
        let img = render(&grid, &opts).unwrap();
        assert_eq!(img.width(), MAX_IMAGE_SIDE);
        // 21 modules plus a 64-module quiet zone on each side
        assert_eq!(img.height(), 21 + 2 * 64);
    }
}
