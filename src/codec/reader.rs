use super::options::DecodingOptions;
use crate::models::{DecodeResult, PixelImage};
use crate::utils::binarization::otsu_binarize;
use image::GrayImage;
use image::imageops::{rotate90, rotate180, rotate270};
use tracing::{debug, trace};

/// A luminance plane handed to the grid detector
struct LumaPlane {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl LumaPlane {
    fn from_image(image: &PixelImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            data: image.to_luminance(),
        }
    }

    fn rotated(&self, quarter_turns: u8) -> Option<Self> {
        let img = GrayImage::from_raw(self.width as u32, self.height as u32, self.data.clone())?;
        let out = match quarter_turns % 4 {
            1 => rotate90(&img),
            2 => rotate180(&img),
            3 => rotate270(&img),
            _ => img,
        };
        let (w, h) = out.dimensions();
        Some(Self {
            width: w as usize,
            height: h as usize,
            data: out.into_raw(),
        })
    }

    fn binarized(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: otsu_binarize(&self.data),
        }
    }
}

/// Read the first QR code found in `image`
pub(crate) fn read_qr(image: &PixelImage, options: &DecodingOptions) -> Option<DecodeResult> {
    let plane = LumaPlane::from_image(image);
    if let Some(found) = read_plane(&plane, options) {
        return Some(found);
    }

    if options.auto_rotate {
        for turns in 1..=3u8 {
            let Some(rotated) = plane.rotated(turns) else {
                continue;
            };
            if let Some(found) = read_plane(&rotated, options) {
                debug!(quarter_turns = turns, "QR code read after rotation");
                return Some(found);
            }
        }
    }

    None
}

fn read_plane(plane: &LumaPlane, options: &DecodingOptions) -> Option<DecodeResult> {
    if let Some(found) = detect_and_decode(plane) {
        return Some(found);
    }
    if options.try_harder {
        trace!("plain pass found nothing, retrying on binarized image");
        return detect_and_decode(&plane.binarized());
    }
    None
}

fn detect_and_decode(plane: &LumaPlane) -> Option<DecodeResult> {
    let width = plane.width;
    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(plane.width, plane.height, |x, y| {
            plane.data[y * width + x]
        });
    let grids = prepared.detect_grids();
    trace!(grids = grids.len(), "grid detection finished");

    for grid in grids {
        match grid.decode() {
            Ok((meta, content)) => return Some(DecodeResult::qr(content, meta.version.0)),
            Err(err) => debug!(?err, "grid found but could not be decoded"),
        }
    }
    None
}
