//! QR decoding on top of `rqrr`.

use image::{DynamicImage, GenericImageView, GrayImage};

use super::DecodedPayload;
use crate::config::Region;
use crate::error::{ScanError, ScanResult};

/// Stateless QR decoder.
///
/// With a detection region set, only the centred part of each image is
/// searched; camera frames use this, uploads search the whole image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QrDecoder {
    region: Option<Region>,
}

impl QrDecoder {
    /// Decoder searching whole images.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoder searching a centred region of each image.
    pub fn with_region(region: Region) -> Self {
        Self {
            region: Some(region),
        }
    }

    /// Decode an already loaded image.
    pub fn decode_image(&self, image: &DynamicImage) -> ScanResult<DecodedPayload> {
        let luma = match self.region {
            Some(region) => {
                let (x, y, w, h) = centered_region(image.dimensions(), region);
                image.crop_imm(x, y, w, h).to_luma8()
            }
            None => image.to_luma8(),
        };
        decode_luma(&luma)
    }

    /// Decode an encoded image file (PNG, JPEG, WebP).
    pub fn decode_bytes(&self, bytes: &[u8]) -> ScanResult<DecodedPayload> {
        let image = image::load_from_memory(bytes)?;
        self.decode_image(&image)
    }
}

/// Bounds `(x, y, width, height)` of `region` centred in an image of
/// `dimensions`. Axes smaller than the region are kept whole.
pub fn centered_region(dimensions: (u32, u32), region: Region) -> (u32, u32, u32, u32) {
    let (width, height) = dimensions;
    let w = region.width.min(width);
    let h = region.height.min(height);
    ((width - w) / 2, (height - h) / 2, w, h)
}

fn decode_luma(luma: &GrayImage) -> ScanResult<DecodedPayload> {
    let (width, height) = luma.dimensions();
    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(width as usize, height as usize, |x, y| {
            luma.get_pixel(x as u32, y as u32).0[0]
        });

    for grid in prepared.detect_grids() {
        match grid.decode() {
            Ok((_meta, content)) => return Ok(DecodedPayload::new(content)),
            Err(e) => tracing::debug!("QR grid found but not decodable: {:?}", e),
        }
    }

    Err(ScanError::NoCodeFound)
}
