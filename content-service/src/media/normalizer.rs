//! Pre-upload normalization of images.
//!
//! Small uploads pass through untouched. Anything at or above
//! [`SIZE_THRESHOLD`] is decoded, flattened to RGB, narrowed to at most
//! [`MAX_WIDTH`] pixels and re-encoded as JPEG so it fits under the media
//! host's upload limit. Bytes that cannot be decoded are passed through and
//! the media host decides whether to accept them.

use std::io::Cursor;

use bytes::Bytes;
use image::{codecs::jpeg::JpegEncoder, imageops::FilterType, ColorType, DynamicImage, ImageResult};
use tracing::{debug, info, warn};

/// Uploads below this many bytes are never decoded.
pub const SIZE_THRESHOLD: usize = 5 * 1024 * 1024;
pub const MAX_WIDTH: u32 = 1920;
pub const JPEG_QUALITY: u8 = 85;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// The original upload, byte for byte.
    Unchanged(Bytes),
    /// A freshly encoded JPEG.
    Reencoded { bytes: Bytes, width: u32, height: u32 },
}

impl Normalized {
    pub fn into_bytes(self) -> Bytes {
        match self {
            Normalized::Unchanged(bytes) => bytes,
            Normalized::Reencoded { bytes, .. } => bytes,
        }
    }

    pub fn is_reencoded(&self) -> bool {
        matches!(self, Normalized::Reencoded { .. })
    }
}

/// Normalize one upload. Never fails: any decode or encode error degrades to
/// returning the input unchanged.
pub fn normalize(data: Bytes) -> Normalized {
    if data.len() < SIZE_THRESHOLD {
        debug!(size = data.len(), "Upload below normalization threshold");
        return Normalized::Unchanged(data);
    }

    match reencode(&data) {
        Ok((bytes, width, height)) => {
            info!(
                original_size = data.len(),
                normalized_size = bytes.len(),
                width,
                height,
                "Normalized oversized upload"
            );
            Normalized::Reencoded {
                bytes: Bytes::from(bytes),
                width,
                height,
            }
        }
        Err(e) => {
            warn!(size = data.len(), "Image normalization failed, uploading original: {}", e);
            Normalized::Unchanged(data)
        }
    }
}

/// [`normalize`] on the blocking thread pool, off the async workers.
pub async fn normalize_blocking(data: Bytes) -> Normalized {
    let original = data.clone();
    match tokio::task::spawn_blocking(move || normalize(data)).await {
        Ok(normalized) => normalized,
        Err(e) => {
            warn!("Image normalization task failed, uploading original: {}", e);
            Normalized::Unchanged(original)
        }
    }
}

/// Height that keeps the aspect ratio when `width` is scaled to `target_width`.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    let scaled = f64::from(height) * f64::from(target_width) / f64::from(width);
    (scaled.round() as u32).max(1)
}

fn reencode(data: &[u8]) -> ImageResult<(Vec<u8>, u32, u32)> {
    let image = image::load_from_memory(data)?;
    let image = flatten_for_jpeg(image);

    let image = if image.width() > MAX_WIDTH {
        let height = scaled_height(image.width(), image.height(), MAX_WIDTH);
        image.resize_exact(MAX_WIDTH, height, FilterType::Lanczos3)
    } else {
        image
    };

    let mut out = Cursor::new(Vec::with_capacity(data.len() / 4));
    image.write_with_encoder(JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY))?;

    Ok((out.into_inner(), image.width(), image.height()))
}

/// JPEG only carries 8-bit gray or RGB. Alpha is discarded, not composited.
fn flatten_for_jpeg(image: DynamicImage) -> DynamicImage {
    match image.color() {
        ColorType::Rgb8 | ColorType::L8 => image,
        other => {
            debug!(color = ?other, "Converting upload to RGB before JPEG encoding");
            DynamicImage::ImageRgb8(image.to_rgb8())
        }
    }
}
