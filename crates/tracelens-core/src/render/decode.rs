use crate::error::{Result, TraceLensError};

use super::types::{ImageFormat, RenderedImage};

/// Displayable bitmap: tightly packed, unpremultiplied RGBA8 rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Decode a renderer payload and check it against its declared size.
pub fn decode_rendered(rendered: &RenderedImage) -> Result<DecodedImage> {
    if rendered.data.is_empty() {
        return Err(TraceLensError::UnsupportedPayload("empty image data".into()));
    }
    let format = match rendered.format {
        ImageFormat::Png => image::ImageFormat::Png,
    };
    let rgba = image::load_from_memory_with_format(&rendered.data, format)?.to_rgba8();
    let (actual_width, actual_height) = rgba.dimensions();
    if actual_width != rendered.width || actual_height != rendered.height {
        return Err(TraceLensError::DimensionMismatch {
            width: rendered.width,
            height: rendered.height,
            actual_width,
            actual_height,
        });
    }
    Ok(DecodedImage {
        width: actual_width,
        height: actual_height,
        rgba: rgba.into_raw(),
    })
}
