use thiserror::Error;

use crate::render::renderer::RendererError;

#[derive(Error, Debug)]
pub enum TraceLensError {
    #[error("Render failed: {0}")]
    Render(#[from] RendererError),

    #[error("Image decode error: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("Unsupported image payload: {0}")]
    UnsupportedPayload(String),

    #[error("Rendered image is {actual_width}x{actual_height}, header says {width}x{height}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("Invalid viewer config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid viewer config: {0}")]
    ConfigValue(String),
}

pub type Result<T> = std::result::Result<T, TraceLensError>;
