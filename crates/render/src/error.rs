//! Error types for preview export.

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[cfg(feature = "png")]
    #[error("Failed to encode preview: {0}")]
    Image(#[from] image::ImageError),
}
