//! Command line error type

use std::path::PathBuf;

use crosshair_config::ConfigError;
use crosshair_frontend_core::FrontendError;
use crosshair_render::RenderError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to render preview: {0}")]
    Render(#[from] RenderError),

    #[error(transparent)]
    Frontend(#[from] FrontendError),

    #[error("{code}: {message}")]
    Rejected { code: String, message: String },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
