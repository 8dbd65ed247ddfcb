//! Error types for the parameter model and settings stores.

use std::path::PathBuf;

/// Errors raised while parsing or persisting crosshair settings.
///
/// Normalization never surfaces these; they come from strict parsers and
/// store I/O, and callers at the boundary decide whether to fall back.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown crosshair style: {0:?}")]
    UnknownStyle(String),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Settings store I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt settings record: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Settings store unavailable: {0}")]
    Unavailable(String),
}
