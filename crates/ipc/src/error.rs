//! Error types for the UI message channel.

/// Errors raised while decoding UI messages or encoding core replies.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    #[error("Empty UI message")]
    EmptyMessage,

    #[error("Undecodable UI message: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode core replies: {0}")]
    Encode(#[source] serde_json::Error),
}
