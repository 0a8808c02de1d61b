//! Error types for wire encoding and decoding.

/// Errors that can occur while encoding requests or decoding responses.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    #[error("Failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Unknown result type: {0}")]
    UnknownResultType(String),
}
