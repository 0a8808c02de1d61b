//! Equation recognition for scrawl
//!
//! Sends the active strokes to a remote recognition service. One request
//! per call: no retry, no timeout, no backoff.

mod remote;
mod sequencer;

pub use remote::RemoteRecognizer;
pub use sequencer::{RequestId, RequestSequencer};

use std::future::Future;

use scrawl_ipc::{EquationInput, IpcError, RecognitionResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("Failed to encode request: {0}")]
    Encode(#[from] IpcError),

    #[error("Connection failed: {0}")]
    Transport(String),

    #[error("Server returned {status}: {body}")]
    Server { status: String, body: String },

    #[error("Invalid response: {detail}")]
    MalformedResponse { detail: String, body: String },
}

impl RecognitionError {
    /// Status text and raw body, as shown to the user
    pub fn status_and_body(&self) -> (String, String) {
        match self {
            Self::Encode(e) => ("encode error".to_string(), e.to_string()),
            Self::Transport(detail) => ("error".to_string(), detail.clone()),
            Self::Server { status, body } => (status.clone(), body.clone()),
            Self::MalformedResponse { body, .. } => ("invalid response".to_string(), body.clone()),
        }
    }
}

/// Trait for recognition backends
///
/// The returned future is `Send` so a session can spawn it and keep
/// handling input while the exchange is in flight.
pub trait Recognizer: Send + Sync {
    /// Recognize the given strokes
    fn recognize(
        &self,
        input: EquationInput,
    ) -> impl Future<Output = Result<RecognitionResponse, RecognitionError>> + Send;
}
