//! Remote recognition service client

use scrawl_config::RecognitionConfig;
use scrawl_ipc::{EquationInput, RecognitionForm, RecognitionResponse};
use tracing::{debug, info, warn};

use crate::{RecognitionError, Recognizer};

/// Remote recognizer that POSTs form-encoded requests to an HTTP endpoint
#[derive(Clone)]
pub struct RemoteRecognizer {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

impl RemoteRecognizer {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &RecognitionConfig) -> Self {
        if !config.has_api_key() {
            warn!("No API key configured, the recognition service will likely reject requests");
        }
        Self::new(config.endpoint.clone(), config.api_key.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for RemoteRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteRecognizer")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl Recognizer for RemoteRecognizer {
    async fn recognize(
        &self,
        input: EquationInput,
    ) -> Result<RecognitionResponse, RecognitionError> {
        let form = RecognitionForm::new(self.api_key.as_str(), &input)?;
        let points: usize = input.components.iter().map(|c| c.point_count()).sum();
        info!(
            "Recognizing {} strokes ({} points) as {:?} via {}",
            input.components.len(),
            points,
            input.result_types,
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await
            .map_err(|e| RecognitionError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RecognitionError::Transport(e.to_string()))?;

        if !status.is_success() {
            warn!("Recognition failed with {}", status);
            return Err(RecognitionError::Server {
                status: status.to_string(),
                body,
            });
        }

        debug!("Recognition response: {} bytes", body.len());
        match RecognitionResponse::from_body(&body) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                warn!("Recognition response has an unexpected shape: {}", e);
                Err(RecognitionError::MalformedResponse {
                    detail: e.to_string(),
                    body,
                })
            }
        }
    }
}
