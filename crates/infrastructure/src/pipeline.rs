//! Response pipeline with the invalidation hook point.
//!
//! Every API call made through the pipeline has its response reduced
//! to an authorization outcome by the strict extraction function and
//! delivered to the observer registered at construction time. This is
//! the single choke point for invalidation detection: callers never
//! inspect response shapes for authorization signals themselves.

use std::sync::Arc;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use url::Url;
use warden_application::ports::ResponseObserver;
use warden_domain::AuthOutcome;

use crate::credential::BearerSlot;

/// Errors surfaced by the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The request never produced an inbound response.
    #[error("transport error: {0}")]
    Transport(String),
}

/// An inbound API response after the hook has run.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Transport status code.
    pub status: u16,
    /// Parsed JSON payload, when the body was JSON.
    pub payload: Option<Value>,
}

impl ApiResponse {
    /// Returns the payload status discriminator, when present.
    #[must_use]
    pub fn payload_code(&self) -> Option<i64> {
        self.payload
            .as_ref()
            .and_then(|payload| payload.get("code"))
            .and_then(Value::as_i64)
    }

    /// Returns true for a 2xx transport status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// API client wrapper with one response hook, registered once.
#[derive(Clone)]
pub struct ResponsePipeline {
    client: Client,
    bearer: BearerSlot,
    observer: Arc<dyn ResponseObserver>,
}

impl ResponsePipeline {
    /// Creates a pipeline delivering every response outcome to
    /// `observer`.
    pub fn new(client: Client, bearer: BearerSlot, observer: Arc<dyn ResponseObserver>) -> Self {
        Self {
            client,
            bearer,
            observer,
        }
    }

    /// Creates a pipeline over a default HTTP client.
    pub fn with_default_client(bearer: BearerSlot, observer: Arc<dyn ResponseObserver>) -> Self {
        Self::new(Client::new(), bearer, observer)
    }

    /// Executes a GET request through the hook.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Transport`] when no response arrived.
    pub async fn get(&self, url: Url) -> Result<ApiResponse, PipelineError> {
        self.execute(self.client.get(url)).await
    }

    /// Executes a POST request with a JSON body through the hook.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Transport`] when no response arrived.
    pub async fn post_json<B: Serialize + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<ApiResponse, PipelineError> {
        self.execute(self.client.post(url).json(body)).await
    }

    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse, PipelineError> {
        let response = self
            .bearer
            .apply(request)
            .await
            .send()
            .await
            .map_err(|e| PipelineError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let payload = response
            .text()
            .await
            .ok()
            .and_then(|text| serde_json::from_str::<Value>(&text).ok());

        let response = ApiResponse { status, payload };
        let outcome = AuthOutcome::extract(status, response.payload_code());
        self.observer.on_response(outcome).await;

        Ok(response)
    }
}

impl std::fmt::Debug for ResponsePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponsePipeline").finish_non_exhaustive()
    }
}
