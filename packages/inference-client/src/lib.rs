//! Pure REST client for the site generation inference endpoint
//!
//! A minimal client for the external inference process with no domain
//! logic beyond response-shape validation and asset decoding. The endpoint
//! accepts `{ prompt, max_tokens }` and is expected to answer with
//! `{ html?, css?, assets?: [{path, data_base64}] }`.
//!
//! # Example
//!
//! ```rust,ignore
//! use inference_client::InferenceClient;
//!
//! let client = InferenceClient::from_env()?;
//!
//! let draft = client.generate("Create a site for ...", 2000).await?;
//! if let Some(html) = draft.html {
//!     // provider-supplied markup
//! }
//! ```
//!
//! The client never retries and never fills in missing fields: a draft with
//! only `html` or only `css` is returned as-is for the caller to repair.

pub mod error;
pub mod types;

pub use error::{InferenceError, Result};
pub use types::{Asset, GenerateRequest, SiteDraft};

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

/// Default bound on a single inference request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the external inference endpoint.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http_client: Client,
    endpoint: String,
    timeout: Duration,
}

impl InferenceClient {
    /// Create a new client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create from environment variables.
    ///
    /// `INFERENCE_URL` is required; `INFERENCE_TIMEOUT_SECS` overrides the
    /// default request bound.
    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var("INFERENCE_URL")
            .map_err(|_| InferenceError::Config("INFERENCE_URL not set".into()))?;

        let mut client = Self::new(endpoint);
        if let Ok(secs) = std::env::var("INFERENCE_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                InferenceError::Config("INFERENCE_TIMEOUT_SECS must be a number".into())
            })?;
            client = client.with_timeout(Duration::from_secs(secs));
        }
        Ok(client)
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request generated site content for a prompt.
    ///
    /// Issues a single bounded request; there is no internal retry. Fails
    /// with [`InferenceError::Unavailable`] on transport failure or a
    /// non-success status, and [`InferenceError::MalformedResponse`] when
    /// the body cannot be parsed or carries neither `html` nor `css`.
    /// Malformed asset entries are skipped individually.
    pub async fn generate(&self, prompt: impl Into<String>, max_tokens: u32) -> Result<SiteDraft> {
        let request = GenerateRequest {
            prompt: prompt.into(),
            max_tokens,
        };
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Inference request failed");
                InferenceError::Unavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Inference endpoint error");
            return Err(InferenceError::Unavailable(format!(
                "inference endpoint returned {}: {}",
                status, error_text
            )));
        }

        let raw: types::GenerateResponseRaw = response
            .json()
            .await
            .map_err(|e| InferenceError::MalformedResponse(e.to_string()))?;

        if raw.html.is_none() && raw.css.is_none() {
            return Err(InferenceError::MalformedResponse(
                "response carries neither `html` nor `css`".into(),
            ));
        }

        let assets = types::decode_assets(raw.assets);

        debug!(
            duration_ms = start.elapsed().as_millis(),
            has_html = raw.html.is_some(),
            has_css = raw.css.is_some(),
            assets = assets.len(),
            "Inference completed"
        );

        Ok(SiteDraft {
            html: raw.html,
            css: raw.css,
            assets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = InferenceClient::new("http://localhost:8000/generate")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(client.endpoint(), "http://localhost:8000/generate");
        assert_eq!(client.timeout, Duration::from_secs(5));
    }
}
