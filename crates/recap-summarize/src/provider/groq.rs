//! Groq provider over its OpenAI-compatible chat completions API

use async_trait::async_trait;
use recap_config::ProviderConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::{Provider, UpstreamResponse};
use crate::error::SummarizeError;
use crate::protocol::ChatCompletionRequest;

/// Groq chat completions client
pub struct GroqProvider {
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
}

impl GroqProvider {
    /// Create from provider configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is invalid or the HTTP client
    /// cannot be built
    pub fn new(config: &ProviderConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout_duration()?)
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build provider HTTP client: {e}"))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key().cloned(),
        })
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/chat/completions")
    }
}

/// Classify a reqwest failure as timeout or transport error
fn upstream_error(error: &reqwest::Error) -> SummarizeError {
    if error.is_timeout() {
        SummarizeError::Timeout
    } else {
        SummarizeError::Upstream(error.to_string())
    }
}

#[async_trait]
impl Provider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn complete(&self, request: &ChatCompletionRequest) -> Result<UpstreamResponse, SummarizeError> {
        let mut builder = self.client.post(self.completions_url()).json(request);

        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(provider = self.name(), error = %e, "upstream request failed");
            upstream_error(&e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(provider = self.name(), %status, "upstream returned error status");
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::error!(provider = self.name(), error = %e, "failed to read upstream body");
            upstream_error(&e)
        })?;

        Ok(UpstreamResponse { status, body })
    }
}
