//! Shared relay state

use std::sync::Arc;

use recap_config::ProviderConfig;
use serde::de::IgnoredAny;

use crate::error::SummarizeError;
use crate::protocol::{ChatCompletionRequest, SummarizeRequest};
use crate::provider::groq::GroqProvider;
use crate::provider::{Provider, UpstreamResponse};

/// Shared state for the summarize handler
#[derive(Clone)]
pub struct SummarizeState {
    provider: Arc<dyn Provider>,
}

impl SummarizeState {
    /// Wrap an existing provider
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    /// Build state backed by the configured Groq endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the provider client cannot be constructed
    pub fn from_config(config: &ProviderConfig) -> anyhow::Result<Self> {
        let provider = GroqProvider::new(config)?;

        tracing::info!(
            provider = provider.name(),
            base_url = %config.base_url,
            timeout = %config.timeout,
            "summarization provider configured"
        );

        if config.api_key().is_none() {
            tracing::warn!(
                env = recap_config::API_KEY_ENV,
                "no provider credential configured, upstream calls will be sent unauthenticated"
            );
        }

        Ok(Self::new(Arc::new(provider)))
    }

    /// Forward a transcript and return the provider's answer untouched
    ///
    /// The body is only checked for being JSON; its status, including
    /// provider error statuses, is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider is unreachable, times out, or
    /// answers with a non-JSON body
    pub async fn summarize(&self, request: SummarizeRequest) -> Result<UpstreamResponse, SummarizeError> {
        let transcript_len = request.transcript.len();
        let payload = ChatCompletionRequest::summarize(request.transcript);

        tracing::debug!(provider = self.provider.name(), transcript_len, "forwarding transcript");

        let response = self.provider.complete(&payload).await?;

        if let Err(e) = serde_json::from_slice::<IgnoredAny>(&response.body) {
            tracing::warn!(
                provider = self.provider.name(),
                status = %response.status,
                error = %e,
                "upstream body is not JSON"
            );
            return Err(SummarizeError::InvalidUpstreamResponse(e.to_string()));
        }

        tracing::debug!(
            provider = self.provider.name(),
            status = %response.status,
            body_len = response.body.len(),
            "relaying upstream response"
        );

        Ok(response)
    }
}
