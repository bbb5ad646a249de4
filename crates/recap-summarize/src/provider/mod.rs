//! Provider trait and the Groq backend

pub mod groq;

use async_trait::async_trait;
use axum::body::Bytes;
use http::StatusCode;

use crate::error::SummarizeError;
use crate::protocol::ChatCompletionRequest;

/// Raw answer from a provider, before any JSON check
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// A chat-completion backend
#[async_trait]
pub trait Provider: Send + Sync {
    /// Human-readable provider name
    fn name(&self) -> &str;

    /// Send one completion request and return whatever came back
    ///
    /// Non-success statuses are returned as `Ok`; only transport failures
    /// and timeouts are errors.
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<UpstreamResponse, SummarizeError>;
}
