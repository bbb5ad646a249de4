use http::StatusCode;
use thiserror::Error;

/// Domain errors that know how they surface over HTTP
///
/// The handler turns these into the `{"error": {...}}` envelope, so error
/// types stay free of axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `invalid_request_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

/// Errors the relay originates itself
///
/// Provider-side failures that arrive as a JSON body are not errors here;
/// they are forwarded like any other response.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Inbound body was not a JSON object with a string transcript
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The provider could not be reached
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The provider did not answer within the configured timeout
    #[error("upstream request timed out")]
    Timeout,

    /// The provider answered with a body that is not JSON
    #[error("invalid upstream response: {0}")]
    InvalidUpstreamResponse(String),
}

impl HttpError for SummarizeError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) | Self::InvalidUpstreamResponse(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::Upstream(_) => "upstream_error",
            Self::Timeout => "upstream_timeout",
            Self::InvalidUpstreamResponse(_) => "invalid_upstream_response",
        }
    }

    /// Transport details stay in the logs
    fn client_message(&self) -> String {
        match self {
            Self::Upstream(_) => "the summarization provider could not be reached".to_owned(),
            Self::InvalidUpstreamResponse(_) => "the summarization provider returned a non-JSON response".to_owned(),
            other => other.to_string(),
        }
    }
}
