//! Axum route for `POST /summarize`

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use http::HeaderValue;
use http::header::CONTENT_TYPE;

use crate::error::{HttpError, SummarizeError};
use crate::protocol::SummarizeRequest;
use crate::state::SummarizeState;

/// Build the summarize router
pub fn summarize_router(state: SummarizeState) -> Router {
    Router::new()
        .route("/summarize", routing::post(summarize))
        .with_state(state)
}

/// Handle `POST /summarize`
///
/// The body is read as raw bytes so a missing or wrong `Content-Type`
/// does not reject an otherwise valid JSON payload.
async fn summarize(State(state): State<SummarizeState>, body: Bytes) -> Response {
    let request = match SummarizeRequest::from_json(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(error = %e, "rejecting malformed summarize request");
            return error_response(&SummarizeError::InvalidRequest(e.to_string()));
        }
    };

    match state.summarize(request).await {
        Ok(upstream) => (
            upstream.status,
            [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            upstream.body,
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

/// Convert an error into an OpenAI-style error envelope
fn error_response(error: &impl HttpError) -> Response {
    let body = serde_json::json!({
        "error": {
            "message": error.client_message(),
            "type": error.error_type(),
            "code": serde_json::Value::Null,
        }
    });

    (error.status_code(), Json(body)).into_response()
}
