use axum::response::IntoResponse;
use http::StatusCode;

/// Liveness probe; the relay has no dependencies worth checking locally
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
