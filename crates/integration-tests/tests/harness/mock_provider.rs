//! Mock chat-completion provider for integration tests
//!
//! Serves `POST /openai/v1/chat/completions`, records every request it
//! receives and answers with a configurable canned reply.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Router, routing};
use tokio_util::sync::CancellationToken;

/// A request as the provider saw it
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

/// Canned provider answer
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    /// 200 with a JSON body
    pub fn json(body: &str) -> Self {
        Self::status(StatusCode::OK, body)
    }

    /// Given status with a JSON body
    pub fn status(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_owned(),
            delay: Duration::ZERO,
        }
    }

    /// Given status with a non-JSON body
    pub fn html(status: StatusCode, body: &str) -> Self {
        Self {
            content_type: "text/html",
            ..Self::status(status, body)
        }
    }

    /// Hold the response back before answering
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

struct MockState {
    reply: Reply,
    requests: Mutex<Vec<CapturedRequest>>,
}

/// Mock provider backend
pub struct MockProvider {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockProvider {
    /// Start a mock that always answers with `reply`
    pub async fn start(reply: Reply) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            reply,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/openai/v1/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL mirroring Groq's `/openai/v1` prefix
    pub fn base_url(&self) -> String {
        format!("http://{}/openai/v1", self.addr)
    }

    /// All requests received so far
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().expect("mock state poisoned").clone()
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_chat_completions(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> impl IntoResponse {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };

    let captured = CapturedRequest {
        authorization: header_text(header::AUTHORIZATION),
        content_type: header_text(header::CONTENT_TYPE),
        body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
    };
    state.requests.lock().expect("mock state poisoned").push(captured);

    let reply = state.reply.clone();
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    (reply.status, [(header::CONTENT_TYPE, reply.content_type)], reply.body)
}
