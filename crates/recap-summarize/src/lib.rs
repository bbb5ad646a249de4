//! Meeting-summary relay
//!
//! Accepts a transcript on `POST /summarize`, wraps it in a fixed
//! two-message chat-completion request, sends it to the provider and hands
//! the provider's JSON back to the caller byte for byte.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod error;
pub mod handler;
pub mod protocol;
pub mod provider;
pub mod state;

pub use error::{HttpError, SummarizeError};
pub use handler::summarize_router;
pub use protocol::{ChatCompletionRequest, ChatMessage, Role, SUMMARY_MODEL, SYSTEM_PROMPT, SummarizeRequest};
pub use provider::{Provider, UpstreamResponse};
pub use state::SummarizeState;
