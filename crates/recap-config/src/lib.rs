#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod provider;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use cors::*;
pub use health::*;
pub use provider::*;
pub use server::*;
pub use telemetry::*;

/// Top-level Recap configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Listener, health and CORS settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream chat-completion provider
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Log output settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
