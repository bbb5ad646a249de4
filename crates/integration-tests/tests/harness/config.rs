//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use recap_config::{Config, CorsConfig, ProviderConfig, ServerConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Minimal config with a test credential and a local listen address
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                provider: ProviderConfig {
                    api_key: Some(SecretString::from("gsk-test-key")),
                    ..ProviderConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Point the relay at a mock provider
    pub fn with_provider(mut self, base_url: &str) -> Self {
        self.config.provider.base_url = base_url.parse().expect("valid URL");
        self
    }

    /// Replace the credential, `None` to leave it unset
    pub fn with_api_key(mut self, key: Option<&str>) -> Self {
        self.config.provider.api_key = key.map(SecretString::from);
        self
    }

    /// Set the upstream timeout
    pub fn with_timeout(mut self, timeout: &str) -> Self {
        timeout.clone_into(&mut self.config.provider.timeout);
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = config;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
