use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

/// Groq's OpenAI-compatible API root
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Environment variable holding the provider credential
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

const DEFAULT_TIMEOUT: &str = "30s";

/// Upstream chat-completion provider configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Bearer credential; falls back to `GROQ_API_KEY` when omitted
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// API root that `/chat/completions` is appended to
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Bound on a single upstream call (e.g. "30s", "2m")
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

impl ProviderConfig {
    /// The credential, treating an empty string as unset
    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key.as_ref().filter(|key| !key.expose_secret().is_empty())
    }

    /// Parsed upstream timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout string is not a valid, non-zero duration
    pub fn timeout_duration(&self) -> anyhow::Result<Duration> {
        let timeout = duration_str::parse(&self.timeout)
            .map_err(|e| anyhow::anyhow!("invalid provider timeout '{}': {e}", self.timeout))?;

        if timeout.is_zero() {
            anyhow::bail!("provider timeout must be greater than zero");
        }

        Ok(timeout)
    }

    /// Read the credential from `GROQ_API_KEY` if none was configured
    pub(crate) fn fill_api_key_from_env(&mut self) {
        if self.api_key().is_none() {
            self.api_key = std::env::var(API_KEY_ENV)
                .ok()
                .filter(|key| !key.is_empty())
                .map(SecretString::from);
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("valid default URL")
}

fn default_timeout() -> String {
    DEFAULT_TIMEOUT.to_owned()
}
