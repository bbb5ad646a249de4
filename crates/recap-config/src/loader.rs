use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Expands `{{ env.VAR }}` placeholders, deserializes, falls back to
    /// `GROQ_API_KEY` for a missing credential, then validates.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a placeholder cannot be
    /// expanded, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let mut config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.provider.fill_api_key_from_env();
        config.validate()?;

        Ok(config)
    }

    /// Build configuration from defaults and the process environment
    ///
    /// Used when no config file is given. Only the credential is read
    /// from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration fails validation
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        config.provider.fill_api_key_from_env();
        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error on an unparseable timeout, a health path without a
    /// leading slash, or an invalid CORS origin
    pub fn validate(&self) -> anyhow::Result<()> {
        self.provider.timeout_duration()?;

        if self.server.health.enabled && !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        self.server.cors.validate()?;

        Ok(())
    }
}
