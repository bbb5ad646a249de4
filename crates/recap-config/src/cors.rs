use std::time::Duration;

use serde::Deserialize;

/// CORS configuration
///
/// Defaults to the permissive policy browsers need for a static frontend
/// hosted on another origin: any origin, method and header, credentials
/// allowed.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Attach the CORS layer at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Allowed origins (wildcard "*" or explicit list)
    #[serde(default)]
    pub origins: AnyOrArray,
    /// Allowed HTTP methods (wildcard "*" or explicit list)
    #[serde(default)]
    pub methods: AnyOrArray,
    /// Allowed request headers (wildcard "*" or explicit list)
    #[serde(default)]
    pub headers: AnyOrArray,
    /// Response headers exposed to the browser
    #[serde(default)]
    pub expose_headers: Vec<String>,
    /// Allow credentials
    #[serde(default = "default_true")]
    pub credentials: bool,
    /// Preflight cache lifetime in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            origins: AnyOrArray::Any,
            methods: AnyOrArray::Any,
            headers: AnyOrArray::Any,
            expose_headers: Vec::new(),
            credentials: true,
            max_age: None,
        }
    }
}

impl CorsConfig {
    /// Preflight max age as a `Duration`
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }

    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        if let AnyOrArray::List(origins) = &self.origins {
            for origin in origins {
                http::HeaderValue::from_str(origin)
                    .map_err(|e| anyhow::anyhow!("invalid CORS origin '{origin}': {e}"))?;
            }
        }

        if let AnyOrArray::List(methods) = &self.methods {
            for method in methods {
                http::Method::from_bytes(method.as_bytes())
                    .map_err(|e| anyhow::anyhow!("invalid CORS method '{method}': {e}"))?;
            }
        }

        let headers = match &self.headers {
            AnyOrArray::List(headers) => headers.as_slice(),
            AnyOrArray::Any => &[],
        };
        for header in headers.iter().chain(&self.expose_headers) {
            http::HeaderName::from_bytes(header.as_bytes())
                .map_err(|e| anyhow::anyhow!("invalid CORS header '{header}': {e}"))?;
        }

        Ok(())
    }
}

/// Either a wildcard "*" or an explicit list of values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnyOrArray {
    /// Match any value
    #[default]
    Any,
    /// Explicit list
    List(Vec<String>),
}

impl<'de> Deserialize<'de> for AnyOrArray {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        let values = match Raw::deserialize(deserializer)? {
            Raw::One(value) => vec![value],
            Raw::Many(values) => values,
        };

        if values.iter().any(|v| v == "*") {
            Ok(Self::Any)
        } else {
            Ok(Self::List(values))
        }
    }
}

const fn default_true() -> bool {
    true
}
