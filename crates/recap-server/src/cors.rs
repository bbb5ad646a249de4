use std::str::FromStr;

use http::header::HeaderName;
use http::{HeaderValue, Method};
use recap_config::{AnyOrArray, CorsConfig};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build a Tower CORS layer from configuration
///
/// Browsers reject a literal `*` on credentialed requests, so when
/// credentials are allowed a wildcard is answered by echoing the request's
/// origin, method and headers instead.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mirror = config.credentials;

    let origins = match &config.origins {
        AnyOrArray::Any if mirror => AllowOrigin::mirror_request(),
        AnyOrArray::Any => AllowOrigin::any(),
        AnyOrArray::List(origins) => {
            AllowOrigin::list(parse_all::<HeaderValue>(origins, "origin"))
        }
    };

    let methods = match &config.methods {
        AnyOrArray::Any if mirror => AllowMethods::mirror_request(),
        AnyOrArray::Any => AllowMethods::any(),
        AnyOrArray::List(methods) => {
            AllowMethods::list(parse_all::<Method>(methods, "method"))
        }
    };

    let headers = match &config.headers {
        AnyOrArray::Any if mirror => AllowHeaders::mirror_request(),
        AnyOrArray::Any => AllowHeaders::any(),
        AnyOrArray::List(headers) => {
            AllowHeaders::list(parse_all::<HeaderName>(headers, "header"))
        }
    };

    let mut layer = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(config.credentials);

    if !config.expose_headers.is_empty() {
        layer = layer.expose_headers(parse_all::<HeaderName>(&config.expose_headers, "expose header"));
    }

    if let Some(duration) = config.max_age_duration() {
        layer = layer.max_age(duration);
    }

    layer
}

/// Parse each configured value, skipping and logging the ones that are malformed
fn parse_all<T: FromStr>(values: &[String], kind: &str) -> Vec<T> {
    values
        .iter()
        .filter_map(|value| match value.parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                tracing::warn!(kind, value = %value, "ignoring malformed CORS value");
                None
            }
        })
        .collect()
}
