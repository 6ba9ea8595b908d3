use http::Method;
use http::header::{HeaderName, HeaderValue};
use prism_config::{AnyOrList, CorsConfig};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build a Tower CORS layer from configuration
///
/// Entries that fail to parse are skipped with a warning.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new()
        .allow_origin(match &config.origins {
            AnyOrList::Any => AllowOrigin::any(),
            AnyOrList::List(origins) => AllowOrigin::list(parse_all::<HeaderValue>("origin", origins)),
        })
        .allow_methods(match &config.methods {
            AnyOrList::Any => AllowMethods::any(),
            AnyOrList::List(methods) => AllowMethods::list(parse_all::<Method>("method", methods)),
        })
        .allow_headers(match &config.headers {
            AnyOrList::Any => AllowHeaders::any(),
            AnyOrList::List(headers) => AllowHeaders::list(parse_all::<HeaderName>("header", headers)),
        });

    if config.credentials {
        layer = layer.allow_credentials(true);
    }

    if let Some(duration) = config.max_age_duration() {
        layer = layer.max_age(duration);
    }

    layer
}

fn parse_all<T: std::str::FromStr>(kind: &str, values: &[String]) -> Vec<T> {
    values
        .iter()
        .filter_map(|value| {
            let parsed = value.parse().ok();
            if parsed.is_none() {
                tracing::warn!(kind, value = %value, "ignoring invalid CORS entry");
            }
            parsed
        })
        .collect()
}
