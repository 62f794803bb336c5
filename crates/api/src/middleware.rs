//! Cross-cutting HTTP layers.

use axum::http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// Build the CORS layer from the configured policy.
///
/// Origins are an exact allow-list. Methods are GET/POST/PUT and the header
/// list matches what the browser clients actually send; credentials are
/// allowed, so neither origins nor headers may use a wildcard.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse().expect("allowed origin is not a valid header value"))
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            HeaderName::from_static("x-custom-header"),
        ])
        .allow_credentials(true)
        .max_age(config.preflight_max_age)
}
