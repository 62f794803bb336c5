//! HTTP API application wiring (axum router + store wiring).
//!
//! Layout:
//! - `services.rs`: the shared store instances handlers operate on
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::middleware;

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// Every request shares the same store instances via an `Extension`; there
/// is no process-wide mutable state.
pub fn build_app(config: ApiConfig) -> Router {
    let services = Arc::new(services::build_services());

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::cors_layer(&config.cors))
                .layer(Extension(services)),
        )
}
