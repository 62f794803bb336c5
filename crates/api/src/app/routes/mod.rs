use axum::Router;

pub mod countries;
pub mod rgba;
pub mod system;

/// Router for all resource endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/countries", countries::router())
        .nest("/rgba", rgba::router())
}
