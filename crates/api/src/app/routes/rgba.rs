use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use gazetteer_core::Rgba;

use crate::app::{errors, services::AppServices};

pub fn router() -> Router {
    Router::new().route("/", get(get_rgba).post(put_rgba))
}

/// Reads the current color. Before any write this is the zero color,
/// not an error.
pub async fn get_rgba(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let color = services.rgba().get();
    (StatusCode::OK, Json(color)).into_response()
}

/// Replaces the color wholesale. Missing components default to 0.0.
pub async fn put_rgba(
    Extension(services): Extension<Arc<AppServices>>,
    payload: Result<Json<Rgba>, JsonRejection>,
) -> axum::response::Response {
    let Json(color) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "decode_error",
                rejection.body_text(),
            );
        }
    };

    let stored = services.rgba().put(color);
    (StatusCode::OK, Json(stored)).into_response()
}
