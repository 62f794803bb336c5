use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use gazetteer_core::{Country, DomainError};

use crate::app::{errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_countries).post(create_country))
        .route("/:code", get(get_country).delete(delete_country))
}

pub async fn list_countries(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let countries = services.countries().list();
    (StatusCode::OK, Json(countries)).into_response()
}

pub async fn get_country(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
) -> axum::response::Response {
    match services.countries().get(&code) {
        Some(country) => (StatusCode::OK, Json(country)).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found()),
    }
}

pub async fn create_country(
    Extension(services): Extension<Arc<AppServices>>,
    payload: Result<Json<Country>, JsonRejection>,
) -> axum::response::Response {
    let Json(country) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            // Undecodable body. Presence failures are not decode failures:
            // missing fields default to empty and are caught by validation.
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "decode_error",
                rejection.body_text(),
            );
        }
    };

    match services.countries().put(country) {
        Ok(stored) => (StatusCode::OK, Json(stored)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_country(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
) -> axum::response::Response {
    // Idempotent: deleting an absent code still answers 200.
    services.countries().delete(&code);
    StatusCode::OK.into_response()
}
