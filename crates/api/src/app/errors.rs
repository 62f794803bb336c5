use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use gazetteer_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        // Unknown-record lookups answer with an empty body, not the JSON
        // envelope.
        DomainError::NotFound => StatusCode::NOT_FOUND.into_response(),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
