use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use brewhall_core::DomainError;

/// Single translation point from domain failures to HTTP responses.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        DomainError::State(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        DomainError::AccessDenied => json_error(StatusCode::FORBIDDEN, "forbidden", "access denied"),
        DomainError::Internal(msg) => {
            tracing::error!(error = %msg, "internal failure surfaced to API");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
        }
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
