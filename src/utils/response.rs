use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::models::FieldError;

/// Single-message error body: `{"detail": "..."}`.
#[derive(Serialize)]
pub struct DetailBody {
    pub detail: String,
}

/// Field-level validation error body.
#[derive(Serialize)]
pub struct ValidationBody {
    pub detail: String,
    pub errors: Vec<FieldError>,
}

/// Internal-error body; `message` carries the underlying cause only
/// in debug mode.
#[derive(Serialize)]
pub struct InternalBody {
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn detail(status: StatusCode, message: impl Into<String>) -> Response {
    let body = DetailBody {
        detail: message.into(),
    };
    (status, Json(body)).into_response()
}

pub fn validation_error(errors: Vec<FieldError>) -> Response {
    let body = ValidationBody {
        detail: "Validation error".to_string(),
        errors,
    };
    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}

pub fn internal_error(detail: impl Into<String>, message: Option<String>) -> Response {
    let body = InternalBody {
        detail: detail.into(),
        message,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
