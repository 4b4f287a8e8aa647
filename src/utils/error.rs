use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::models::FieldError;
use crate::store::StoreError;
use crate::utils::response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{detail}")]
    Internal {
        detail: String,
        #[source]
        source: Option<StoreError>,
    },
}

impl AppError {
    /// A store failure surfaced to the client with a generic message.
    pub fn internal(detail: impl Into<String>, source: StoreError) -> Self {
        Self::Internal {
            detail: detail.into(),
            source: Some(source),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        // Validation, bad-request and not-found are normal client
        // outcomes; only internal failures are server faults.
        if let AppError::Internal { detail, source } = self {
            error!(error = ?source, message = %detail, "Internal error");
        }
    }
}

/// Structurally malformed bodies (bad JSON, missing required field,
/// wrong type) come back in the same 422 shape as business validation,
/// scoped to the body as a whole.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(vec![FieldError {
            field: "body".to_string(),
            message: rejection.body_text(),
            kind: "json_invalid".to_string(),
        }])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        match self {
            AppError::Validation(errors) => response::validation_error(errors),
            AppError::BadRequest(message) | AppError::NotFound(message) => {
                response::detail(status, message)
            }
            AppError::Internal { detail, source } => {
                // Underlying cause is only exposed when DEBUG is set.
                let debug_message = if std::env::var("DEBUG").is_ok() {
                    source.map(|err| err.to_string())
                } else {
                    None
                };
                response::internal_error(detail, debug_message)
            }
        }
    }
}
