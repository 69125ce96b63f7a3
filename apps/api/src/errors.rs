use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::models::AuthFormErrors;
use crate::llm_client::prompts::{SUPPORT_EMAIL, SUPPORT_PHONE, SUPPORT_WHATSAPP};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The taxonomy is shallow on purpose: validation errors are field-scoped and
/// recoverable, upstream errors always normalize to the human support
/// fallback, and nothing here is fatal.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed")]
    FormInvalid(AuthFormErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Completion API error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({
                    "error": "Method not allowed",
                    "suggestion": "Please use POST with a \"message\" parameter",
                }),
            ),
            AppError::BadRequest(details) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Bad request",
                    "details": details,
                }),
            ),
            AppError::FormInvalid(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": "Validation failed",
                    "fields": fields,
                }),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::Upstream(msg) => {
                tracing::error!("Completion API error: {msg}");
                let mut body = json!({
                    "error": "Sorry, I'm having trouble responding right now",
                    "support_options": {
                        "whatsapp": SUPPORT_WHATSAPP,
                        "email": SUPPORT_EMAIL,
                        "phone": SUPPORT_PHONE,
                    },
                });
                // Raw upstream detail only ever leaves the process in
                // development builds; release builds log it and stop there.
                if cfg!(debug_assertions) {
                    body["original_error"] = json!(msg);
                }
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal server error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
