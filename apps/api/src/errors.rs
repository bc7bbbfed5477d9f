use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The body carries a `detail` field, which is what the web frontend reads.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request body was rejected before reaching a handler. Keeps the
    /// extractor's status (400, 415 or 422).
    #[error("{message}")]
    Validation { status: StatusCode, message: String },

    /// The CV could not be loaded at boot. Carries the stored reason.
    #[error("{0}")]
    ContextUnavailable(String),

    #[error("An error occurred with the AI model: {0}")]
    Llm(String),

    /// Email delivery failed. The cause is logged where it happened and is
    /// not exposed to the caller.
    #[error("Failed to send email.")]
    EmailDelivery,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, detail) = match &self {
            AppError::Validation { status, message } => {
                (*status, "VALIDATION_ERROR", message.clone())
            }
            AppError::ContextUnavailable(reason) => {
                tracing::warn!("Chat rejected, CV context unavailable: {reason}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONTEXT_UNAVAILABLE",
                    self.to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "LLM_ERROR", self.to_string())
            }
            AppError::EmailDelivery => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "EMAIL_ERROR",
                self.to_string(),
            ),
        };

        let body = Json(json!({
            "detail": detail,
            "code": code,
        }));

        (status, body).into_response()
    }
}
