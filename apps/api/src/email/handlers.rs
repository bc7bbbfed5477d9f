//! Axum route handlers for the Email API.

use axum::{extract::State, Json};

use crate::email::service::send_email;
use crate::email::EmailRequest;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::routes::MessageResponse;
use crate::state::AppState;

/// POST /send-email
///
/// The delivery error is logged by the service and replaced with a generic
/// failure for the caller.
pub async fn handle_send_email(
    State(state): State<AppState>,
    AppJson(request): AppJson<EmailRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    send_email(state.mailer.as_ref(), &request)
        .await
        .map_err(|_| AppError::EmailDelivery)?;

    Ok(Json(MessageResponse {
        message: "Email sent successfully.".to_string(),
    }))
}
