use axum::Json;
use serde::Serialize;

use crate::routes::MessageResponse;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET /
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the CV Assistant API. POST /chat to ask about the CV.".to_string(),
    })
}

/// GET /status
/// Liveness check; hosting platforms ping it to keep the instance awake.
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        message: "Server is awake and running.",
    })
}
