pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::chat::handlers::handle_chat;
use crate::email::handlers::handle_send_email;
use crate::state::AppState;

/// `{ "message": ... }` body shared by the root and email endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/status", get(health::status_handler))
        .route("/chat", post(handle_chat))
        .route("/send-email", post(handle_send_email))
        .with_state(state)
}

/// CORS restricted to `origins`, with credentials, and any method or header
/// those origins ask for.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{o}'")))
        .collect::<Result<Vec<_>>>()?;

    // Wildcards are not allowed alongside credentials, so mirror the request instead.
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
