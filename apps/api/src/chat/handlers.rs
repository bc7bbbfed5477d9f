//! Axum route handlers for the Chat API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::answer_question;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// POST /chat
///
/// Answers a question about the CV. The model's text is returned as-is.
pub async fn handle_chat(
    State(state): State<AppState>,
    AppJson(request): AppJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let answer = answer_question(&state.cv, state.llm.as_ref(), &request.prompt).await?;
    Ok(Json(ChatResponse { answer }))
}
