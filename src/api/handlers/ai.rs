//! AI assistant proxy handler.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{PromptRequest, TextResponse};
use crate::api::extract::JsonOrForm;
use crate::app_state::AppState;
use crate::error::{AppError, ErrorResponse};

/// `POST /api/ai` — Forward a prompt to the completion API.
///
/// # Errors
///
/// Returns [`AppError::EmptyPrompt`] for a blank prompt and
/// [`AppError::Upstream`] when the completion API fails.
#[utoipa::path(
    post,
    path = "/api/ai",
    tag = "Assistant",
    summary = "Ask the assistant",
    description = "Relays the prompt to the configured chat completion API and returns the first choice's text. Without an API key, answers 200 with a configuration hint.",
    request_body = PromptRequest,
    responses(
        (status = 200, description = "Model reply, placeholder, or configuration hint", body = TextResponse),
        (status = 400, description = "Blank prompt", body = TextResponse),
        (status = 500, description = "Completion API failure", body = ErrorResponse),
    )
)]
pub async fn ask_assistant(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<PromptRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let text = state.assistant.reply(req.prompt.as_deref()).await?;
    Ok(Json(TextResponse { text }))
}

/// Assistant routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/ai", post(ask_assistant))
}
