//! Visit counter handler.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::AckResponse;
use crate::app_state::AppState;
use crate::error::{AppError, ErrorResponse};

/// `POST /api/visit` — Record one visit.
///
/// # Errors
///
/// Returns [`AppError::Persistence`] on storage failure.
#[utoipa::path(
    post,
    path = "/api/visit",
    tag = "Visits",
    summary = "Record a visit",
    description = "Inserts one visit record. No body required.",
    responses(
        (status = 200, description = "Visit recorded", body = AckResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn record_visit(State(state): State<AppState>) -> Result<Json<AckResponse>, AppError> {
    state.visits.record().await?;
    Ok(Json(AckResponse::OK))
}

/// Visit routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/visit", post(record_visit))
}
