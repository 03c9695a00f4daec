//! System endpoints: health check.

use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::HealthResponse;
use crate::app_state::AppState;

/// `GET /health` — Liveness.
///
/// Always `{"status":"ok"}`; the store is not probed.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns a fixed ok status. Does not check storage connectivity.",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
