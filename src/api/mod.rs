//! HTTP layer: route handlers, DTOs, body extraction and the OpenAPI doc.
//!
//! JSON endpoints live under `/api`; HTML pages and `/health` are mounted
//! at the root.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod openapi;

use axum::Router;

use crate::app_state::AppState;

/// Builds the JSON API router (`/api/*`).
pub fn api_router() -> Router<AppState> {
    handlers::api_routes()
}

/// Builds the routes outside `/api`: HTML pages and `/health`.
pub fn site_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::pages::routes())
        .merge(handlers::system::routes())
}
