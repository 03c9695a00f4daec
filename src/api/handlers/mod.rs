//! Endpoint handlers organized by resource.

pub mod ai;
pub mod pages;
pub mod posts;
pub mod system;
pub mod visits;

use axum::Router;

use crate::app_state::AppState;

/// Composes the JSON API routes (everything under `/api`).
///
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(posts::routes())
        .merge(visits::routes())
        .merge(ai::routes())
}
