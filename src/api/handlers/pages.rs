//! HTML pages: dashboard and post listing.

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::app_state::AppState;
use crate::error::AppError;
use crate::views::{self, DashboardView, PostsView};

/// `GET /` — Dashboard.
///
/// Records a visit first, so the rendered visit count includes this one.
///
/// # Errors
///
/// Returns [`AppError::Persistence`] on storage failure and
/// [`AppError::Render`] if the view fails to render.
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.visits.record().await?;
    let post_count = state.posts.count().await?;
    let visit_count = state.visits.count().await?;

    views::render(&DashboardView {
        post_count,
        visit_count,
        uptime: views::format_uptime(state.uptime()),
        ai_configured: state.assistant.is_configured(),
    })
}

/// `GET /posts` — All posts, newest first.
///
/// # Errors
///
/// Returns [`AppError::Persistence`] on storage failure and
/// [`AppError::Render`] if the view fails to render.
pub async fn posts_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let posts = state.posts.list().await?;
    views::render(&PostsView::new(&posts))
}

/// HTML page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard))
        .route("/posts", get(posts_page))
}
