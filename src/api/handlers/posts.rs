//! Post API handlers: list and create.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::CreatePostRequest;
use crate::api::extract::JsonOrForm;
use crate::app_state::AppState;
use crate::error::{AppError, ErrorResponse};
use crate::persistence::Post;

/// `GET /api/posts` — List all posts, newest first.
///
/// # Errors
///
/// Returns [`AppError::Persistence`] on storage failure.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "Posts",
    summary = "List posts",
    description = "Returns every post ordered by creation time, newest first. No pagination.",
    responses(
        (status = 200, description = "All posts", body = Vec<Post>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, AppError> {
    Ok(Json(state.posts.list().await?))
}

/// `POST /api/posts` — Create a post.
///
/// # Errors
///
/// Returns [`AppError::InvalidRequest`] when `title` or `content` is
/// missing and [`AppError::Persistence`] when the insert fails.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "Posts",
    summary = "Create a post",
    description = "Stores a new post. Accepts JSON or form-encoded bodies. The server assigns the id and `createdAt`.",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 400, description = "Missing title or content", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<CreatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let post = state
        .posts
        .create(req.title, req.author, req.content)
        .await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// Post API routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/posts", get(list_posts).post(create_post))
}
