//! OpenAPI document for the JSON endpoints.

use utoipa::OpenApi;

use super::dto::{AckResponse, CreatePostRequest, HealthResponse, PromptRequest, TextResponse};
use super::handlers;
use crate::error::ErrorResponse;
use crate::persistence::Post;

/// OpenAPI description of `/api/*` and `/health`.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "mini-blog",
        description = "Posts, visit counter and AI prompt proxy."
    ),
    paths(
        handlers::posts::list_posts,
        handlers::posts::create_post,
        handlers::visits::record_visit,
        handlers::ai::ask_assistant,
        handlers::system::health_handler,
    ),
    components(schemas(
        Post,
        CreatePostRequest,
        PromptRequest,
        TextResponse,
        AckResponse,
        HealthResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Posts", description = "Blog posts"),
        (name = "Visits", description = "Visit counter"),
        (name = "Assistant", description = "AI prompt proxy"),
        (name = "System", description = "Health"),
    )
)]
pub struct ApiDoc;
