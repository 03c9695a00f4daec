//! Post DTOs.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for `POST /api/posts` (JSON or form-encoded).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    /// Post title. Required, must not be empty.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional author name.
    #[serde(default)]
    pub author: Option<String>,
    /// Post body. Required, must not be empty.
    #[serde(default)]
    pub content: Option<String>,
}
