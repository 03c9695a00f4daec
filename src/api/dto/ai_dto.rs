//! AI assistant DTOs.

use serde::Deserialize;
use utoipa::ToSchema;

pub use crate::error::TextResponse;

/// Request body for `POST /api/ai`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PromptRequest {
    /// Prompt text. Surrounding whitespace is trimmed before forwarding.
    #[serde(default)]
    pub prompt: Option<String>,
}
