//! Shared DTO types used across multiple endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// Plain acknowledgement, `{"ok": true}`.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct AckResponse {
    /// Always `true`.
    pub ok: bool,
}

impl AckResponse {
    /// The only acknowledgement there is.
    pub const OK: Self = Self { ok: true };
}

/// Health check response, `{"status": "ok"}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
}
