//! Application error types with HTTP status code mapping.
//!
//! [`AppError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and JSON body. There are no
//! machine-readable error codes: clients get a status and a message.

use axum::http::header::RETRY_AFTER;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Message returned when a post is submitted without a title or content.
pub const MISSING_POST_FIELDS: &str = "title and content required";

/// Message returned when `/api/ai` receives a blank prompt.
pub const EMPTY_PROMPT: &str = "Please provide a prompt.";

/// Message returned to clients over the `/api` quota.
pub const RATE_LIMITED: &str = "Too many requests from this IP, please try again later.";

/// JSON error response body.
///
/// ```json
/// { "error": "database error", "details": "pool timed out" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Short human-readable message.
    pub error: String,
    /// Underlying cause, when it is safe to expose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Body used by `/api/ai` for both replies and the blank-prompt rejection.
#[derive(Debug, Serialize, ToSchema)]
pub struct TextResponse {
    /// Reply text, or a user-facing explanation.
    pub text: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant          | HTTP Status               |
/// |------------------|---------------------------|
/// | `InvalidRequest` | 400 Bad Request           |
/// | `EmptyPrompt`    | 400 Bad Request           |
/// | `RateLimited`    | 429 Too Many Requests     |
/// | everything else  | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request validation failed.
    #[error("{0}")]
    InvalidRequest(String),

    /// `/api/ai` received an absent or whitespace-only prompt.
    #[error("empty prompt")]
    EmptyPrompt,

    /// Storage layer failure.
    #[error("database error: {0}")]
    Persistence(String),

    /// The completion API call failed (transport error or non-2xx status).
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Client exceeded the `/api` rate limit.
    #[error("rate limit exceeded; retry after {retry_after_ms} ms")]
    RateLimited {
        /// Milliseconds until the client's window resets.
        retry_after_ms: u64,
    },

    /// A server-side view failed to render.
    #[error("render error: {0}")]
    Render(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::EmptyPrompt => StatusCode::BAD_REQUEST,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Persistence(_) | Self::Upstream(_) | Self::Render(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Builds the JSON error body for every variant except
    /// [`AppError::EmptyPrompt`], which answers with a [`TextResponse`].
    fn error_body(&self) -> ErrorResponse {
        let (error, details) = match self {
            Self::InvalidRequest(msg) => (msg.clone(), None),
            Self::EmptyPrompt => (EMPTY_PROMPT.to_string(), None),
            Self::Persistence(detail) => ("database error".to_string(), Some(detail.clone())),
            // Provider errors can echo credentials back; keep them in the logs.
            Self::Upstream(_) => ("AI request failed".to_string(), None),
            Self::RateLimited { .. } => (RATE_LIMITED.to_string(), None),
            Self::Render(detail) => ("render error".to_string(), Some(detail.clone())),
            Self::Internal(detail) => ("internal error".to_string(), Some(detail.clone())),
        };
        ErrorResponse { error, details }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let mut response = match self {
            Self::EmptyPrompt => axum::Json(TextResponse {
                text: EMPTY_PROMPT.to_string(),
            })
            .into_response(),
            ref other => axum::Json(other.error_body()).into_response(),
        };
        *response.status_mut() = status;

        if let Self::RateLimited { retry_after_ms } = self {
            let secs = retry_after_ms.div_ceil(1000).max(1);
            if let Ok(value) = HeaderValue::from_str(&secs.to_string()) {
                response.headers_mut().insert(RETRY_AFTER, value);
            }
        }
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(value) = serde_json::from_slice(&bytes) else {
            panic!("body is not json");
        };
        value
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::InvalidRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::EmptyPrompt.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::RateLimited { retry_after_ms: 1 }.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            AppError::Persistence("down".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Upstream("502".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn persistence_error_carries_details() {
        let response = AppError::Persistence("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({ "error": "database error", "details": "connection refused" })
        );
    }

    #[tokio::test]
    async fn upstream_error_hides_details() {
        let body = body_json(AppError::Upstream("401 bad key sk-123".into()).into_response()).await;
        assert_eq!(body, serde_json::json!({ "error": "AI request failed" }));
    }

    #[tokio::test]
    async fn empty_prompt_answers_with_text_body() {
        let response = AppError::EmptyPrompt.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "text": EMPTY_PROMPT }));
    }

    #[tokio::test]
    async fn rate_limited_sets_retry_after() {
        let response = AppError::RateLimited {
            retry_after_ms: 1_500,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok()),
            Some("2")
        );
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": RATE_LIMITED }));
    }
}
