//! Request body extractor accepting JSON or URL-encoded forms.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Deserializes the body as JSON or as an HTML form, by `Content-Type`.
///
/// Any other (or missing) content type yields `T::default()`, the same as
/// an empty body. Malformed bodies are rejected with
/// [`AppError::InvalidRequest`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;
            return Ok(Self(value));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;
            return Ok(Self(value));
        }

        Ok(Self(T::default()))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::body::Body;

    use super::*;
    use crate::api::dto::CreatePostRequest;

    async fn extract(
        content_type: Option<&str>,
        body: &'static str,
    ) -> Result<CreatePostRequest, AppError> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let Ok(req) = builder.body(Body::from(body)) else {
            panic!("request build failed");
        };
        JsonOrForm::<CreatePostRequest>::from_request(req, &())
            .await
            .map(|JsonOrForm(value)| value)
    }

    #[tokio::test]
    async fn parses_json() {
        let Ok(req) = extract(
            Some("application/json; charset=utf-8"),
            r#"{"title":"t","content":"c"}"#,
        )
        .await
        else {
            panic!("json should parse");
        };
        assert_eq!(req.title.as_deref(), Some("t"));
        assert_eq!(req.author, None);
    }

    #[tokio::test]
    async fn parses_form() {
        let Ok(req) = extract(
            Some("application/x-www-form-urlencoded"),
            "title=Hello+there&author=ada&content=body",
        )
        .await
        else {
            panic!("form should parse");
        };
        assert_eq!(req.title.as_deref(), Some("Hello there"));
        assert_eq!(req.author.as_deref(), Some("ada"));
    }

    #[tokio::test]
    async fn unknown_content_type_is_empty() {
        let Ok(req) = extract(None, "whatever").await else {
            panic!("should default");
        };
        assert!(req.title.is_none() && req.content.is_none());
    }

    #[tokio::test]
    async fn malformed_json_is_invalid_request() {
        let result = extract(Some("application/json"), "{not json").await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }
}
