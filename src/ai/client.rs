//! HTTP client for the chat completion API.

use reqwest::Client;

use super::dto::{ChatCompletionRequest, ChatCompletionResponse};
use crate::config::AiConfig;
use crate::error::AppError;

/// Placeholder returned when the provider answers without usable text.
pub const NO_REPLY: &str = "No reply from model.";

/// Sends single-prompt chat completions to an OpenAI-compatible endpoint.
///
/// One outbound request per call: no retries, no caching, and no timeout
/// beyond `reqwest`'s defaults.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: Client,
    api_url: String,
    model: String,
    max_tokens: u32,
    app_url: String,
    app_title: String,
}

impl CompletionClient {
    /// Builds a client from the AI settings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the HTTP client cannot be
    /// initialised (e.g. TLS backend failure).
    pub fn new(config: &AiConfig) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Internal(format!("http client: {e}")))?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            app_url: config.app_url.clone(),
            app_title: config.app_title.clone(),
        })
    }

    /// Sends `prompt` as one user message and returns the first choice's
    /// text, or [`NO_REPLY`] when the provider's body has none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport failure or a non-2xx
    /// status.
    pub async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, AppError> {
        let body = ChatCompletionRequest::single_prompt(&self.model, prompt, self.max_tokens);

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.app_url)
            .header("X-Title", &self.app_title)
            .json(&body)
            .send()
            .await
            .map_err(upstream)?
            .error_for_status()
            .map_err(upstream)?;

        let raw = response.text().await.map_err(upstream)?;
        let text = serde_json::from_str::<ChatCompletionResponse>(&raw)
            .ok()
            .and_then(ChatCompletionResponse::into_text);

        if text.is_none() {
            tracing::warn!(model = %self.model, "completion response had no usable text");
        }
        Ok(text.unwrap_or_else(|| NO_REPLY.to_string()))
    }
}

fn upstream(err: reqwest::Error) -> AppError {
    AppError::Upstream(err.to_string())
}
