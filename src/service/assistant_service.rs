//! Assistant service: relays prompts to the completion API.

use crate::ai::CompletionClient;
use crate::config::AiConfig;
use crate::error::AppError;

/// Reply sent when no API key is configured.
pub const NO_API_KEY: &str = "No API key set. Please configure one.";

/// Server-side relay behind `POST /api/ai`.
///
/// A blank prompt is a client error, but a missing API key is not: it
/// yields [`NO_API_KEY`] as a normal reply.
#[derive(Debug, Clone)]
pub struct AssistantService {
    api_key: Option<String>,
    client: CompletionClient,
}

impl AssistantService {
    /// Creates a new `AssistantService`.
    #[must_use]
    pub fn new(api_key: Option<String>, client: CompletionClient) -> Self {
        Self { api_key, client }
    }

    /// Builds the service and its HTTP client from the AI settings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the HTTP client cannot be built.
    pub fn from_config(config: &AiConfig) -> Result<Self, AppError> {
        let client = CompletionClient::new(config)?;
        if config.api_key.is_none() {
            tracing::warn!("AI_API_KEY not set; /api/ai will answer with a configuration hint");
        }
        Ok(Self::new(config.api_key.clone(), client))
    }

    /// Returns `true` when an API key is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Answers `prompt` with at most one outbound call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyPrompt`] for an absent or whitespace-only
    /// prompt (no outbound call is made) and [`AppError::Upstream`] when
    /// the completion API fails.
    pub async fn reply(&self, prompt: Option<&str>) -> Result<String, AppError> {
        let prompt = prompt
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or(AppError::EmptyPrompt)?;

        let Some(api_key) = self.api_key.as_deref() else {
            return Ok(NO_API_KEY.to_string());
        };

        tracing::info!(prompt_chars = prompt.chars().count(), "forwarding prompt");
        self.client.complete(api_key, prompt).await
    }
}
