//! Wire types for the OpenAI-compatible chat completion API.
//!
//! Only the fields this service sends or reads are modelled. Every
//! response field is optional so a surprising payload degrades to "no
//! reply" instead of an error.

use serde::{Deserialize, Serialize};

/// Request body for `POST /chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    /// Model identifier.
    pub model: &'a str,
    /// Conversation so far; always a single user message here.
    pub messages: Vec<ChatMessage<'a>>,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Builds a single-turn request carrying `prompt` as the user message.
    #[must_use]
    pub fn single_prompt(model: &'a str, prompt: &'a str, max_tokens: u32) -> Self {
        Self {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
        }
    }
}

/// One chat message.
#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    /// `user`, `assistant` or `system`.
    pub role: &'a str,
    /// Message text.
    pub content: &'a str,
}

/// Response body of a chat completion.
#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletionResponse {
    /// Generated alternatives; only the first is used.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One generated alternative.
#[derive(Debug, Deserialize)]
pub struct Choice {
    /// Generated message, if the provider returned one.
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

/// Message payload of a [`Choice`].
#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    /// Generated text.
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Returns the first choice's text, if present and non-empty.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()?
            .message?
            .content
            .filter(|text| !text.is_empty())
    }
}
