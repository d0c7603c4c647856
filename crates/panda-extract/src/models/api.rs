//! Wire types for the OpenAI chat-completions and billing endpoints.

use serde::{Deserialize, Serialize};

/// Chat message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Domain framing for the conversation.
    System,
    /// Instructions plus article text.
    User,
    /// Model output.
    Assistant,
}

/// One chat message, on either side of the exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role.
    pub role: Role,

    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    /// Create a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Request body for the chat-completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,

    /// System + user messages.
    pub messages: Vec<ChatMessage>,

    /// Decoding temperature; always 0 for extraction.
    pub temperature: f32,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The assistant message.
    pub message: ChatMessage,
}

/// Response body from the chat-completions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion choices (one, at temperature 0).
    #[serde(default)]
    pub choices: Vec<ChatChoice>,

    /// Token usage counters, when the API reports them.
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

impl ChatResponse {
    /// Take the first choice's content, consuming the response.
    #[must_use]
    pub fn into_content(self) -> Option<String> {
        self.choices.into_iter().next().map(|choice| choice.message.content)
    }
}

/// Token usage counters attached to a completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt.
    #[serde(default)]
    pub prompt_tokens: u64,

    /// Tokens in the completion.
    #[serde(default)]
    pub completion_tokens: u64,

    /// Prompt + completion tokens.
    #[serde(default)]
    pub total_tokens: u64,
}

/// A parsed completion: raw text plus usage counters when present.
#[derive(Debug, Clone)]
pub struct Completion {
    /// The assistant's text, expected to be a Markdown table.
    pub content: String,

    /// Token usage for this call, when reported.
    pub usage: Option<TokenUsage>,
}

/// Response body from the billing usage endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BillingUsage {
    /// Cumulative daily spend in cents.
    #[serde(default)]
    pub total_usage: f64,
}

impl BillingUsage {
    /// Daily spend in dollars.
    #[must_use]
    pub fn dollars(&self) -> f64 {
        self.total_usage / 100.0
    }
}
