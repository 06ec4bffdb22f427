//! OpenAI-compatible chat-completions wire format, as served by Ollama
//!
//! Only the request side needs dedicated types here: the response and
//! chunk payloads deserialize directly into the canonical
//! [`crate::types::BackendCompletion`] and [`crate::types::BackendChunk`]
//! shapes.

use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<OpenAiMessage>,
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Whether to stream the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

/// OpenAI-compatible message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiMessage {
    /// Role string ("system", "user", "assistant")
    pub role: String,
    /// Message text
    pub content: String,
}
