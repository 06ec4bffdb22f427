//! Anthropic Messages API wire format types

use serde::{Deserialize, Serialize};

// -- Request types --

/// Anthropic messages API request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicRequest {
    /// Model identifier
    pub model: String,
    /// Maximum tokens to generate (required by Anthropic)
    pub max_tokens: u32,
    /// System prompt (top-level, not in messages)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Conversation messages
    pub messages: Vec<AnthropicMessage>,
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Whether to stream the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

/// Anthropic message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicMessage {
    /// Role ("user" or "assistant")
    pub role: String,
    /// Message text
    pub content: String,
}

// -- Response types --

/// Anthropic messages API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicResponse {
    /// Response identifier
    pub id: String,
    /// Model used
    pub model: String,
    /// Role (always "assistant")
    pub role: String,
    /// Response content blocks
    pub content: Vec<AnthropicResponseBlock>,
    /// Stop reason (e.g. "end_turn", "max_tokens")
    #[serde(default)]
    pub stop_reason: Option<String>,
    /// Token usage
    #[serde(default)]
    pub usage: Option<AnthropicUsage>,
}

/// Content block in an Anthropic response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicResponseBlock {
    /// Text content
    Text {
        /// The text string
        text: String,
    },
    /// Any block kind this gateway does not model
    #[serde(other)]
    Other,
}

/// Anthropic usage statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnthropicUsage {
    /// Tokens in the prompt
    #[serde(default)]
    pub input_tokens: u32,
    /// Tokens in the completion
    #[serde(default)]
    pub output_tokens: u32,
}

// -- Streaming types --

/// Server-sent event emitted by the Anthropic streaming API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicStreamEvent {
    /// Stream opened
    MessageStart,
    /// A content block started
    ContentBlockStart,
    /// Incremental content
    ContentBlockDelta {
        /// The delta payload
        delta: AnthropicStreamDelta,
    },
    /// A content block finished
    ContentBlockStop,
    /// Top-level message metadata changed
    MessageDelta,
    /// Stream finished
    MessageStop,
    /// Keepalive
    Ping,
    /// Upstream error event
    Error {
        /// Error payload
        error: AnthropicStreamError,
    },
}

/// Delta payload of a `content_block_delta` event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicStreamDelta {
    /// Appended text
    TextDelta {
        /// The text fragment
        text: String,
    },
    /// Any delta kind this gateway does not model
    #[serde(other)]
    Other,
}

/// Error payload of an `error` stream event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicStreamError {
    /// Error type reported by Anthropic
    #[serde(rename = "type")]
    pub error_type: String,
    /// Human-readable message
    pub message: String,
}
