use serde::{Deserialize, Serialize};

use super::message::ChatMessage;

/// Token usage statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens consumed by the prompt
    pub prompt_tokens: u32,
    /// Tokens generated in the completion
    pub completion_tokens: u32,
    /// Total tokens (prompt + completion)
    pub total_tokens: u32,
}

/// A single completion choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Index of this choice, as reported by the backend
    pub index: u32,
    /// Generated message
    pub message: ChatMessage,
    /// Why generation stopped, verbatim from the backend
    pub finish_reason: Option<String>,
}

/// Normalized chat-completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Response identifier, verbatim from the backend
    pub id: String,
    /// Model that served the request, verbatim from the backend
    pub model: String,
    /// Logical provider that was resolved for this request; the backend
    /// payload is never consulted for this
    pub provider: String,
    /// Generated choices, in backend order
    pub choices: Vec<Choice>,
    /// Token usage; absent means the backend reported none, not zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}
