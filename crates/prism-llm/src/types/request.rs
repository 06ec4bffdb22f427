use serde::{Deserialize, Serialize};

use super::message::ChatMessage;
use crate::error::LlmError;

/// Inbound chat-completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages, oldest first
    pub messages: Vec<ChatMessage>,
    /// Provider name; falls back to the configured default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Model name, bare or provider-prefixed; falls back to the provider's
    /// configured default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Sampling temperature (0.0 to 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum tokens to generate (1 to 8192)
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Whether to stream the response
    #[serde(default)]
    pub stream: bool,
}

impl ChatRequest {
    /// Validate field constraints once at the boundary
    ///
    /// # Errors
    ///
    /// Returns `LlmError::InvalidRequest` when a field is out of range
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.messages.is_empty() {
            return Err(LlmError::InvalidRequest("messages must not be empty".to_owned()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(LlmError::InvalidRequest(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }
        if !(1..=8192).contains(&self.max_tokens) {
            return Err(LlmError::InvalidRequest(format!(
                "max_tokens must be between 1 and 8192, got {}",
                self.max_tokens
            )));
        }
        Ok(())
    }
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    1024
}
