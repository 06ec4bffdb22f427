//! Raw completion shapes produced by the provider backends
//!
//! Every backend converts its wire format into these before the
//! normalizer runs, so normalization sees one input shape regardless
//! of which provider served the request.

use serde::{Deserialize, Serialize};

/// Raw non-streaming completion as reported by a backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendCompletion {
    /// Backend-assigned response identifier
    pub id: String,
    /// Model the backend reports having used
    pub model: String,
    /// Completion choices, in backend order
    pub choices: Vec<BackendChoice>,
    /// Usage statistics when the backend reported them
    #[serde(default)]
    pub usage: Option<BackendUsage>,
}

/// One choice of a raw completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendChoice {
    /// Position of this choice
    #[serde(default)]
    pub index: u32,
    /// Generated message
    pub message: BackendMessage,
    /// Stop reason, untouched
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Message inside a raw choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendMessage {
    /// Role string as the backend reports it
    pub role: String,
    /// Content; some backends omit it entirely
    #[serde(default)]
    pub content: Option<String>,
}

/// Raw usage block
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BackendUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Raw streaming chunk as reported by a backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendChunk {
    /// Chunk choices; deltas live in the first one
    #[serde(default)]
    pub choices: Vec<BackendChunkChoice>,
}

impl BackendChunk {
    /// Text delta carried by this chunk, empty when the chunk has none
    /// (role-only deltas, final stop chunks)
    pub fn content(&self) -> &str {
        self.choices
            .first()
            .and_then(|choice| choice.delta.as_ref())
            .and_then(|delta| delta.content.as_deref())
            .unwrap_or("")
    }
}

/// One choice of a raw streaming chunk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendChunkChoice {
    /// Incremental payload
    #[serde(default)]
    pub delta: Option<BackendDelta>,
}

/// Incremental payload of a chunk choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendDelta {
    /// Text appended by this chunk
    #[serde(default)]
    pub content: Option<String>,
}
