use serde::{Deserialize, Serialize};

/// One server-sent event frame of a streamed completion
///
/// Exactly one frame per stream has `done: true`. A frame with `error`
/// set is always terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEvent {
    /// Text delta; empty on terminal frames
    pub content: String,
    /// Whether this is the terminal frame
    pub done: bool,
    /// Error description when the stream failed mid-flight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StreamEvent {
    /// Content frame carrying a text delta
    pub fn delta(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            done: false,
            error: None,
        }
    }

    /// Successful terminal frame
    pub const fn done() -> Self {
        Self {
            content: String::new(),
            done: true,
            error: None,
        }
    }

    /// Failed terminal frame
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            done: true,
            error: Some(error.into()),
        }
    }
}
