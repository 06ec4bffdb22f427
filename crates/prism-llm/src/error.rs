use http::StatusCode;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Debug, Error)]
pub enum LlmError {
    /// Requested provider is outside the supported set
    #[error("unsupported provider: '{provider}' (expected one of: anthropic, ollama)")]
    InvalidProvider {
        /// The offending provider value
        provider: String,
    },

    /// Client sent a malformed or out-of-range request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The backend call itself failed (network, auth, malformed response)
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Failure while iterating a backend stream
    #[error("streaming error: {0}")]
    Streaming(String),
}

impl LlmError {
    /// HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidProvider { .. } | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Streaming(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error type (e.g. `invalid_request_error`)
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidProvider { .. } => "invalid_provider_error",
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::Upstream(_) => "upstream_error",
            Self::Streaming(_) => "streaming_error",
        }
    }
}
