//! Backend trait and implementations for the supported providers

pub mod anthropic;
pub mod ollama;

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;

use crate::error::LlmError;
use crate::resolver::ResolvedTarget;
use crate::types::{BackendChunk, ChatRequest};

pub use anthropic::AnthropicBackend;
pub use ollama::OllamaBackend;

/// Stream of raw completion chunks from a backend
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<BackendChunk, LlmError>> + Send>>;

/// Trait implemented by each provider backend
#[async_trait]
pub trait Backend: Send + Sync {
    /// Canonical provider name, for log fields
    fn name(&self) -> &'static str;

    /// Send a non-streaming completion request
    async fn complete(
        &self,
        target: &ResolvedTarget,
        request: &ChatRequest,
    ) -> Result<crate::types::BackendCompletion, LlmError>;

    /// Open a streaming completion request
    ///
    /// Errors returned here happened before any chunk was delivered;
    /// failures after that point travel inside the stream.
    async fn complete_stream(
        &self,
        target: &ResolvedTarget,
        request: &ChatRequest,
    ) -> Result<ChunkStream, LlmError>;
}

/// Reject a non-success upstream response, folding its body into the error
pub(crate) async fn reject_error_status(
    name: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, LlmError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(provider = name, status = %status, "upstream returned error");
    Err(LlmError::Upstream(format!("provider returned {status}: {body}")))
}
