//! Core gateway state: resolution, backend dispatch, and normalization

use std::pin::Pin;
use std::sync::Arc;

use futures_util::Stream;
use prism_config::LlmConfig;
use reqwest::Client;

use crate::backend::{AnthropicBackend, Backend, OllamaBackend};
use crate::error::LlmError;
use crate::normalize::{event_stream, normalize};
use crate::resolver::{ProviderKind, Resolver};
use crate::types::{ChatRequest, ChatResponse, StreamEvent};

/// Shared state for chat route handlers
#[derive(Clone)]
pub struct LlmState {
    inner: Arc<LlmStateInner>,
}

struct LlmStateInner {
    resolver: Resolver,
    anthropic: AnthropicBackend,
    ollama: OllamaBackend,
}

impl LlmState {
    /// Build the gateway state from configuration
    ///
    /// Backends share one HTTP client so connection pools are reused.
    pub fn from_config(config: LlmConfig) -> Self {
        let client = Client::new();
        Self {
            inner: Arc::new(LlmStateInner {
                resolver: Resolver::new(config),
                anthropic: AnthropicBackend::new(client.clone()),
                ollama: OllamaBackend::new(client),
            }),
        }
    }

    /// Resolver backing this state
    pub fn resolver(&self) -> &Resolver {
        &self.inner.resolver
    }

    fn backend(&self, kind: ProviderKind) -> &dyn Backend {
        match kind {
            ProviderKind::Anthropic => &self.inner.anthropic,
            ProviderKind::Ollama => &self.inner.ollama,
        }
    }

    /// Execute a non-streaming completion
    ///
    /// # Errors
    ///
    /// Returns `LlmError::InvalidProvider` when resolution fails and
    /// `LlmError::Upstream` when the backend call fails.
    pub async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let target = self
            .inner
            .resolver
            .resolve(request.provider.as_deref(), request.model.as_deref())?;

        tracing::info!(
            provider = %target.provider,
            model = %target.model,
            "dispatching completion"
        );

        let completion = self.backend(target.provider).complete(&target, request).await?;
        Ok(normalize(&target, completion))
    }

    /// Execute a streaming completion
    ///
    /// Resolution failures surface as an error so the handler can answer
    /// with a plain HTTP status. Once resolution has succeeded every
    /// later failure, including the backend call itself, is folded into
    /// the stream's terminal frame.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::InvalidProvider` when resolution fails.
    pub async fn complete_stream(
        &self,
        request: &ChatRequest,
    ) -> Result<Pin<Box<dyn Stream<Item = StreamEvent> + Send>>, LlmError> {
        let target = self
            .inner
            .resolver
            .resolve(request.provider.as_deref(), request.model.as_deref())?;

        tracing::info!(
            provider = %target.provider,
            model = %target.model,
            "dispatching streaming completion"
        );

        match self.backend(target.provider).complete_stream(&target, request).await {
            Ok(chunks) => Ok(Box::pin(event_stream(chunks))),
            Err(error) => {
                tracing::warn!(provider = %target.provider, %error, "stream setup failed");
                Ok(Box::pin(futures_util::stream::iter([StreamEvent::failed(
                    error.to_string(),
                )])))
            }
        }
    }
}
