//! Ollama backend, speaking the OpenAI-compatible chat completions API

use async_trait::async_trait;
use eventsource_stream::Eventsource;
use futures_util::StreamExt;
use reqwest::Client;

use super::{Backend, ChunkStream, reject_error_status};
use crate::convert::openai::build_request;
use crate::error::LlmError;
use crate::resolver::ResolvedTarget;
use crate::types::{BackendChunk, BackendCompletion, ChatRequest};

/// Ollama backend
pub struct OllamaBackend {
    client: Client,
}

impl OllamaBackend {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build the chat completions endpoint URL for a resolved target
    fn completions_url(target: &ResolvedTarget) -> Result<String, LlmError> {
        let base = target
            .params
            .api_base
            .as_ref()
            .ok_or_else(|| LlmError::Upstream("no base URL resolved for ollama".to_owned()))?;
        Ok(format!("{}/v1/chat/completions", base.as_str().trim_end_matches('/')))
    }

    async fn send(
        &self,
        target: &ResolvedTarget,
        request: &ChatRequest,
        stream: bool,
    ) -> Result<reqwest::Response, LlmError> {
        let mut wire_request = build_request(target, request);
        wire_request.stream = stream.then_some(true);

        let response = self
            .client
            .post(Self::completions_url(target)?)
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = "ollama", error = %e, "upstream request failed");
                LlmError::Upstream(e.to_string())
            })?;

        reject_error_status("ollama", response).await
    }
}

#[async_trait]
impl Backend for OllamaBackend {
    fn name(&self) -> &'static str {
        "ollama"
    }

    async fn complete(
        &self,
        target: &ResolvedTarget,
        request: &ChatRequest,
    ) -> Result<BackendCompletion, LlmError> {
        let response = self.send(target, request, false).await?;

        response
            .json()
            .await
            .map_err(|e| LlmError::Upstream(format!("failed to parse response: {e}")))
    }

    async fn complete_stream(
        &self,
        target: &ResolvedTarget,
        request: &ChatRequest,
    ) -> Result<ChunkStream, LlmError> {
        let response = self.send(target, request, true).await?;

        let mapped = response.bytes_stream().eventsource().filter_map(|result| {
            let chunk = match result {
                Ok(event) => {
                    let data = event.data.trim();
                    if data.is_empty() || data == "[DONE]" {
                        None
                    } else {
                        match serde_json::from_str::<BackendChunk>(data) {
                            Ok(chunk) => Some(Ok(chunk)),
                            Err(e) => {
                                tracing::debug!(error = %e, "skipping unparseable SSE chunk");
                                None
                            }
                        }
                    }
                }
                Err(e) => Some(Err(LlmError::Streaming(e.to_string()))),
            };

            async move { chunk }
        });

        Ok(Box::pin(mapped))
    }
}
