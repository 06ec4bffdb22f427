//! Anthropic Messages API backend implementation

use async_trait::async_trait;
use eventsource_stream::Eventsource;
use futures_util::StreamExt;
use reqwest::Client;
use secrecy::ExposeSecret;

use super::{Backend, ChunkStream, reject_error_status};
use crate::convert::anthropic::{build_request, chunk_from_event};
use crate::error::LlmError;
use crate::protocol::anthropic::{AnthropicResponse, AnthropicStreamEvent};
use crate::resolver::ResolvedTarget;
use crate::types::{BackendCompletion, ChatRequest};

/// Default Anthropic API base URL
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";

/// Anthropic API version header value
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic Messages API backend
pub struct AnthropicBackend {
    client: Client,
}

impl AnthropicBackend {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build the messages endpoint URL for a resolved target
    fn messages_url(target: &ResolvedTarget) -> String {
        let base = target
            .params
            .api_base
            .as_ref()
            .map_or(DEFAULT_BASE_URL, |url| url.as_str());
        format!("{}/messages", base.trim_end_matches('/'))
    }

    async fn send(
        &self,
        target: &ResolvedTarget,
        request: &ChatRequest,
        stream: bool,
    ) -> Result<reqwest::Response, LlmError> {
        let mut wire_request = build_request(target, request);
        wire_request.stream = stream.then_some(true);

        let mut builder = self
            .client
            .post(Self::messages_url(target))
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&wire_request);

        if let Some(key) = &target.params.api_key {
            builder = builder.header("x-api-key", key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(provider = "anthropic", error = %e, "upstream request failed");
            LlmError::Upstream(e.to_string())
        })?;

        reject_error_status("anthropic", response).await
    }
}

#[async_trait]
impl Backend for AnthropicBackend {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn complete(
        &self,
        target: &ResolvedTarget,
        request: &ChatRequest,
    ) -> Result<BackendCompletion, LlmError> {
        let response = self.send(target, request, false).await?;

        let wire_response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Upstream(format!("failed to parse response: {e}")))?;

        Ok(wire_response.into())
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
                    if data.is_empty() {
                        None
                    } else {
                        match serde_json::from_str::<AnthropicStreamEvent>(data) {
                            Ok(stream_event) => chunk_from_event(stream_event),
                            Err(e) => {
                                tracing::debug!(error = %e, "skipping unparseable Anthropic SSE event");
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
