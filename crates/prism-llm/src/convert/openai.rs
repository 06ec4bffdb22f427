//! Conversion between gateway types and the OpenAI-compatible wire format

use crate::protocol::openai::{OpenAiMessage, OpenAiRequest};
use crate::resolver::ResolvedTarget;
use crate::types::ChatRequest;

/// Build an OpenAI-compatible request from a gateway request
///
/// Roles map one-to-one, so messages carry over in order; the wire
/// model is the bare name without the provider prefix.
pub fn build_request(target: &ResolvedTarget, request: &ChatRequest) -> OpenAiRequest {
    OpenAiRequest {
        model: target.bare_model().to_owned(),
        messages: request
            .messages
            .iter()
            .map(|message| OpenAiMessage {
                role: message.role.as_str().to_owned(),
                content: message.content.clone(),
            })
            .collect(),
        temperature: Some(request.temperature),
        max_tokens: Some(request.max_tokens),
        stream: None,
    }
}
