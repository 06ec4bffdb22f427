//! Conversion between gateway types and the Anthropic wire format

use crate::error::LlmError;
use crate::protocol::anthropic::{
    AnthropicMessage, AnthropicRequest, AnthropicResponse, AnthropicResponseBlock, AnthropicStreamDelta,
    AnthropicStreamEvent,
};
use crate::resolver::ResolvedTarget;
use crate::types::{
    BackendChoice, BackendChunk, BackendChunkChoice, BackendCompletion, BackendDelta, BackendMessage, BackendUsage,
    ChatRequest, Role,
};

/// Build an Anthropic request from a gateway request
///
/// System messages move to the top-level `system` field (joined when
/// there are several); the wire model is the bare name without the
/// provider prefix.
pub fn build_request(target: &ResolvedTarget, request: &ChatRequest) -> AnthropicRequest {
    let mut system_parts = Vec::new();
    let mut messages = Vec::new();

    for message in &request.messages {
        match message.role {
            Role::System => system_parts.push(message.content.clone()),
            Role::User | Role::Assistant => messages.push(AnthropicMessage {
                role: message.role.as_str().to_owned(),
                content: message.content.clone(),
            }),
        }
    }

    AnthropicRequest {
        model: target.bare_model().to_owned(),
        max_tokens: request.max_tokens,
        system: if system_parts.is_empty() {
            None
        } else {
            Some(system_parts.join("\n\n"))
        },
        messages,
        temperature: Some(request.temperature),
        stream: None,
    }
}

/// Map Anthropic stop reasons onto the OpenAI-style vocabulary where a
/// direct equivalent exists, leaving everything else untouched
fn map_stop_reason(reason: Option<String>) -> Option<String> {
    reason.map(|reason| match reason.as_str() {
        "end_turn" => "stop".to_owned(),
        "max_tokens" => "length".to_owned(),
        _ => reason,
    })
}

impl From<AnthropicResponse> for BackendCompletion {
    fn from(response: AnthropicResponse) -> Self {
        let content: String = response
            .content
            .into_iter()
            .filter_map(|block| match block {
                AnthropicResponseBlock::Text { text } => Some(text),
                AnthropicResponseBlock::Other => None,
            })
            .collect();

        Self {
            id: response.id,
            model: response.model,
            choices: vec![BackendChoice {
                index: 0,
                message: BackendMessage {
                    role: response.role,
                    content: Some(content),
                },
                finish_reason: map_stop_reason(response.stop_reason),
            }],
            usage: response.usage.map(|usage| BackendUsage {
                prompt_tokens: usage.input_tokens,
                completion_tokens: usage.output_tokens,
                total_tokens: usage.input_tokens + usage.output_tokens,
            }),
        }
    }
}

/// Convert one Anthropic stream event into a canonical chunk
///
/// Only text deltas carry content; lifecycle and keepalive events are
/// dropped. An `error` event surfaces as a stream failure.
pub fn chunk_from_event(event: AnthropicStreamEvent) -> Option<Result<BackendChunk, LlmError>> {
    match event {
        AnthropicStreamEvent::ContentBlockDelta {
            delta: AnthropicStreamDelta::TextDelta { text },
        } => Some(Ok(BackendChunk {
            choices: vec![BackendChunkChoice {
                delta: Some(BackendDelta { content: Some(text) }),
            }],
        })),
        AnthropicStreamEvent::Error { error } => Some(Err(LlmError::Streaming(format!(
            "{}: {}",
            error.error_type, error.message
        )))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Resolver;
    use crate::types::ChatMessage;
    use prism_config::LlmConfig;

    fn target() -> ResolvedTarget {
        Resolver::new(LlmConfig::default())
            .resolve(Some("anthropic"), Some("claude-opus-4-6"))
            .unwrap()
    }

    fn message(role: Role, content: &str) -> ChatMessage {
        ChatMessage {
            role,
            content: content.to_owned(),
        }
    }

    #[test]
    fn system_messages_move_to_the_top_level_field() {
        let request = ChatRequest {
            messages: vec![
                message(Role::System, "Be brief."),
                message(Role::User, "hi"),
                message(Role::Assistant, "hello"),
                message(Role::User, "bye"),
            ],
            provider: None,
            model: None,
            temperature: 0.2,
            max_tokens: 256,
            stream: false,
        };
        let wire = build_request(&target(), &request);
        assert_eq!(wire.model, "claude-opus-4-6");
        assert_eq!(wire.system.as_deref(), Some("Be brief."));
        assert_eq!(wire.messages.len(), 3);
        assert_eq!(wire.messages[0].role, "user");
        assert_eq!(wire.max_tokens, 256);
    }

    #[test]
    fn response_becomes_a_single_choice_completion() {
        let response: AnthropicResponse = serde_json::from_value(serde_json::json!({
            "id": "msg_01",
            "model": "claude-opus-4-6",
            "role": "assistant",
            "content": [{"type": "text", "text": "Hello"}, {"type": "text", "text": " there"}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 5}
        }))
        .unwrap();

        let completion = BackendCompletion::from(response);
        assert_eq!(completion.choices.len(), 1);
        assert_eq!(completion.choices[0].message.content.as_deref(), Some("Hello there"));
        assert_eq!(completion.choices[0].finish_reason.as_deref(), Some("stop"));
        let usage = completion.usage.unwrap();
        assert_eq!((usage.prompt_tokens, usage.completion_tokens, usage.total_tokens), (10, 5, 15));
    }

    #[test]
    fn unknown_stop_reasons_pass_through() {
        assert_eq!(map_stop_reason(Some("max_tokens".to_owned())).as_deref(), Some("length"));
        assert_eq!(
            map_stop_reason(Some("stop_sequence".to_owned())).as_deref(),
            Some("stop_sequence")
        );
        assert_eq!(map_stop_reason(None), None);
    }

    #[test]
    fn only_text_deltas_produce_chunks() {
        let event: AnthropicStreamEvent = serde_json::from_value(serde_json::json!({
            "type": "content_block_delta",
            "index": 0,
            "delta": {"type": "text_delta", "text": "Hel"}
        }))
        .unwrap();
        let chunk = chunk_from_event(event).unwrap().unwrap();
        assert_eq!(chunk.content(), "Hel");

        let ping: AnthropicStreamEvent = serde_json::from_value(serde_json::json!({"type": "ping"})).unwrap();
        assert!(chunk_from_event(ping).is_none());
    }

    #[test]
    fn error_events_fail_the_stream() {
        let event: AnthropicStreamEvent = serde_json::from_value(serde_json::json!({
            "type": "error",
            "error": {"type": "overloaded_error", "message": "try later"}
        }))
        .unwrap();
        let result = chunk_from_event(event).unwrap();
        assert!(matches!(result, Err(LlmError::Streaming(ref msg)) if msg.contains("overloaded")));
    }
}
