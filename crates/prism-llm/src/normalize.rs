//! Normalization of raw backend output into the gateway response shape

use futures_util::{Stream, StreamExt};

use crate::backend::ChunkStream;
use crate::resolver::ResolvedTarget;
use crate::types::{BackendCompletion, ChatMessage, ChatResponse, Choice, Role, StreamEvent, Usage};

/// Normalize a raw backend completion into the gateway response
///
/// The provider label comes from the resolved target, never from the
/// backend payload. Choice order, `finish_reason` values, and the
/// presence or absence of usage are preserved exactly as the backend
/// reported them.
pub fn normalize(target: &ResolvedTarget, completion: BackendCompletion) -> ChatResponse {
    let choices = completion
        .choices
        .into_iter()
        .map(|choice| Choice {
            index: choice.index,
            message: ChatMessage {
                role: Role::from_backend(&choice.message.role),
                content: choice.message.content.unwrap_or_default(),
            },
            finish_reason: choice.finish_reason,
        })
        .collect();

    ChatResponse {
        id: completion.id,
        model: completion.model,
        provider: target.provider.as_str().to_owned(),
        choices,
        usage: completion.usage.map(|usage| Usage {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        }),
    }
}

enum StreamPhase {
    Active(ChunkStream),
    Finished,
}

/// Turn a raw chunk stream into the gateway's event stream
///
/// Every chunk becomes one content frame, empty deltas included, so a
/// well-formed upstream stream of `n` chunks yields `n + 1` events.
/// A chunk error becomes the terminal frame itself and the upstream
/// stream is never polled again afterwards.
pub fn event_stream(chunks: ChunkStream) -> impl Stream<Item = StreamEvent> + Send {
    futures_util::stream::unfold(StreamPhase::Active(chunks), |phase| async move {
        let StreamPhase::Active(mut chunks) = phase else {
            return None;
        };
        match chunks.next().await {
            Some(Ok(chunk)) => Some((
                StreamEvent::delta(chunk.content().to_owned()),
                StreamPhase::Active(chunks),
            )),
            Some(Err(error)) => {
                tracing::warn!(%error, "stream failed mid-flight");
                Some((StreamEvent::failed(error.to_string()), StreamPhase::Finished))
            }
            None => Some((StreamEvent::done(), StreamPhase::Finished)),
        }
    })
}
