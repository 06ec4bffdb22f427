//! Axum route handlers for the chat endpoints

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use futures_util::{Stream, StreamExt};

use crate::catalog;
use crate::error::LlmError;
use crate::resolver::ProviderKind;
use crate::state::LlmState;
use crate::types::ChatRequest;

/// Build the chat router with all endpoints
pub fn chat_router(state: LlmState) -> Router {
    Router::new()
        .route("/chat/completions", routing::post(chat_completions))
        .route("/chat/models", routing::get(list_models))
        .with_state(state)
}

/// Handle `POST /chat/completions`
async fn chat_completions(State(state): State<LlmState>, Json(request): Json<ChatRequest>) -> Response {
    if let Err(e) = request.validate() {
        return error_response(&e);
    }

    if request.stream {
        match state.complete_stream(&request).await {
            Ok(stream) => sse_response(stream).into_response(),
            Err(e) => error_response(&e),
        }
    } else {
        match state.complete(&request).await {
            Ok(response) => Json(response).into_response(),
            Err(e) => error_response(&e),
        }
    }
}

/// Handle `GET /chat/models`
async fn list_models(State(state): State<LlmState>) -> Response {
    let models: Vec<serde_json::Value> = [ProviderKind::Anthropic, ProviderKind::Ollama]
        .into_iter()
        .flat_map(|kind| {
            catalog::models_for(kind).iter().map(move |model| {
                serde_json::json!({
                    "id": model.id,
                    "provider": kind.as_str(),
                    "description": model.description,
                })
            })
        })
        .collect();

    Json(serde_json::json!({
        "default_provider": state.resolver().default_provider(),
        "models": models,
    }))
    .into_response()
}

/// Build the SSE response for a streaming completion
fn sse_response(
    stream: impl Stream<Item = crate::types::StreamEvent> + Send + 'static,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let events = stream.map(|event| {
        let data = serde_json::to_string(&event).unwrap_or_default();
        Ok(Event::default().data(data))
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// Convert a gateway error to a JSON error response
fn error_response(error: &LlmError) -> Response {
    let body = serde_json::json!({
        "error": {
            "message": error.to_string(),
            "type": error.error_type(),
        }
    });

    (error.status_code(), Json(body)).into_response()
}
