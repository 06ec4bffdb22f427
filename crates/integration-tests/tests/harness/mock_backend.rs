//! Mock upstream server for integration tests
//!
//! Serves both an OpenAI-compatible chat completions endpoint (as Ollama
//! does) and an Anthropic messages endpoint, returning canned responses.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

/// Canned completion text, split per word when streaming
const MOCK_CONTENT: &str = "Hello from the mock backend";

/// Mock upstream that returns predictable responses
pub struct MockBackend {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    request_count: AtomicU32,
    /// Number of requests to fail with 500 before succeeding (0 = never)
    fail_count: AtomicU32,
    /// Model name from the most recent request
    last_model: Mutex<Option<String>>,
    /// `x-api-key` header from the most recent Anthropic request
    last_api_key: Mutex<Option<String>>,
}

impl MockBackend {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(0).await
    }

    /// Start a mock server that fails the first `n` requests with 500
    pub async fn start_failing(n: u32) -> anyhow::Result<Self> {
        Self::start_inner(n).await
    }

    async fn start_inner(fail_count: u32) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            request_count: AtomicU32::new(0),
            fail_count: AtomicU32::new(fail_count),
            last_model: Mutex::new(None),
            last_api_key: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_openai_completions))
            .route("/v1/messages", routing::post(handle_anthropic_messages))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL suitable for the ollama provider (paths appended under it)
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Base URL suitable for the anthropic provider (includes `/v1`)
    pub fn anthropic_base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Canned completion text served by this mock
    pub fn content(&self) -> &'static str {
        MOCK_CONTENT
    }

    /// Number of requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Model name from the most recent request
    pub fn last_model(&self) -> Option<String> {
        self.state.last_model.lock().unwrap().clone()
    }

    /// `x-api-key` header from the most recent Anthropic request
    pub fn last_api_key(&self) -> Option<String> {
        self.state.last_api_key.lock().unwrap().clone()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

// -- Wire types --

#[derive(Debug, Deserialize)]
struct InboundRequest {
    model: String,
    #[serde(default)]
    stream: Option<bool>,
}

/// Consume a failure budget slot, returning the canned 500 if one remains
fn take_failure(state: &MockState) -> Option<axum::response::Response> {
    let remaining = state.fail_count.load(Ordering::Relaxed);
    if remaining == 0 {
        return None;
    }
    state.fail_count.fetch_sub(1, Ordering::Relaxed);
    Some(
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": {"message": "mock intentional failure", "type": "server_error"}
            })),
        )
            .into_response(),
    )
}

fn sse_response(body: String) -> axum::response::Response {
    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/event-stream")],
        body,
    )
        .into_response()
}

// -- OpenAI-compatible handler (Ollama) --

async fn handle_openai_completions(
    State(state): State<Arc<MockState>>,
    Json(req): Json<InboundRequest>,
) -> axum::response::Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    *state.last_model.lock().unwrap() = Some(req.model.clone());

    if let Some(failure) = take_failure(&state) {
        return failure;
    }

    if req.stream.unwrap_or(false) {
        let mut body = String::new();
        for word in MOCK_CONTENT.split_inclusive(' ') {
            let chunk = serde_json::json!({
                "id": "chatcmpl-mock-stream",
                "object": "chat.completion.chunk",
                "model": req.model,
                "choices": [{"index": 0, "delta": {"content": word}}]
            });
            body.push_str(&format!("data: {chunk}\n\n"));
        }
        let stop = serde_json::json!({
            "id": "chatcmpl-mock-stream",
            "object": "chat.completion.chunk",
            "model": req.model,
            "choices": [{"index": 0, "delta": {}, "finish_reason": "stop"}]
        });
        body.push_str(&format!("data: {stop}\n\n"));
        body.push_str("data: [DONE]\n\n");
        return sse_response(body);
    }

    Json(serde_json::json!({
        "id": "chatcmpl-mock-123",
        "object": "chat.completion",
        "created": 1_700_000_000u64,
        "model": req.model,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": MOCK_CONTENT},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    }))
    .into_response()
}

// -- Anthropic handler --

async fn handle_anthropic_messages(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(req): Json<InboundRequest>,
) -> axum::response::Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    *state.last_model.lock().unwrap() = Some(req.model.clone());
    *state.last_api_key.lock().unwrap() = headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    if let Some(failure) = take_failure(&state) {
        return failure;
    }

    if req.stream.unwrap_or(false) {
        let mut body = String::new();
        body.push_str("event: message_start\ndata: {\"type\": \"message_start\"}\n\n");
        body.push_str("event: content_block_start\ndata: {\"type\": \"content_block_start\"}\n\n");
        for word in MOCK_CONTENT.split_inclusive(' ') {
            let event = serde_json::json!({
                "type": "content_block_delta",
                "index": 0,
                "delta": {"type": "text_delta", "text": word}
            });
            body.push_str(&format!("event: content_block_delta\ndata: {event}\n\n"));
        }
        body.push_str("event: content_block_stop\ndata: {\"type\": \"content_block_stop\"}\n\n");
        body.push_str("event: message_stop\ndata: {\"type\": \"message_stop\"}\n\n");
        return sse_response(body);
    }

    Json(serde_json::json!({
        "id": "msg_mock_123",
        "model": req.model,
        "role": "assistant",
        "content": [{"type": "text", "text": MOCK_CONTENT}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 10, "output_tokens": 5}
    }))
    .into_response()
}
