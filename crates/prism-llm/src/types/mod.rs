//! Canonical gateway types shared by the resolver, normalizer, and handlers

mod backend;
mod message;
mod request;
mod response;
mod stream;

pub use backend::{BackendChoice, BackendChunk, BackendChunkChoice, BackendCompletion, BackendDelta, BackendMessage, BackendUsage};
pub use message::{ChatMessage, Role};
pub use request::ChatRequest;
pub use response::{ChatResponse, Choice, Usage};
pub use stream::StreamEvent;
