//! Chat-completion gateway core: provider resolution, backend invocation,
//! and response normalization for Anthropic and Ollama

pub mod backend;
pub mod catalog;
pub mod convert;
mod error;
mod handler;
mod normalize;
pub mod protocol;
mod resolver;
mod state;
pub mod types;

pub use error::LlmError;
pub use handler::chat_router;
pub use normalize::{event_stream, normalize};
pub use resolver::{ConnectionParams, ProviderKind, ResolvedTarget, Resolver};
pub use state::LlmState;
