//! Static catalog of models advertised by the gateway
//!
//! The catalog is advisory: requests may name any model and the backend
//! decides whether it exists.

use crate::resolver::ProviderKind;

/// A model advertised for a provider
#[derive(Debug, Clone, Copy)]
pub struct ModelInfo {
    /// Bare model identifier, without the provider prefix
    pub id: &'static str,
    /// Short human-readable description
    pub description: &'static str,
}

const ANTHROPIC_MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "claude-sonnet-4-6",
        description: "Balanced model for most tasks",
    },
    ModelInfo {
        id: "claude-opus-4-6",
        description: "Most capable model for complex tasks",
    },
    ModelInfo {
        id: "claude-haiku-4-5",
        description: "Fast, lightweight model",
    },
];

const OLLAMA_MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "llama3.2:latest",
        description: "Meta Llama 3.2, served locally",
    },
    ModelInfo {
        id: "mistral",
        description: "Mistral 7B, served locally",
    },
    ModelInfo {
        id: "gemma2",
        description: "Google Gemma 2, served locally",
    },
];

/// Models advertised for a provider
pub const fn models_for(kind: ProviderKind) -> &'static [ModelInfo] {
    match kind {
        ProviderKind::Anthropic => ANTHROPIC_MODELS,
        ProviderKind::Ollama => OLLAMA_MODELS,
    }
}
