use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Provider names accepted in `default_provider`
pub const SUPPORTED_PROVIDERS: &[&str] = &["anthropic", "ollama"];

/// LLM gateway configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// Provider used when a request does not name one
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Anthropic backend configuration
    #[serde(default)]
    pub anthropic: AnthropicConfig,
    /// Ollama backend configuration
    #[serde(default)]
    pub ollama: OllamaConfig,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            anthropic: AnthropicConfig::default(),
            ollama: OllamaConfig::default(),
        }
    }
}

/// Anthropic backend configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnthropicConfig {
    /// API key; when unset, no key header is sent upstream
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Model used when a request does not name one
    #[serde(default = "default_anthropic_model")]
    pub default_model: String,
    /// Base URL override for the Messages API
    #[serde(default)]
    pub base_url: Option<Url>,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            default_model: default_anthropic_model(),
            base_url: None,
        }
    }
}

/// Ollama backend configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OllamaConfig {
    /// Local server endpoint
    #[serde(default = "default_ollama_base_url")]
    pub base_url: Url,
    /// Model used when a request does not name one
    #[serde(default = "default_ollama_model")]
    pub default_model: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_ollama_base_url(),
            default_model: default_ollama_model(),
        }
    }
}

fn default_provider() -> String {
    "anthropic".to_owned()
}

fn default_anthropic_model() -> String {
    "claude-sonnet-4-6".to_owned()
}

fn default_ollama_model() -> String {
    "llama3.2:latest".to_owned()
}

fn default_ollama_base_url() -> Url {
    Url::parse("http://localhost:11434").expect("valid default URL")
}
