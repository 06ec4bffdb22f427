//! Provider resolution: map a logical request onto a concrete backend
//! target before anything touches the network

use std::str::FromStr;

use prism_config::LlmConfig;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::LlmError;

/// Supported backend provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Anthropic Messages API
    Anthropic,
    /// Local Ollama server (OpenAI-compatible endpoint)
    Ollama,
}

impl ProviderKind {
    /// Canonical provider name, also used as the model prefix
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::Ollama => "ollama",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anthropic" => Ok(Self::Anthropic),
            "ollama" => Ok(Self::Ollama),
            other => Err(LlmError::InvalidProvider {
                provider: other.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection parameters the backend call needs beyond the model name
#[derive(Debug, Clone, Default)]
pub struct ConnectionParams {
    /// API key, present only when the provider requires one and it is
    /// configured
    pub api_key: Option<SecretString>,
    /// Base URL override for providers addressed by location
    pub api_base: Option<Url>,
}

/// Fully resolved invocation target
#[derive(Debug, Clone)]
pub struct ResolvedTarget {
    /// Provider that will serve the request
    pub provider: ProviderKind,
    /// Provider-prefixed model identifier (e.g. `anthropic/claude-sonnet-4-6`)
    pub model: String,
    /// Connection parameters for the backend call
    pub params: ConnectionParams,
}

impl ResolvedTarget {
    /// Model name with the provider prefix stripped, as the backend
    /// wire format expects it
    pub fn bare_model(&self) -> &str {
        self.model
            .split_once('/')
            .map_or(self.model.as_str(), |(_, rest)| rest)
    }
}

/// Resolves logical provider/model pairs against the gateway configuration
#[derive(Debug, Clone)]
pub struct Resolver {
    config: LlmConfig,
}

impl Resolver {
    pub const fn new(config: LlmConfig) -> Self {
        Self { config }
    }

    /// Name of the provider used when a request does not pick one
    pub fn default_provider(&self) -> &str {
        &self.config.default_provider
    }

    /// Resolve a request's provider and model into a concrete target
    ///
    /// Absent or empty inputs fall back to configured defaults. The
    /// provider is validated before the model is considered, so an
    /// unknown provider fails identically regardless of the model.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::InvalidProvider` when the provider is not in
    /// the supported set.
    pub fn resolve(
        &self,
        provider: Option<&str>,
        model: Option<&str>,
    ) -> Result<ResolvedTarget, LlmError> {
        let provider = match provider {
            Some(name) if !name.is_empty() => name,
            _ => &self.config.default_provider,
        };
        let kind = ProviderKind::from_str(provider)?;

        let model = match model {
            Some(name) if !name.is_empty() => name,
            _ => self.default_model(kind),
        };

        Ok(ResolvedTarget {
            provider: kind,
            model: Self::prefix_model(kind, model),
            params: self.connection_params(kind),
        })
    }

    fn default_model(&self, kind: ProviderKind) -> &str {
        match kind {
            ProviderKind::Anthropic => &self.config.anthropic.default_model,
            ProviderKind::Ollama => &self.config.ollama.default_model,
        }
    }

    /// Prefix the model with the provider name, leaving already-prefixed
    /// names untouched
    fn prefix_model(kind: ProviderKind, model: &str) -> String {
        let prefix = kind.as_str();
        if model
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
        {
            model.to_owned()
        } else {
            format!("{prefix}/{model}")
        }
    }

    fn connection_params(&self, kind: ProviderKind) -> ConnectionParams {
        match kind {
            ProviderKind::Anthropic => ConnectionParams {
                api_key: self
                    .config
                    .anthropic
                    .api_key
                    .as_ref()
                    .filter(|key| !key.expose_secret().is_empty())
                    .cloned(),
                api_base: self.config.anthropic.base_url.clone(),
            },
            ProviderKind::Ollama => ConnectionParams {
                api_key: None,
                api_base: Some(self.config.ollama.base_url.clone()),
            },
        }
    }
}
