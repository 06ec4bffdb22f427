//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use prism_config::{Config, HealthConfig, ServerConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: None,
                },
                llm: prism_config::LlmConfig::default(),
                telemetry: None,
            },
        }
    }

    /// Point the anthropic provider at a mock backend
    pub fn with_anthropic(mut self, base_url: &str, api_key: &str) -> Self {
        self.config.llm.anthropic.base_url = Some(base_url.parse().expect("valid URL"));
        self.config.llm.anthropic.api_key = Some(SecretString::from(api_key));
        self
    }

    /// Point the ollama provider at a mock backend
    pub fn with_ollama(mut self, base_url: &str) -> Self {
        self.config.llm.ollama.base_url = base_url.parse().expect("valid URL");
        self
    }

    /// Set the default provider
    pub fn with_default_provider(mut self, provider: &str) -> Self {
        self.config.llm.default_provider = provider.to_owned();
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
