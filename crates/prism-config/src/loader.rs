use std::path::Path;

use crate::{Config, SUPPORTED_PROVIDERS};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the default provider is unknown or a default
    /// model is empty
    pub fn validate(&self) -> anyhow::Result<()> {
        if !SUPPORTED_PROVIDERS.contains(&self.llm.default_provider.as_str()) {
            anyhow::bail!(
                "unknown default_provider '{}' (expected one of: {})",
                self.llm.default_provider,
                SUPPORTED_PROVIDERS.join(", ")
            );
        }

        if self.llm.anthropic.default_model.is_empty() {
            anyhow::bail!("llm.anthropic.default_model must not be empty");
        }

        if self.llm.ollama.default_model.is_empty() {
            anyhow::bail!("llm.ollama.default_model must not be empty");
        }

        Ok(())
    }
}
