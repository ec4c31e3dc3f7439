//! Model configuration entries

use super::*;
use crate::core::registry::builtin_models;
use crate::core::types::{Capability, ModelConfig, Provider};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One model as written in the configuration file
///
/// The API key is never written in the file. It is read once at startup from
/// the environment variable named by `api_key_env`, which defaults to the
/// provider's conventional variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Unique model identifier
    pub id: String,
    /// Display name, defaults to the id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Provider family
    pub provider: Provider,
    /// Provider endpoint
    #[serde(default)]
    pub endpoint: String,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Supported capabilities
    #[serde(default)]
    pub capabilities: BTreeSet<Capability>,
    /// Environment variable holding the API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
}

impl ModelEntry {
    /// Environment variable to read the API key from
    pub fn api_key_env(&self) -> &str {
        self.api_key_env
            .as_deref()
            .unwrap_or_else(|| self.provider.default_api_key_env())
    }

    /// Build the runtime model, resolving the key through `lookup`
    pub fn to_model_config(&self, lookup: impl Fn(&str) -> Option<String>) -> ModelConfig {
        let mut model = ModelConfig::new(self.id.clone(), self.provider)
            .with_name(self.name.clone().unwrap_or_else(|| self.id.clone()))
            .with_endpoint(self.endpoint.clone())
            .with_limits(self.max_tokens, self.temperature)
            .with_capabilities(self.capabilities.iter().copied());

        if let Some(key) = lookup(self.api_key_env()).filter(|key| !key.trim().is_empty()) {
            model = model.with_api_key(key);
        }

        model
    }
}

impl From<&ModelConfig> for ModelEntry {
    fn from(model: &ModelConfig) -> Self {
        Self {
            id: model.id.clone(),
            name: Some(model.name.clone()),
            provider: model.provider,
            endpoint: model.endpoint.clone(),
            max_tokens: model.max_tokens,
            temperature: model.temperature,
            capabilities: model.capabilities.clone(),
            api_key_env: None,
        }
    }
}

/// Built-in model entries
pub fn default_models() -> Vec<ModelEntry> {
    builtin_models().iter().map(ModelEntry::from).collect()
}
