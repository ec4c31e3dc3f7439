//! Model registry
//!
//! Immutable table of model identifiers to their configuration, plus the
//! language table used for per-language default models.

pub mod languages;

pub use languages::{LanguageProfile, LanguageTable};

use crate::core::types::{Capability, ModelConfig, Provider};
use crate::utils::error::{GatewayError, Result};
use std::collections::HashMap;

/// Read-only table of configured models
///
/// Ids are unique and fixed at construction. Failover targets are not checked
/// here; unknown ids are skipped at execution time.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: Vec<ModelConfig>,
    index: HashMap<String, usize>,
}

impl ModelRegistry {
    /// Build a registry, rejecting empty or duplicate ids
    pub fn new(models: Vec<ModelConfig>) -> Result<Self> {
        let mut index = HashMap::with_capacity(models.len());

        for (position, model) in models.iter().enumerate() {
            if model.id.trim().is_empty() {
                return Err(GatewayError::config("Model id must not be empty"));
            }
            if index.insert(model.id.clone(), position).is_some() {
                return Err(GatewayError::config(format!(
                    "Duplicate model id: {}",
                    model.id
                )));
            }
        }

        Ok(Self { models, index })
    }

    /// Look up a model by id
    pub fn get(&self, id: &str) -> Option<&ModelConfig> {
        self.index.get(id).map(|&position| &self.models[position])
    }

    /// Whether a model id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All models, in configuration order
    pub fn all(&self) -> &[ModelConfig] {
        &self.models
    }

    /// Registered model ids, in configuration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|model| model.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Built-in model set, without credentials
pub fn builtin_models() -> Vec<ModelConfig> {
    use Capability::*;

    vec![
        ModelConfig::new("gpt-4", Provider::OpenAI)
            .with_name("GPT-4")
            .with_endpoint("https://api.openai.com/v1/chat/completions")
            .with_limits(8192, 0.1)
            .with_capabilities([Text, Code, FunctionCalling, Streaming]),
        ModelConfig::new("gpt-4o", Provider::OpenAI)
            .with_name("GPT-4o")
            .with_endpoint("https://api.openai.com/v1/chat/completions")
            .with_limits(8192, 0.1)
            .with_capabilities([Text, Code, Vision, FunctionCalling, Streaming]),
        ModelConfig::new("claude", Provider::Anthropic)
            .with_name("Claude")
            .with_endpoint("https://api.anthropic.com/v1/messages")
            .with_limits(4096, 0.1)
            .with_capabilities([Text, Code, FunctionCalling, Streaming]),
        ModelConfig::new("gemini-vision", Provider::Google)
            .with_name("Gemini Pro Vision")
            .with_endpoint(
                "https://generativelanguage.googleapis.com/v1/models/gemini-pro-vision:generateContent",
            )
            .with_limits(2048, 0.2)
            .with_capabilities([Text, Code, Vision]),
        ModelConfig::new("mistral", Provider::Mistral)
            .with_name("Mistral")
            .with_endpoint("https://api.mistral.ai/v1/chat/completions")
            .with_limits(4096, 0.1)
            .with_capabilities([Text, Code, FunctionCalling, Streaming]),
    ]
}
