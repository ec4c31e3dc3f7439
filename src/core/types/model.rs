//! Model configuration types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// AI provider family a model belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAI,
    Anthropic,
    Google,
    Mistral,
}

impl Provider {
    /// All provider kinds, in a stable order
    pub const ALL: [Provider; 4] = [
        Provider::OpenAI,
        Provider::Anthropic,
        Provider::Google,
        Provider::Mistral,
    ];

    /// Lower-case identifier used in logs and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAI => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Google => "google",
            Provider::Mistral => "mistral",
        }
    }

    /// Environment variable holding this provider's API key
    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            Provider::OpenAI => "OPENAI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
            Provider::Google => "GOOGLE_API_KEY",
            Provider::Mistral => "MISTRAL_API_KEY",
        }
    }

    /// Confidence reported for a reply when the gateway gives none
    pub fn default_confidence(&self) -> f64 {
        match self {
            Provider::OpenAI => 0.9,
            Provider::Anthropic => 0.85,
            Provider::Google | Provider::Mistral => 0.8,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model capability flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Text,
    Code,
    Vision,
    FunctionCalling,
    Streaming,
}

/// Static configuration of a single model
///
/// Built once at startup. The API key is injected from the environment and is
/// never serialized.
#[derive(Clone, PartialEq, Serialize)]
pub struct ModelConfig {
    /// Unique model identifier
    pub id: String,
    /// Human readable name
    pub name: String,
    /// Provider family
    pub provider: Provider,
    /// Provider endpoint
    pub endpoint: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Supported capabilities
    pub capabilities: BTreeSet<Capability>,
    /// API key, if one was found at startup
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl ModelConfig {
    /// Create a model with no capabilities and no credentials
    pub fn new(id: impl Into<String>, provider: Provider) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            provider,
            endpoint: String::new(),
            max_tokens: 4096,
            temperature: 0.1,
            capabilities: BTreeSet::new(),
            api_key: None,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set generation limits
    pub fn with_limits(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    /// Set the capability set
    pub fn with_capabilities(mut self, capabilities: impl IntoIterator<Item = Capability>) -> Self {
        self.capabilities = capabilities.into_iter().collect();
        self
    }

    /// Attach an API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Check for a capability
    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Whether a non-empty API key is present
    pub fn has_credentials(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("provider", &self.provider)
            .field("endpoint", &self.endpoint)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("capabilities", &self.capabilities)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}
