//! Request context and response types

use serde::{Deserialize, Serialize};

/// Caller-declared task complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

/// Signals used to pick a model for a request
///
/// Every field is optional. Accepts both `snake_case` and the front-end's
/// `camelCase` spelling of `user_preference`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteContext {
    /// Name of the file being worked on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Language identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Code or text the prompt refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Editor action that triggered the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Model explicitly requested by the user
    #[serde(alias = "userPreference", skip_serializing_if = "Option::is_none")]
    pub user_preference: Option<String>,
    /// Declared complexity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,
}

impl RouteContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_user_preference(mut self, model: impl Into<String>) -> Self {
        self.user_preference = Some(model.into());
        self
    }

    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = Some(complexity);
        self
    }
}

/// Result of a routed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    /// Generated content
    pub content: String,
    /// Model that produced the content (may differ from the selected one after failover)
    pub model: String,
    /// Tokens reported by the provider
    pub tokens: u64,
    /// Whether the response was served from the completed-response cache
    pub cached: bool,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
}

/// Raw output of a single gateway call
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProviderOutput {
    pub content: String,
    #[serde(default)]
    pub tokens: u64,
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl ProviderOutput {
    pub fn new(content: impl Into<String>, tokens: u64) -> Self {
        Self {
            content: content.into(),
            tokens,
            confidence: None,
        }
    }
}
