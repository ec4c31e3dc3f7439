//! Router and selection configuration

use super::*;
use crate::core::registry::{LanguageProfile, LanguageTable};
use crate::core::router::{RouterConfig, SelectionPolicy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Router settings as written in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Per-attempt timeout in milliseconds
    #[serde(default = "default_attempt_timeout_ms")]
    pub attempt_timeout_ms: u64,
    /// Wrap prompts with file, language and code context
    #[serde(default = "default_true")]
    pub enhance_prompts: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            attempt_timeout_ms: default_attempt_timeout_ms(),
            enhance_prompts: true,
        }
    }
}

impl RoutingConfig {
    /// Runtime router settings
    pub fn to_router_config(&self) -> RouterConfig {
        RouterConfig::default()
            .with_attempt_timeout(Duration::from_millis(self.attempt_timeout_ms))
            .with_enhance_prompts(self.enhance_prompts)
    }
}

/// Selection rules as written in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_high_capability_model")]
    pub high_capability_model: String,
    #[serde(default = "default_long_context_model")]
    pub long_context_model: String,
    /// Content length in characters above which the long-context model is used
    #[serde(default = "default_long_context_threshold")]
    pub long_context_threshold: usize,
    /// Action name to model id
    #[serde(default = "default_action_models")]
    pub action_models: HashMap<String, String>,
    /// Actions that resolve to the language default
    #[serde(default = "default_language_default_actions")]
    pub language_default_actions: Vec<String>,
    /// Per-language default models
    #[serde(default = "default_languages")]
    pub languages: Vec<LanguageProfile>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        let policy = SelectionPolicy::default();
        Self {
            default_model: policy.default_model,
            high_capability_model: policy.high_capability_model,
            long_context_model: policy.long_context_model,
            long_context_threshold: policy.long_context_threshold,
            action_models: policy.action_models,
            language_default_actions: policy.language_default_actions,
            languages: policy.languages.profiles().to_vec(),
        }
    }
}

impl SelectionConfig {
    /// Runtime selection policy
    pub fn to_policy(&self) -> SelectionPolicy {
        SelectionPolicy {
            default_model: self.default_model.clone(),
            high_capability_model: self.high_capability_model.clone(),
            long_context_model: self.long_context_model.clone(),
            long_context_threshold: self.long_context_threshold,
            action_models: self.action_models.clone(),
            language_default_actions: self.language_default_actions.clone(),
            languages: LanguageTable::new(self.languages.clone()),
        }
    }
}

fn default_model() -> String {
    SelectionPolicy::default().default_model
}

fn default_high_capability_model() -> String {
    SelectionPolicy::default().high_capability_model
}

fn default_long_context_model() -> String {
    SelectionPolicy::default().long_context_model
}

fn default_long_context_threshold() -> usize {
    SelectionPolicy::default().long_context_threshold
}

fn default_action_models() -> HashMap<String, String> {
    SelectionPolicy::default().action_models
}

fn default_language_default_actions() -> Vec<String> {
    SelectionPolicy::default().language_default_actions
}

fn default_languages() -> Vec<LanguageProfile> {
    LanguageTable::builtin().profiles().to_vec()
}
