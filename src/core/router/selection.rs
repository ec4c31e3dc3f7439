//! Model selection from request context
//!
//! [`ContextSelector::select`] is a pure function of the context and the
//! policy. First match wins:
//!
//! 1. `user_preference` naming a registered model
//! 2. `action` found in the action table, or in the language-default actions
//! 3. `complexity == complex` selects the high-capability model
//! 4. `content` longer than the threshold selects the long-context model
//! 5. Language default: filename extension, then language id, then the default model

use crate::core::registry::{LanguageTable, ModelRegistry};
use crate::core::types::{Complexity, RouteContext};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Selection rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Model used when nothing else matches
    pub default_model: String,
    /// Model for complex tasks
    pub high_capability_model: String,
    /// Model for large content
    pub long_context_model: String,
    /// Content length, in characters, above which the long-context model is used
    pub long_context_threshold: usize,
    /// Action name to model id
    pub action_models: HashMap<String, String>,
    /// Actions resolved through the language default
    pub language_default_actions: Vec<String>,
    /// Per-language defaults
    pub languages: LanguageTable,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        let action_models = [
            ("analyze_image", "gemini-vision"),
            ("extract_code_from_image", "gemini-vision"),
            ("optimize_performance", "gpt-4"),
            ("refactor_complex", "gpt-4"),
        ]
        .into_iter()
        .map(|(action, model)| (action.to_string(), model.to_string()))
        .collect();

        Self {
            default_model: "gpt-4o".to_string(),
            high_capability_model: "gpt-4".to_string(),
            long_context_model: "claude".to_string(),
            long_context_threshold: 10_000,
            action_models,
            language_default_actions: vec!["generate_tests".to_string()],
            languages: LanguageTable::builtin(),
        }
    }
}

impl SelectionPolicy {
    /// Every model id the policy can select, for configuration checks
    pub fn referenced_models(&self) -> Vec<&str> {
        let mut ids = vec![
            self.default_model.as_str(),
            self.high_capability_model.as_str(),
            self.long_context_model.as_str(),
        ];
        ids.extend(self.action_models.values().map(String::as_str));
        ids.extend(self.languages.profiles().iter().map(|p| p.model.as_str()));
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

/// Deterministic context-to-model policy
#[derive(Debug, Clone)]
pub struct ContextSelector {
    registry: Arc<ModelRegistry>,
    policy: SelectionPolicy,
}

impl ContextSelector {
    pub fn new(registry: Arc<ModelRegistry>, policy: SelectionPolicy) -> Self {
        Self { registry, policy }
    }

    pub fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }

    /// Pick a model id for the context. Total: always returns an id.
    pub fn select(&self, context: &RouteContext) -> String {
        if let Some(preference) = context.user_preference.as_deref()
            && self.registry.contains(preference)
        {
            debug!("Selected {} from user preference", preference);
            return preference.to_string();
        }

        if let Some(action) = context.action.as_deref() {
            if let Some(model) = self.policy.action_models.get(action) {
                debug!("Selected {} for action {}", model, action);
                return model.clone();
            }
            if self
                .policy
                .language_default_actions
                .iter()
                .any(|candidate| candidate == action)
            {
                let model = self.language_default(context);
                debug!("Selected {} for action {} by language", model, action);
                return model;
            }
        }

        if context.complexity == Some(Complexity::Complex) {
            debug!(
                "Selected {} for complex task",
                self.policy.high_capability_model
            );
            return self.policy.high_capability_model.clone();
        }

        if let Some(content) = context.content.as_deref()
            && content.chars().count() > self.policy.long_context_threshold
        {
            debug!(
                "Selected {} for long content",
                self.policy.long_context_model
            );
            return self.policy.long_context_model.clone();
        }

        let model = self.language_default(context);
        debug!("Selected {} as language default", model);
        model
    }

    fn language_default(&self, context: &RouteContext) -> String {
        let languages = &self.policy.languages;

        context
            .filename
            .as_deref()
            .and_then(|filename| languages.by_filename(filename))
            .or_else(|| {
                context
                    .language
                    .as_deref()
                    .and_then(|language| languages.by_id(language))
            })
            .map(|profile| profile.model.clone())
            .unwrap_or_else(|| self.policy.default_model.clone())
    }
}
