//! Configuration validators
//!
//! Hard errors for values the router cannot run with. References to models
//! that are not registered are only reported as warnings, since failover and
//! selection tolerate them at runtime.

use super::trait_def::Validate;
use crate::config::models::*;
use crate::core::router::FailoverGraph;
use std::collections::HashSet;
use tracing::{debug, warn};

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating gateway configuration");

        self.server.validate()?;
        self.router.validate()?;
        self.selection.validate()?;

        if self.edge.base_url.trim().is_empty() {
            return Err("Edge gateway base URL cannot be empty".to_string());
        }

        let mut ids = HashSet::new();
        for model in &self.models {
            if !ids.insert(model.id.as_str()) {
                return Err(format!("Duplicate model id: {}", model.id));
            }
            model.validate()?;
        }

        for (model, targets) in &self.failover {
            if targets.iter().any(|target| target == model) {
                return Err(format!("Failover chain for {} contains itself", model));
            }
        }

        debug!("Gateway configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Server workers must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for RoutingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.attempt_timeout_ms == 0 {
            return Err("Router attempt timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for SelectionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.long_context_threshold == 0 {
            return Err("Long context threshold must be greater than 0".to_string());
        }

        if self.default_model.trim().is_empty() {
            return Err("Default model cannot be empty".to_string());
        }

        let mut languages = HashSet::new();
        for language in &self.languages {
            if language.id.trim().is_empty() {
                return Err("Language id cannot be empty".to_string());
            }
            if !languages.insert(language.id.as_str()) {
                return Err(format!("Duplicate language id: {}", language.id));
            }
        }

        Ok(())
    }
}

impl Validate for ModelEntry {
    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Model id cannot be empty".to_string());
        }

        if self.max_tokens == 0 {
            return Err(format!("Model {} max_tokens must be greater than 0", self.id));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Model {} temperature must be between 0.0 and 2.0",
                self.id
            ));
        }

        Ok(())
    }
}

/// Log every failover or selection target that names an unregistered model
///
/// Returns the number of unknown references found.
pub fn warn_unknown_targets(config: &GatewayConfig) -> usize {
    let known: HashSet<&str> = config.models.iter().map(|m| m.id.as_str()).collect();
    let mut unknown = 0;

    if let Ok(graph) = FailoverGraph::new(config.failover.clone()) {
        for (model, target) in graph.unknown_targets(|id| known.contains(id)) {
            warn!("Failover chain for {} names unknown model {}", model, target);
            unknown += 1;
        }
    }

    let policy = config.selection.to_policy();
    for model in policy.referenced_models() {
        if !known.contains(model) {
            warn!("Selection rules name unknown model {}", model);
            unknown += 1;
        }
    }

    unknown
}
