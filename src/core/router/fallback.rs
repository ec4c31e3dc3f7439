//! Failover graph
//!
//! Maps each model to the ordered list of models to try after it fails.
//! Chains may point at each other and form cycles; the executor breaks cycles
//! with its visited set. Chains may also name models that are not registered,
//! which are skipped when reached.

use crate::utils::error::{GatewayError, Result};
use std::collections::HashMap;

/// Directed failover graph: `model id -> ordered fallback ids`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailoverGraph {
    chains: HashMap<String, Vec<String>>,
}

impl FailoverGraph {
    /// Build a graph, rejecting chains that name their own model
    pub fn new(chains: HashMap<String, Vec<String>>) -> Result<Self> {
        for (model, targets) in &chains {
            if targets.iter().any(|target| target == model) {
                return Err(GatewayError::config(format!(
                    "Failover chain for {} contains itself",
                    model
                )));
            }
        }
        Ok(Self { chains })
    }

    /// Built-in chains for the default model set
    pub fn builtin() -> Self {
        Self {
            chains: builtin_chains(),
        }
    }

    /// Add a chain (builder pattern)
    ///
    /// A self-reference is dropped from the chain rather than rejected.
    pub fn with_chain(mut self, model: &str, fallbacks: &[&str]) -> Self {
        let chain = fallbacks
            .iter()
            .filter(|target| **target != model)
            .map(|target| target.to_string())
            .collect();
        self.chains.insert(model.to_string(), chain);
        self
    }

    /// Ordered fallbacks for a model; empty when none are configured
    pub fn chain(&self, model: &str) -> &[String] {
        self.chains.get(model).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All chains
    pub fn chains(&self) -> &HashMap<String, Vec<String>> {
        &self.chains
    }

    /// Chain targets that are not in the given id set, as `(model, target)`
    pub fn unknown_targets(&self, known: impl Fn(&str) -> bool) -> Vec<(&str, &str)> {
        let mut unknown: Vec<(&str, &str)> = self
            .chains
            .iter()
            .flat_map(|(model, targets)| {
                targets
                    .iter()
                    .map(move |target| (model.as_str(), target.as_str()))
            })
            .filter(|(_, target)| !known(target))
            .collect();
        unknown.sort_unstable();
        unknown
    }
}

/// Built-in failover chains
pub fn builtin_chains() -> HashMap<String, Vec<String>> {
    let table: [(&str, [&str; 3]); 5] = [
        ("gpt-4", ["gpt-4o", "claude", "mistral"]),
        ("gpt-4o", ["gpt-4", "claude", "mistral"]),
        ("claude", ["gpt-4", "gpt-4o", "mistral"]),
        ("gemini-vision", ["gpt-4o", "gpt-4", "claude"]),
        ("mistral", ["gpt-4o", "gpt-4", "claude"]),
    ];

    table
        .into_iter()
        .map(|(model, targets)| {
            (
                model.to_string(),
                targets.iter().map(|target| target.to_string()).collect(),
            )
        })
        .collect()
}
