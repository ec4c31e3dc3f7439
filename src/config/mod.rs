//! Configuration management for the router gateway
//!
//! Configuration is loaded once at startup from a YAML file, validated, and
//! turned into immutable runtime values: the model registry (with API keys
//! resolved from the environment), the failover graph, the selection policy
//! and the router settings.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::core::providers::EdgeGatewayConfig;
use crate::core::registry::ModelRegistry;
use crate::core::router::{FailoverGraph, RouterConfig, SelectionPolicy};
use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from file, or fall back to defaults when it does not exist
    pub async fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await
        } else {
            info!("Config file {:?} not found, using built-in defaults", path);
            let config = Self::default();
            config.validate()?;
            Ok(config)
        }
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let gateway: GatewayConfig = serde_yaml::from_str(content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { gateway };
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get edge gateway configuration
    pub fn edge(&self) -> &EdgeGatewayConfig {
        &self.gateway.edge
    }

    /// Validate the entire configuration
    ///
    /// Unknown model references in chains and selection rules are logged, not rejected.
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.gateway
            .validate()
            .map_err(|e| GatewayError::Config(format!("Invalid configuration: {}", e)))?;

        validation::warn_unknown_targets(&self.gateway);

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Build the model registry, reading API keys from the process environment
    pub fn build_registry(&self) -> Result<ModelRegistry> {
        self.build_registry_with(|name| std::env::var(name).ok())
    }

    /// Build the model registry, reading API keys through `lookup`
    pub fn build_registry_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ModelRegistry> {
        let models = self
            .gateway
            .models
            .iter()
            .map(|entry| entry.to_model_config(&lookup))
            .collect();

        ModelRegistry::new(models)
    }

    /// Build the failover graph
    pub fn failover_graph(&self) -> Result<FailoverGraph> {
        FailoverGraph::new(self.gateway.failover.clone())
    }

    /// Build the selection policy
    pub fn selection_policy(&self) -> SelectionPolicy {
        self.gateway.selection.to_policy()
    }

    /// Build the runtime router settings
    pub fn router_config(&self) -> RouterConfig {
        self.gateway.router.to_router_config()
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.gateway)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
