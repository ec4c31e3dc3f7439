//! Top-level gateway configuration

use super::*;
use crate::core::providers::EdgeGatewayConfig;
use crate::core::router::fallback::builtin_chains;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete configuration file
///
/// Every section is optional; omitted sections take the built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// HTTP server
    #[serde(default)]
    pub server: ServerConfig,
    /// Router settings
    #[serde(default)]
    pub router: RoutingConfig,
    /// Edge function gateway
    #[serde(default)]
    pub edge: EdgeGatewayConfig,
    /// Registered models, in order
    #[serde(default = "default_models")]
    pub models: Vec<ModelEntry>,
    /// Failover chains: model id to ordered fallback ids
    #[serde(default = "builtin_chains")]
    pub failover: HashMap<String, Vec<String>>,
    /// Model selection rules
    #[serde(default)]
    pub selection: SelectionConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            router: RoutingConfig::default(),
            edge: EdgeGatewayConfig::default(),
            models: default_models(),
            failover: builtin_chains(),
            selection: SelectionConfig::default(),
        }
    }
}
