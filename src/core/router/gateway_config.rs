//! Gateway configuration integration
//!
//! Builds a [`Router`] from a loaded [`Config`].

use super::router::Router;
use crate::config::Config;
use crate::core::providers::GatewaySet;
use crate::utils::error::Result;
use tracing::info;

impl Router {
    /// Create a Router from gateway configuration
    ///
    /// API keys are read from the process environment here, once.
    pub fn from_config(config: &Config, gateways: GatewaySet) -> Result<Self> {
        let registry = config.build_registry()?;
        let graph = config.failover_graph()?;

        let with_keys = registry
            .all()
            .iter()
            .filter(|model| model.has_credentials())
            .count();
        info!(
            "Router configured with {} models ({} with API keys)",
            registry.len(),
            with_keys
        );

        Ok(Self::new(
            registry,
            graph,
            config.selection_policy(),
            gateways,
            config.router_config(),
        ))
    }
}
