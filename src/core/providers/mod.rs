//! Provider gateways
//!
//! A [`ProviderGateway`] executes a prompt against one provider family through
//! a uniform interface. The router keeps one gateway per [`Provider`] in a
//! [`GatewaySet`] and treats every gateway failure as a failover trigger.
//!
//! Vendor wire formats live outside this crate; the only built-in gateway is
//! [`EdgeFunctionGateway`], which forwards to a uniform JSON edge endpoint that
//! holds the vendor keys.

pub mod edge;
pub mod unified_provider;

#[cfg(test)]
pub(crate) mod testing;

pub use edge::{EdgeFunctionGateway, EdgeGatewayConfig};
pub use unified_provider::ProviderError;

use crate::core::types::{ModelConfig, Provider, ProviderOutput};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Uniform execution capability for one provider family
#[async_trait]
pub trait ProviderGateway: Send + Sync + Debug {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Whether models routed here must carry an API key
    ///
    /// When true, a model without credentials fails its attempt before any call.
    fn requires_credentials(&self) -> bool {
        true
    }

    /// Execute a prompt against the given model
    async fn execute(&self, prompt: &str, model: &ModelConfig)
    -> Result<ProviderOutput, ProviderError>;
}

/// Gateways keyed by provider family
#[derive(Debug, Clone, Default)]
pub struct GatewaySet {
    gateways: HashMap<Provider, Arc<dyn ProviderGateway>>,
}

impl GatewaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a gateway for a provider (builder pattern)
    pub fn with(mut self, provider: Provider, gateway: Arc<dyn ProviderGateway>) -> Self {
        self.gateways.insert(provider, gateway);
        self
    }

    /// Register one gateway for every provider family
    pub fn uniform(gateway: Arc<dyn ProviderGateway>) -> Self {
        Provider::ALL
            .into_iter()
            .fold(Self::new(), |set, provider| {
                set.with(provider, Arc::clone(&gateway))
            })
    }

    /// Gateway for a provider, if registered
    pub fn get(&self, provider: Provider) -> Option<&Arc<dyn ProviderGateway>> {
        self.gateways.get(&provider)
    }

    pub fn is_empty(&self) -> bool {
        self.gateways.is_empty()
    }
}
