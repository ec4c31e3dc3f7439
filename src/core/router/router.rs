//! Router façade
//!
//! Validates the request, selects a model, derives the cache key, then either
//! serves from cache, joins an identical in-flight request, or starts a new
//! failover execution. Routers are constructed explicitly and shared through
//! `Arc`; nothing here is global.

use super::config::RouterConfig;
use super::error::RouterError;
use super::execution::FailoverExecutor;
use super::fallback::FailoverGraph;
use super::prompt;
use super::selection::{ContextSelector, SelectionPolicy};
use crate::core::cache_manager::{CacheKey, CacheLookup, CacheStats, ResponseCache};
use crate::core::providers::GatewaySet;
use crate::core::registry::ModelRegistry;
use crate::core::types::{ModelConfig, ModelResponse, RouteContext};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Model router
#[derive(Debug)]
pub struct Router {
    pub(crate) registry: Arc<ModelRegistry>,
    pub(crate) selector: ContextSelector,
    pub(crate) executor: FailoverExecutor,
    pub(crate) cache: Arc<ResponseCache>,
    pub(crate) config: RouterConfig,
}

impl Router {
    /// Create a router from its parts
    pub fn new(
        registry: ModelRegistry,
        graph: FailoverGraph,
        policy: SelectionPolicy,
        gateways: GatewaySet,
        config: RouterConfig,
    ) -> Self {
        let registry = Arc::new(registry);
        let selector = ContextSelector::new(Arc::clone(&registry), policy);
        let executor = FailoverExecutor::new(
            Arc::clone(&registry),
            Arc::new(graph),
            Arc::new(gateways),
            config.attempt_timeout,
        );

        Self {
            registry,
            selector,
            executor,
            cache: Arc::new(ResponseCache::new()),
            config,
        }
    }

    /// Get the router configuration
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn selector(&self) -> &ContextSelector {
        &self.selector
    }

    pub fn executor(&self) -> &FailoverExecutor {
        &self.executor
    }

    /// Route a prompt to a model and return its response
    pub async fn route(
        &self,
        prompt: &str,
        context: &RouteContext,
    ) -> Result<ModelResponse, RouterError> {
        self.route_with_cancel(prompt, context, &CancellationToken::new())
            .await
    }

    /// Route a prompt, giving up with [`RouterError::Cancelled`] when `cancel` fires
    ///
    /// Cancelling only ends this caller's wait. The upstream call is cancelled
    /// once every caller sharing it has been cancelled or dropped.
    pub async fn route_with_cancel(
        &self,
        prompt: &str,
        context: &RouteContext,
        cancel: &CancellationToken,
    ) -> Result<ModelResponse, RouterError> {
        if prompt.trim().is_empty() {
            return Err(RouterError::validation("Prompt must not be empty"));
        }
        if cancel.is_cancelled() {
            return Err(RouterError::Cancelled);
        }

        let model_id = self.selector.select(context);
        let key = CacheKey::from_request(prompt, context, &model_id);
        debug!("Routing request to {} (key {})", model_id, key);

        let lookup = self.cache.lookup_or_start(&key, |token| {
            let executor = self.executor.clone();
            let enhanced = if self.config.enhance_prompts {
                prompt::enhance(prompt, context)
            } else {
                prompt.to_string()
            };

            async move { executor.execute(&enhanced, &model_id, &token).await }
        });

        match lookup {
            CacheLookup::Hit(response) => Ok(response),
            CacheLookup::Joined(waiter) | CacheLookup::Started(waiter) => waiter.wait(cancel).await,
        }
    }

    /// All registered models, in configuration order
    pub fn available_models(&self) -> &[ModelConfig] {
        self.registry.all()
    }

    /// Configuration of a registered model
    pub fn model_config(&self, id: &str) -> Option<&ModelConfig> {
        self.registry.get(id)
    }

    /// Drop all completed and in-flight cache entries
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
