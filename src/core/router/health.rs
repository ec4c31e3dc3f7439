//! Model health checks

use super::config::HEALTH_CHECK_PROMPT;
use super::router::Router;
use futures::future::join_all;
use std::collections::HashMap;
use tracing::{info, warn};

impl Router {
    /// Send one health prompt to every registered model, concurrently
    ///
    /// Each model gets a single attempt with a fixed prompt: no failover, no
    /// cache. A model is healthy when its reply contains `OK`.
    pub async fn health_check(&self) -> HashMap<String, bool> {
        let checks = self.registry.all().iter().map(|model| async move {
            let healthy = match self.executor.attempt(HEALTH_CHECK_PROMPT, &model.id).await {
                Ok(response) => response.content.contains("OK"),
                Err(err) => {
                    warn!("Health check failed for {}: {}", model.id, err);
                    false
                }
            };
            (model.id.clone(), healthy)
        });

        let results: HashMap<String, bool> = join_all(checks).await.into_iter().collect();

        let healthy = results.values().filter(|healthy| **healthy).count();
        info!("Health check: {}/{} models healthy", healthy, results.len());

        results
    }
}
