//! Failover execution
//!
//! Drives a selected model through the failover graph. The walk is depth-first:
//! when a model fails, its own chain is explored (in chain order) before the
//! remaining siblings of the model that led to it. The `visited` set is an
//! explicit parameter so the walk is reproducible in isolation and no model is
//! attempted twice, whatever cycles the graph contains.

use super::error::RouterError;
use super::fallback::FailoverGraph;
use crate::core::providers::GatewaySet;
use crate::core::providers::unified_provider::ProviderError;
use crate::core::registry::ModelRegistry;
use crate::core::types::ModelResponse;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

const ROUTER: &str = "router";

/// Executes a prompt against a model with failover
#[derive(Debug, Clone)]
pub struct FailoverExecutor {
    registry: Arc<ModelRegistry>,
    graph: Arc<FailoverGraph>,
    gateways: Arc<GatewaySet>,
    attempt_timeout: Duration,
}

impl FailoverExecutor {
    pub fn new(
        registry: Arc<ModelRegistry>,
        graph: Arc<FailoverGraph>,
        gateways: Arc<GatewaySet>,
        attempt_timeout: Duration,
    ) -> Self {
        Self {
            registry,
            graph,
            gateways,
            attempt_timeout,
        }
    }

    pub fn graph(&self) -> &FailoverGraph {
        &self.graph
    }

    /// Execute starting at `model_id`, failing over until a model succeeds
    pub async fn execute(
        &self,
        prompt: &str,
        model_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ModelResponse, RouterError> {
        let mut visited = HashSet::new();
        self.execute_from(prompt, model_id, &mut visited, cancel)
            .await
    }

    /// Execute starting at `model_id`, never attempting ids already in `visited`
    ///
    /// Every attempted id is added to `visited`.
    pub async fn execute_from(
        &self,
        prompt: &str,
        model_id: &str,
        visited: &mut HashSet<String>,
        cancel: &CancellationToken,
    ) -> Result<ModelResponse, RouterError> {
        let mut pending = vec![model_id.to_string()];
        let mut attempted = Vec::new();
        let mut last_error = None;

        while let Some(candidate) = pending.pop() {
            if !visited.insert(candidate.clone()) {
                continue;
            }
            attempted.push(candidate.clone());

            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!("Request cancelled while attempting {}", candidate);
                    return Err(RouterError::Cancelled);
                }
                outcome = self.attempt(prompt, &candidate) => outcome,
            };

            match outcome {
                Ok(response) => {
                    if attempted.len() > 1 {
                        debug!(
                            "Served by fallback {} after {} attempts",
                            candidate,
                            attempted.len()
                        );
                    }
                    return Ok(response);
                }
                Err(err) => {
                    warn!("Attempt with {} failed: {}", candidate, err);
                    last_error = Some(err);

                    // Reverse so the first fallback is popped next
                    pending.extend(
                        self.graph
                            .chain(&candidate)
                            .iter()
                            .rev()
                            .filter(|next| !visited.contains(*next))
                            .cloned(),
                    );
                }
            }
        }

        let last_error = last_error.unwrap_or_else(|| {
            ProviderError::other(ROUTER, format!("No model left to attempt from {}", model_id))
        });

        Err(RouterError::Exhausted {
            attempted,
            last_error,
        })
    }

    /// A single attempt against one model, without failover
    ///
    /// Fails without calling a gateway when the model is unknown, has no
    /// gateway for its provider, or lacks credentials its gateway requires.
    pub async fn attempt(&self, prompt: &str, model_id: &str) -> Result<ModelResponse, ProviderError> {
        let model = self.registry.get(model_id).ok_or_else(|| {
            ProviderError::configuration(ROUTER, format!("Model {} is not registered", model_id))
        })?;

        let provider = model.provider.as_str();
        let gateway = self.gateways.get(model.provider).ok_or_else(|| {
            ProviderError::configuration(provider, "No gateway registered for provider")
        })?;

        if gateway.requires_credentials() && !model.has_credentials() {
            return Err(ProviderError::configuration(
                provider,
                format!("No API key configured for {}", model.id),
            ));
        }

        debug!("Executing {} via {} gateway", model.id, gateway.name());

        let output = tokio::time::timeout(self.attempt_timeout, gateway.execute(prompt, model))
            .await
            .map_err(|_| {
                ProviderError::timeout(
                    provider,
                    format!(
                        "{} did not respond within {}ms",
                        model.id,
                        self.attempt_timeout.as_millis()
                    ),
                )
            })??;

        let confidence = output
            .confidence
            .filter(|value| value.is_finite())
            .unwrap_or_else(|| model.provider.default_confidence())
            .clamp(0.0, 1.0);

        Ok(ModelResponse {
            content: output.content,
            model: model.id.clone(),
            tokens: output.tokens,
            cached: false,
            confidence,
        })
    }
}
