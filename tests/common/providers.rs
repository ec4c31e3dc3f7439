//! Provider test utilities
//!
//! A gateway that answers from a per-model script and records every call,
//! so tests can assert both the outcome and the exact attempt order.

use async_trait::async_trait;
use model_router::{ModelConfig, ProviderError, ProviderGateway, ProviderOutput};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Script {
    Reply(String),
    Fail(ProviderError),
    Slow(Duration, String),
}

/// Scripted gateway for integration tests
#[derive(Debug, Default)]
pub struct MockGateway {
    scripts: HashMap<String, Script>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with `content` for `model`
    pub fn reply(mut self, model: &str, content: &str) -> Self {
        self.scripts
            .insert(model.to_string(), Script::Reply(content.to_string()));
        self
    }

    /// Fail every call to `model` with `error`
    pub fn fail(mut self, model: &str, error: ProviderError) -> Self {
        self.scripts.insert(model.to_string(), Script::Fail(error));
        self
    }

    /// Reply after `delay`
    pub fn slow(mut self, model: &str, delay: Duration, content: &str) -> Self {
        self.scripts
            .insert(model.to_string(), Script::Slow(delay, content.to_string()));
        self
    }

    pub fn build(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Model ids in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(model, _)| model.clone()).collect()
    }

    /// Prompts in call order
    pub fn prompts(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(_, prompt)| prompt.clone()).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl ProviderGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn requires_credentials(&self) -> bool {
        false
    }

    async fn execute(
        &self,
        prompt: &str,
        model: &ModelConfig,
    ) -> Result<ProviderOutput, ProviderError> {
        self.calls
            .lock()
            .push((model.id.clone(), prompt.to_string()));

        match self.scripts.get(&model.id).cloned() {
            Some(Script::Reply(content)) => Ok(ProviderOutput::new(content, 3)),
            Some(Script::Fail(error)) => Err(error),
            Some(Script::Slow(delay, content)) => {
                tokio::time::sleep(delay).await;
                Ok(ProviderOutput::new(content, 3))
            }
            None => Err(ProviderError::provider_unavailable("mock", "no script")),
        }
    }
}
