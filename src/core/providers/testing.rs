//! Scripted gateway for unit tests

use super::{ProviderError, ProviderGateway};
use crate::core::types::{ModelConfig, ProviderOutput};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone)]
pub(crate) enum Behavior {
    Reply(String),
    Fail(ProviderError),
    Hang,
    Delay(Duration, String),
}

/// Gateway whose per-model behavior is scripted; unscripted models fail
#[derive(Debug, Default)]
pub(crate) struct ScriptedGateway {
    behaviors: HashMap<String, Behavior>,
    requires_credentials: bool,
    calls: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, model: &str, content: &str) -> Self {
        self.behaviors
            .insert(model.to_string(), Behavior::Reply(content.to_string()));
        self
    }

    pub fn fail(self, model: &str) -> Self {
        self.fail_with(
            model,
            ProviderError::api_error("scripted", 500, format!("{} is down", model)),
        )
    }

    pub fn fail_with(mut self, model: &str, error: ProviderError) -> Self {
        self.behaviors.insert(model.to_string(), Behavior::Fail(error));
        self
    }

    pub fn hang(mut self, model: &str) -> Self {
        self.behaviors.insert(model.to_string(), Behavior::Hang);
        self
    }

    pub fn delay(mut self, model: &str, delay: Duration, content: &str) -> Self {
        self.behaviors.insert(
            model.to_string(),
            Behavior::Delay(delay, content.to_string()),
        );
        self
    }

    pub fn requiring_credentials(mut self) -> Self {
        self.requires_credentials = true;
        self
    }

    /// Model ids in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Prompts in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl ProviderGateway for ScriptedGateway {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn requires_credentials(&self) -> bool {
        self.requires_credentials
    }

    async fn execute(
        &self,
        prompt: &str,
        model: &ModelConfig,
    ) -> Result<ProviderOutput, ProviderError> {
        self.calls.lock().push(model.id.clone());
        self.prompts.lock().push(prompt.to_string());

        let behavior = self.behaviors.get(&model.id).cloned().unwrap_or_else(|| {
            Behavior::Fail(ProviderError::other("scripted", "no script for model"))
        });

        match behavior {
            Behavior::Reply(content) => Ok(ProviderOutput::new(content, 7)),
            Behavior::Fail(error) => Err(error),
            Behavior::Hang => std::future::pending().await,
            Behavior::Delay(delay, content) => {
                tokio::time::sleep(delay).await;
                Ok(ProviderOutput::new(content, 7))
            }
        }
    }
}
