//! Edge function gateway
//!
//! Forwards every model to a single JSON endpoint, `POST {base_url}/api/ai/{model_id}`,
//! that fans out to the vendors server-side. Request body:
//!
//! ```json
//! {"prompt": "...", "model": "gpt-4", "maxTokens": 8192, "temperature": 0.1}
//! ```
//!
//! Reply body: `{"content": "...", "tokens": 42, "confidence": 0.9}` with
//! `tokens` and `confidence` optional. A reply without `confidence` is scored
//! [`DEFAULT_CONFIDENCE`] for every model.

use super::{ProviderError, ProviderGateway};
use crate::core::types::{ModelConfig, ProviderOutput};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const PROVIDER: &str = "edge";

/// Confidence reported when the edge reply carries none
pub const DEFAULT_CONFIDENCE: f64 = 0.8;

/// Edge gateway settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeGatewayConfig {
    /// Base URL of the edge deployment
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// HTTP client timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8788".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for EdgeGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeRequest<'a> {
    prompt: &'a str,
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct EdgeReply {
    content: Option<String>,
    #[serde(default)]
    tokens: Option<u64>,
    #[serde(default)]
    confidence: Option<f64>,
}

/// Gateway that calls the uniform edge endpoint
#[derive(Debug, Clone)]
pub struct EdgeFunctionGateway {
    client: Client,
    base_url: String,
}

impl EdgeFunctionGateway {
    /// Create a gateway with its own HTTP client
    pub fn new(config: &EdgeGatewayConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ProviderError::configuration(PROVIDER, format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self::with_client(client, &config.base_url))
    }

    /// Create a gateway around an existing client
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, model_id: &str) -> String {
        format!("{}/api/ai/{}", self.base_url, model_id)
    }
}

#[async_trait]
impl ProviderGateway for EdgeFunctionGateway {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn requires_credentials(&self) -> bool {
        false
    }

    async fn execute(
        &self,
        prompt: &str,
        model: &ModelConfig,
    ) -> Result<ProviderOutput, ProviderError> {
        let url = self.url_for(&model.id);
        debug!("Edge request for {} -> {}", model.id, url);

        let body = EdgeRequest {
            prompt,
            model: &model.id,
            max_tokens: model.max_tokens,
            temperature: model.temperature,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::timeout(PROVIDER, e.to_string())
                } else {
                    ProviderError::network(PROVIDER, e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(PROVIDER, status.as_u16(), text));
        }

        let reply: EdgeReply = response
            .json()
            .await
            .map_err(|e| ProviderError::response_parsing(PROVIDER, e.to_string()))?;

        let content = reply
            .content
            .ok_or_else(|| ProviderError::response_parsing(PROVIDER, "missing content field"))?;

        Ok(ProviderOutput {
            content,
            tokens: reply.tokens.unwrap_or(0),
            confidence: Some(reply.confidence.unwrap_or(DEFAULT_CONFIDENCE)),
        })
    }
}
