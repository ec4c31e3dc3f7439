//! Router runtime settings

use std::time::Duration;

/// Prompt sent to each model by the health check
pub const HEALTH_CHECK_PROMPT: &str = "Hello, respond with \"OK\"";

/// Router configuration
///
/// ## Defaults
///
/// - `attempt_timeout`: 30s
/// - `enhance_prompts`: true
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// Upper bound on a single provider call; expiry counts as a failed attempt
    pub attempt_timeout: Duration,

    /// Wrap prompts with file, language and code context before execution
    pub enhance_prompts: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            attempt_timeout: Duration::from_secs(30),
            enhance_prompts: true,
        }
    }
}

impl RouterConfig {
    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    pub fn with_enhance_prompts(mut self, enabled: bool) -> Self {
        self.enhance_prompts = enabled;
        self
    }
}
