//! Router error types
//!
//! These are the only errors a `route()` caller sees. Per-attempt provider
//! failures are absorbed by failover and surface only as the last error of an
//! exhausted walk.

use crate::core::providers::unified_provider::ProviderError;

/// Router error types
///
/// `Clone` so a single in-flight execution can hand its result to every
/// deduplicated waiter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    /// The request was rejected before any model was selected
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Every reachable model in the failover graph failed
    #[error("All models failed (attempted: {}): {last_error}", attempted.join(", "))]
    Exhausted {
        /// Models attempted, in order
        attempted: Vec<String>,
        /// Failure of the final attempt
        last_error: ProviderError,
    },

    /// The caller cancelled the request
    #[error("Request cancelled")]
    Cancelled,
}

impl RouterError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Models attempted before the error, empty unless exhausted
    pub fn attempted(&self) -> &[String] {
        match self {
            Self::Exhausted { attempted, .. } => attempted,
            _ => &[],
        }
    }
}
