//! Model routing with failover, caching and request deduplication
//!
//! ## Module Structure
//!
//! - `config` - Router runtime settings
//! - `error` - Errors surfaced to callers
//! - `fallback` - Failover graph
//! - `selection` - Context-based model selection
//! - `prompt` - Prompt enrichment
//! - `execution` - Failover walk and single attempts
//! - `router` - Router façade
//! - `gateway_config` - Router construction from loaded configuration
//! - `health` - Per-model health checks

pub mod config;
pub mod error;
pub mod execution;
pub mod fallback;
pub mod gateway_config;
pub mod health;
pub mod prompt;
pub mod router;
pub mod selection;

#[cfg(test)]
mod tests;

pub use config::{HEALTH_CHECK_PROMPT, RouterConfig};
pub use error::RouterError;
pub use execution::FailoverExecutor;
pub use fallback::FailoverGraph;
pub use router::Router;
pub use selection::{ContextSelector, SelectionPolicy};
