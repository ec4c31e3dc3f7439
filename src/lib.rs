//! # model-router
//!
//! Context-aware routing of prompts to AI models with failover chains,
//! response caching and in-flight request deduplication.
//!
//! ## Features
//!
//! - **Context Selection**: Pick a model from user preference, action, complexity, size or language
//! - **Failover**: Depth-first walk over per-model failover chains, each model tried at most once
//! - **Response Cache**: Successful responses are reused until the cache is cleared
//! - **Deduplication**: Identical concurrent requests share one upstream execution
//! - **Pluggable Gateways**: Providers are reached through the [`ProviderGateway`] trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use model_router::{Config, EdgeFunctionGateway, GatewaySet, RouteContext, Router};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file_or_default("config/router.yaml").await?;
//!     let edge = EdgeFunctionGateway::new(config.edge())?;
//!     let router = Router::from_config(&config, GatewaySet::uniform(Arc::new(edge)))?;
//!
//!     let context = RouteContext::new().with_filename("main.py");
//!     let response = router.route("Write tests for this module", &context).await?;
//!     println!("{} answered: {}", response.model, response.content);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

pub use crate::core::cache_manager::{CacheKey, CacheStats, ResponseCache};
pub use crate::core::providers::{
    EdgeFunctionGateway, EdgeGatewayConfig, GatewaySet, ProviderError, ProviderGateway,
};
pub use crate::core::registry::{LanguageProfile, LanguageTable, ModelRegistry};
pub use crate::core::router::{
    FailoverExecutor, FailoverGraph, Router, RouterConfig, RouterError, SelectionPolicy,
};
pub use crate::core::types::{
    Capability, Complexity, ModelConfig, ModelResponse, Provider, ProviderOutput, RouteContext,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
