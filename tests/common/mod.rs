//! Common test utilities for model-router
//!
//! - Mock provider gateway with per-model scripted replies
//! - Router and context factories
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::providers::MockGateway;
//!
//! let gateway = MockGateway::new().reply("gpt-4", "hello");
//! let router = crate::common::router_with(gateway.clone());
//! ```

pub mod providers;

use model_router::{
    FailoverGraph, GatewaySet, ModelRegistry, Router, RouterConfig, SelectionPolicy,
};
use model_router::core::registry::builtin_models;
use providers::MockGateway;
use std::sync::Arc;

/// Router over the built-in models, chains and selection rules
pub fn router_with(gateway: Arc<MockGateway>) -> Router {
    router_with_config(gateway, RouterConfig::default())
}

/// Router over the built-in models with custom router settings
pub fn router_with_config(gateway: Arc<MockGateway>, config: RouterConfig) -> Router {
    let registry = ModelRegistry::new(builtin_models()).expect("built-in models are valid");
    Router::new(
        registry,
        FailoverGraph::builtin(),
        SelectionPolicy::default(),
        GatewaySet::uniform(gateway),
        config,
    )
}

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
