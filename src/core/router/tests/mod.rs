//! Router tests module
//!
//! Unit tests run against the built-in model set with a scripted gateway.


use crate::core::providers::GatewaySet;
use crate::core::providers::testing::ScriptedGateway;
use crate::core::registry::{ModelRegistry, builtin_models};
use crate::core::router::{FailoverExecutor, FailoverGraph, Router, RouterConfig, SelectionPolicy};
use std::sync::Arc;
use std::time::Duration;

pub(super) fn registry() -> Arc<ModelRegistry> {
    Arc::new(ModelRegistry::new(builtin_models()).unwrap())
}

pub(super) fn executor(gateway: Arc<ScriptedGateway>, graph: FailoverGraph) -> FailoverExecutor {
    FailoverExecutor::new(
        registry(),
        Arc::new(graph),
        Arc::new(GatewaySet::uniform(gateway)),
        Duration::from_secs(30),
    )
}

pub(super) fn router(gateway: Arc<ScriptedGateway>) -> Router {
    router_with_config(gateway, RouterConfig::default())
}

pub(super) fn router_with_config(gateway: Arc<ScriptedGateway>, config: RouterConfig) -> Router {
    Router::new(
        ModelRegistry::new(builtin_models()).unwrap(),
        FailoverGraph::builtin(),
        SelectionPolicy::default(),
        GatewaySet::uniform(gateway),
        config,
    )
}
