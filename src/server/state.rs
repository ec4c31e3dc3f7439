//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::router::Router;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cloned into every worker; all fields are reference counted.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Model router
    pub router: Arc<Router>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, router: Router) -> Self {
        Self {
            config: Arc::new(config),
            router: Arc::new(router),
        }
    }
}
