//! Configuration data models
//!
//! This module defines all configuration structures read from the YAML file.

#![allow(missing_docs)]

pub mod gateway;
pub mod model;
pub mod router;
pub mod server;

pub use gateway::*;
pub use model::*;
pub use router::*;
pub use server::*;

/// Default server host
pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default per-attempt timeout in milliseconds
pub fn default_attempt_timeout_ms() -> u64 {
    30_000
}

/// Default maximum tokens for a model entry
pub fn default_max_tokens() -> u32 {
    4096
}

/// Default temperature for a model entry
pub fn default_temperature() -> f32 {
    0.1
}

pub fn default_true() -> bool {
    true
}
