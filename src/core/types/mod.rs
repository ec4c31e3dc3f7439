//! Core type definition module
//!
//! Model configuration, request context and response types shared by the
//! registry, selector, executor and cache.

pub mod context;
pub mod model;

pub use context::{Complexity, ModelResponse, ProviderOutput, RouteContext};
pub use model::{Capability, ModelConfig, Provider};
