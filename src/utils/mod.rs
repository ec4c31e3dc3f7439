//! Utility modules for the router gateway

pub mod error;

pub use error::{GatewayError, Result};
