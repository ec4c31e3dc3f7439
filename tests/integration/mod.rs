//! Integration tests for model-router
//!
//! These tests drive the public API only; model calls go through a scripted
//! gateway or a local mock HTTP server.

pub mod config_validation_tests;
pub mod edge_gateway_tests;
pub mod error_handling_tests;
pub mod router_tests;
