//! Core functionality for the router
//!
//! This module contains the routing logic and the data structures it shares.

pub mod cache_manager;
pub mod providers;
pub mod registry;
pub mod router;
pub mod types;
