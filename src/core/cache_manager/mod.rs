//! Response caching and in-flight request deduplication
//!
//! Identical requests that arrive while one is still running share its single
//! upstream execution; once it succeeds, later identical requests are served
//! from memory until the cache is cleared. Entries never expire on their own.

pub mod manager;
pub mod types;


pub use manager::{ResponseCache, Waiter};
pub use types::{CacheKey, CacheLookup, CacheStats, SharedExecution};
