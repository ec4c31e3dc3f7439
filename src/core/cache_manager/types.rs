//! Cache manager type definitions
//!
//! Cache keys, the in-flight handle type and statistics.

use super::manager::Waiter;
use crate::core::router::RouterError;
use crate::core::types::{ModelResponse, RouteContext};
use futures::future::{BoxFuture, Shared};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shareable handle to a single upstream execution
pub type SharedExecution = Shared<BoxFuture<'static, Result<ModelResponse, RouterError>>>;

/// Deterministic key for a routed request
///
/// Format: `{model}:{sha256-hex}`, where the digest covers the compact JSON of
///
/// ```json
/// {"prompt":"...","filename":null,"language":null,"action":null,"model":"gpt-4"}
/// ```
///
/// with fields in exactly that order and `null` for absent fields. The prompt
/// is the raw caller prompt and `model` is the originally selected model.
/// `content`, `complexity` and `user_preference` do not participate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CacheKey(String);

#[derive(Serialize)]
struct KeyMaterial<'a> {
    prompt: &'a str,
    filename: Option<&'a str>,
    language: Option<&'a str>,
    action: Option<&'a str>,
    model: &'a str,
}

impl CacheKey {
    /// Derive the key for a request routed to `model`
    pub fn from_request(prompt: &str, context: &RouteContext, model: &str) -> Self {
        let material = KeyMaterial {
            prompt,
            filename: context.filename.as_deref(),
            language: context.language.as_deref(),
            action: context.action.as_deref(),
            model,
        };

        // Serializing borrowed strings into memory cannot fail
        let canonical = serde_json::to_vec(&material).unwrap_or_default();
        let digest = Sha256::digest(&canonical);

        Self(format!("{}:{}", model, hex::encode(digest)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Model prefix of the key
    pub fn model(&self) -> &str {
        self.0
            .rsplit_once(':')
            .map(|(model, _)| model)
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of looking a key up in the cache
pub enum CacheLookup {
    /// A completed response, already marked `cached`
    Hit(ModelResponse),
    /// An execution for the same key is already running
    Joined(Waiter),
    /// This caller started a new execution
    Started(Waiter),
}

impl fmt::Debug for CacheLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit(response) => f.debug_tuple("Hit").field(response).finish(),
            Self::Joined(waiter) => f.debug_tuple("Joined").field(waiter).finish(),
            Self::Started(waiter) => f.debug_tuple("Started").field(waiter).finish(),
        }
    }
}

/// Atomic cache statistics for lock-free hot path updates
#[derive(Debug, Default)]
pub struct AtomicCacheStats {
    /// Completed-cache hits
    pub hits: AtomicU64,
    /// Lookups that started a new execution
    pub misses: AtomicU64,
    /// Lookups that joined an in-flight execution
    pub joins: AtomicU64,
    /// Responses stored in the completed cache
    pub stores: AtomicU64,
}

/// Cache statistics snapshot (returned to callers)
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub joins: u64,
    pub stores: u64,
    /// Completed entries currently held
    pub entries: usize,
    /// Executions currently in flight
    pub in_flight: usize,
}

impl CacheStats {
    /// Share of lookups answered without a new upstream execution
    pub fn hit_rate(&self) -> f64 {
        let served = self.hits + self.joins;
        let total = served + self.misses;

        if total == 0 {
            0.0
        } else {
            served as f64 / total as f64
        }
    }
}

impl AtomicCacheStats {
    /// Create a snapshot of the counters
    pub fn snapshot(&self, entries: usize, in_flight: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            joins: self.joins.load(Ordering::Relaxed),
            stores: self.stores.load(Ordering::Relaxed),
            entries,
            in_flight,
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.joins.store(0, Ordering::Relaxed);
        self.stores.store(0, Ordering::Relaxed);
    }
}
