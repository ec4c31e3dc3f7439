//! Response cache implementation
//!
//! Two concurrent maps keyed by [`CacheKey`]:
//!
//! - `completed`: successful responses, served with `cached = true`
//! - `pending`: the one execution running for a key, with its waiter count
//!
//! A pending entry is created through the map's entry API, so concurrent
//! identical lookups observe a single execution. The execution runs as its own
//! task under a token owned by the pending entry: it always settles, and it is
//! cancelled only when every waiter has left. On success the response is stored
//! in `completed` before the pending entry is removed. `clear()` bumps a
//! generation counter; an execution that started under an older generation
//! still settles for its waiters but never repopulates the cache.

use super::types::{AtomicCacheStats, CacheKey, CacheLookup, CacheStats, SharedExecution};
use crate::core::router::RouterError;
use crate::core::types::ModelResponse;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use futures::FutureExt;
use parking_lot::RwLock;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

struct PendingRequest {
    ticket: u64,
    execution: SharedExecution,
    cancel: CancellationToken,
    waiters: AtomicUsize,
}

/// One caller's share of an in-flight execution
///
/// Dropping the waiter, or cancelling its wait, releases its share. The
/// execution is cancelled when the last share is released before it settles.
pub struct Waiter {
    cache: Arc<ResponseCache>,
    key: CacheKey,
    ticket: u64,
    execution: SharedExecution,
}

impl Waiter {
    /// Ticket of the execution this waiter shares
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Wait for the shared outcome, or give up when `cancel` fires
    ///
    /// Giving up only ends this caller's wait.
    pub async fn wait(self, cancel: &CancellationToken) -> Result<ModelResponse, RouterError> {
        let execution = self.execution.clone();

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(RouterError::Cancelled),
            result = execution => result,
        }
    }
}

impl Drop for Waiter {
    fn drop(&mut self) {
        self.cache.release(&self.key, self.ticket);
    }
}

impl fmt::Debug for Waiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Waiter")
            .field("key", &self.key)
            .field("ticket", &self.ticket)
            .finish()
    }
}

/// Completed-response cache with in-flight deduplication
#[derive(Default)]
pub struct ResponseCache {
    completed: DashMap<CacheKey, ModelResponse>,
    pending: DashMap<CacheKey, PendingRequest>,
    generation: RwLock<u64>,
    next_ticket: AtomicU64,
    stats: AtomicCacheStats,
}

impl fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseCache")
            .field("completed", &self.completed.len())
            .field("pending", &self.pending.len())
            .field("generation", &*self.generation.read())
            .finish()
    }
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a completed response, marked as cached
    pub fn get(&self, key: &CacheKey) -> Option<ModelResponse> {
        let response = self.completed.get(key).map(|entry| ModelResponse {
            cached: true,
            ..entry.value().clone()
        })?;

        self.stats.hits.fetch_add(1, Ordering::Relaxed);
        debug!("Cache hit for key: {}", key);
        Some(response)
    }

    /// Return a completed response, join the in-flight execution, or start one
    ///
    /// `start` is called at most once, only when this caller creates the
    /// pending entry, with the token the execution must honour. The execution
    /// is spawned onto the runtime, so it settles the cache whether or not
    /// anyone is still waiting. Must be called within a Tokio runtime.
    pub fn lookup_or_start<F, Fut>(self: &Arc<Self>, key: &CacheKey, start: F) -> CacheLookup
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = Result<ModelResponse, RouterError>> + Send + 'static,
    {
        if let Some(response) = self.get(key) {
            return CacheLookup::Hit(response);
        }

        // Read before touching the pending map; `clear` takes the write lock
        // while it clears that map.
        let generation = *self.generation.read();

        match self.pending.entry(key.clone()) {
            Entry::Occupied(entry) if !entry.get().cancel.is_cancelled() => {
                let pending = entry.get();
                pending.waiters.fetch_add(1, Ordering::AcqRel);
                self.stats.joins.fetch_add(1, Ordering::Relaxed);
                debug!("Joining in-flight request for key: {}", key);

                CacheLookup::Joined(self.waiter(key, pending.ticket, pending.execution.clone()))
            }
            entry => {
                // Settled between the completed check and the entry lock
                if let Some(response) = self.get(key) {
                    return CacheLookup::Hit(response);
                }

                let pending = self.spawn_execution(key, generation, start);
                let waiter = self.waiter(key, pending.ticket, pending.execution.clone());

                // An occupied entry here was given up by all its waiters
                match entry {
                    Entry::Occupied(mut stale) => {
                        stale.insert(pending);
                    }
                    Entry::Vacant(vacant) => {
                        vacant.insert(pending);
                    }
                }
                self.stats.misses.fetch_add(1, Ordering::Relaxed);

                CacheLookup::Started(waiter)
            }
        }
    }

    fn waiter(self: &Arc<Self>, key: &CacheKey, ticket: u64, execution: SharedExecution) -> Waiter {
        Waiter {
            cache: Arc::clone(self),
            key: key.clone(),
            ticket,
            execution,
        }
    }

    fn spawn_execution<F, Fut>(
        self: &Arc<Self>,
        key: &CacheKey,
        generation: u64,
        start: F,
    ) -> PendingRequest
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = Result<ModelResponse, RouterError>> + Send + 'static,
    {
        let ticket = self.next_ticket.fetch_add(1, Ordering::Relaxed);
        let cancel = CancellationToken::new();
        let work = start(cancel.clone());

        let cache = Arc::clone(self);
        let settle_key = key.clone();
        let task = tokio::spawn(async move {
            let result = work.await;
            cache.settle(&settle_key, ticket, generation, &result);
            result
        });

        let cache = Arc::clone(self);
        let task_key = key.clone();
        let execution = async move {
            match task.await {
                Ok(result) => result,
                Err(err) => {
                    warn!("In-flight request for key {} did not complete: {}", task_key, err);
                    cache
                        .pending
                        .remove_if(&task_key, |_, pending| pending.ticket == ticket);
                    Err(RouterError::Cancelled)
                }
            }
        }
        .boxed()
        .shared();

        PendingRequest {
            ticket,
            execution,
            cancel,
            waiters: AtomicUsize::new(1),
        }
    }

    fn settle(
        &self,
        key: &CacheKey,
        ticket: u64,
        generation: u64,
        result: &Result<ModelResponse, RouterError>,
    ) {
        {
            let current = self.generation.read();
            if let Ok(response) = result
                && *current == generation
            {
                self.completed.insert(
                    key.clone(),
                    ModelResponse {
                        cached: false,
                        ..response.clone()
                    },
                );
                self.stats.stores.fetch_add(1, Ordering::Relaxed);
                debug!("Cached response for key: {}", key);
            }
        }

        self.pending
            .remove_if(key, |_, pending| pending.ticket == ticket);
    }

    /// Release one waiter's share; the last one out cancels the execution
    fn release(&self, key: &CacheKey, ticket: u64) {
        let Some(pending) = self.pending.get(key) else {
            return;
        };
        if pending.ticket != ticket {
            return;
        }

        if pending.waiters.fetch_sub(1, Ordering::AcqRel) == 1 {
            pending.cancel.cancel();
            debug!("No callers left, cancelling in-flight request for key: {}", key);
        }
    }

    /// Whether an execution is in flight for the key
    pub fn is_pending(&self, key: &CacheKey) -> bool {
        self.pending.contains_key(key)
    }

    /// Get cache statistics (lock-free snapshot)
    pub fn stats(&self) -> CacheStats {
        self.stats
            .snapshot(self.completed.len(), self.pending.len())
    }

    /// Clear completed and pending entries
    ///
    /// Executions already in flight keep running for the callers waiting on them.
    pub fn clear(&self) {
        let mut generation = self.generation.write();
        let dropped = self.completed.len();
        self.completed.clear();
        self.pending.clear();
        *generation += 1;
        drop(generation);

        self.stats.reset();

        info!("Response cache cleared ({} entries dropped)", dropped);
    }
}
