//! Request Manager Module
//!
//! Ties the cache store, the in-flight table and the bounded queue into
//! one fetch path: cache read, join-or-start of the pending operation,
//! admission through the queue, write-back, and settlement fan-out.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::{broadcast, Mutex, RwLock};
use tracing::{debug, trace};

use crate::cache::{CacheStats, CacheStore};
use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::fetch::http::HttpClient;
use crate::fetch::options::{cache_key, FetchOptions, RequestOptions};
use crate::fetch::queue::RequestQueue;

/// In-flight operations by cache key. At most one sender exists per key;
/// every late caller for the same key subscribes to it instead of starting
/// a second network call.
type PendingMap = HashMap<String, broadcast::Sender<Result<Value>>>;

// == Request Manager ==
/// One instance serves a whole page session: it owns the response cache,
/// the in-flight table and the outbound admission queue. Constructed
/// explicitly from [`Config`] and passed to callers; there is no ambient
/// global instance.
pub struct RequestManager {
    store: Arc<RwLock<CacheStore<Value>>>,
    pending: Mutex<PendingMap>,
    queue: RequestQueue,
    http: HttpClient,
    default_ttl: Duration,
}

impl RequestManager {
    // == Constructor ==
    /// Creates a manager from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new(
                config.max_entries,
                config.default_ttl(),
            ))),
            pending: Mutex::new(HashMap::new()),
            queue: RequestQueue::new(config.max_concurrent),
            http: HttpClient::new(config.base_url.clone()),
            default_ttl: config.default_ttl(),
        }
    }

    // == Fetch With Dedup ==
    /// Returns the cached value for `key`, or joins the in-flight fetch
    /// for it, or starts one via `producer`.
    ///
    /// The pending-table check-and-set happens under a single lock
    /// acquisition with no await inside, so between registration and
    /// settlement every additional caller for the key joins the same
    /// operation. On success the result is cached with `opts.ttl` (manager
    /// default when absent) and delivered to every joiner; on failure the
    /// same error goes to every joiner and nothing is cached.
    pub async fn fetch_with_dedup<F, Fut>(
        &self,
        key: &str,
        producer: F,
        opts: FetchOptions,
    ) -> Result<Value>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value>>,
    {
        if !opts.force_refresh {
            if let Some(value) = self.store.write().await.get(key) {
                trace!(key, "cache hit");
                return Ok(value);
            }
        }

        // Join-or-lead: one lock acquisition, no await while held.
        let joined = {
            let mut pending = self.pending.lock().await;
            match pending.get(key) {
                Some(tx) => Some(tx.subscribe()),
                None => {
                    let (tx, _) = broadcast::channel(1);
                    pending.insert(key.to_string(), tx);
                    None
                }
            }
        };

        if let Some(mut rx) = joined {
            debug!(key, "joining in-flight fetch");
            return match rx.recv().await {
                Ok(result) => result,
                // The leader disappeared without settling (session teardown)
                Err(_) => Err(FetchError::Transport {
                    url: key.to_string(),
                    message: "in-flight fetch was dropped".to_string(),
                }),
            };
        }

        debug!(key, "starting fetch");
        let result = self.queue.run(producer()).await;

        if let Ok(value) = &result {
            let ttl = opts.ttl.unwrap_or(self.default_ttl);
            self.store
                .write()
                .await
                .set(key.to_string(), value.clone(), Some(ttl));
        }

        // Clear the pending entry before fan-out so a caller arriving
        // after settlement starts fresh instead of joining a dead channel.
        let tx = self.pending.lock().await.remove(key);
        if let Some(tx) = tx {
            // No joiners is fine; the leader already holds the result
            let _ = tx.send(result.clone());
        }

        result
    }

    // == Get Cached ==
    /// Cached JSON GET against the configured backend: builds the cache
    /// key from the URL and options, then goes through
    /// [`Self::fetch_with_dedup`] with an HTTP producer.
    pub async fn get_cached(
        &self,
        path: &str,
        options: &RequestOptions,
        token: Option<&str>,
        opts: FetchOptions,
    ) -> Result<Value> {
        let url = self.http.url_for(path);
        let key = cache_key(&url, options);
        self.fetch_with_dedup(&key, || self.http.get_json(&url, options, token), opts)
            .await
    }

    // == Key For ==
    /// The cache key `get_cached` would use for a path and options; used
    /// by callers that invalidate after a mutation.
    pub fn key_for(&self, path: &str, options: &RequestOptions) -> String {
        cache_key(&self.http.url_for(path), options)
    }

    // == Invalidate ==
    /// Drops a single cached entry, typically after a mutation made the
    /// cached read stale. Returns true if an entry was removed.
    pub async fn invalidate(&self, key: &str) -> bool {
        debug!(key, "invalidating cache entry");
        self.store.write().await.delete(key)
    }

    // == Clear ==
    /// Session teardown: drops every cached entry and every pending-table
    /// record. In-flight joiners observe a dropped fetch; settled leaders
    /// still return their own result.
    pub async fn clear(&self) {
        debug!("clearing request manager state");
        self.store.write().await.clear();
        self.pending.lock().await.clear();
    }

    // == Stats ==
    /// Current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == In Flight ==
    /// Number of admitted-but-unsettled outbound operations.
    pub fn in_flight(&self) -> usize {
        self.queue.in_flight()
    }

    // == Store ==
    /// Shared handle to the underlying store, for wiring the background
    /// expiry sweep.
    pub fn store(&self) -> Arc<RwLock<CacheStore<Value>>> {
        Arc::clone(&self.store)
    }
}
