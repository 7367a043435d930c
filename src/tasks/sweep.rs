//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries, so
//! keys that are never re-read do not accumulate until teardown.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task loops forever, sleeping for `interval` between sweeps and
/// taking a write lock for each one. Abort the returned handle at session
/// teardown.
pub fn spawn_sweep_task<V>(
    cache: Arc<RwLock<CacheStore<V>>>,
    interval: Duration,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(?interval, "starting expiry sweep task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.sweep_expired()
            };

            if removed > 0 {
                info!(removed, "expiry sweep removed stale entries");
            } else {
                debug!("expiry sweep found no stale entries");
            }
        }
    })
}
