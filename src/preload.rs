//! Idle Preloader Module
//!
//! Warms the cache for a known set of URLs without competing with
//! user-triggered requests: waits for host idle (bounded by a timeout, so
//! warming still happens under constant load), then issues dedup-backed
//! cached fetches. Failures never surface; warming is pure optimization.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

use crate::fetch::{FetchOptions, RequestManager, RequestOptions};
use crate::host::IdleScheduler;

// == Idle Preloader ==
/// Schedules low-priority prefetches through a [`RequestManager`].
pub struct IdlePreloader {
    manager: Arc<RequestManager>,
    scheduler: Arc<dyn IdleScheduler>,
    idle_timeout: Duration,
}

impl IdlePreloader {
    // == Constructor ==
    /// Creates a preloader waiting on `scheduler` for at most
    /// `idle_timeout` before fetching anyway.
    pub fn new(
        manager: Arc<RequestManager>,
        scheduler: Arc<dyn IdleScheduler>,
        idle_timeout: Duration,
    ) -> Self {
        Self {
            manager,
            scheduler,
            idle_timeout,
        }
    }

    // == Preload ==
    /// Spawns the warming task for the given paths.
    ///
    /// Every fetch runs through the deduplicated cached path with the
    /// supplied bearer token, so a user-triggered request for the same
    /// resource joins the warming call instead of duplicating it. All
    /// failures are swallowed.
    pub fn preload(
        &self,
        paths: Vec<String>,
        token: Option<String>,
        ttl: Option<Duration>,
    ) -> JoinHandle<()> {
        let manager = Arc::clone(&self.manager);
        let scheduler = Arc::clone(&self.scheduler);
        let idle_timeout = self.idle_timeout;

        tokio::spawn(async move {
            if tokio::time::timeout(idle_timeout, scheduler.wait_for_idle())
                .await
                .is_err()
            {
                trace!("idle wait timed out, preloading anyway");
            }

            let opts = FetchOptions {
                ttl,
                force_refresh: false,
            };

            for path in paths {
                let options = RequestOptions::new();
                if let Err(err) = manager
                    .get_cached(&path, &options, token.as_deref(), opts)
                    .await
                {
                    trace!(%path, error = %err, "preload fetch skipped");
                }
            }
        })
    }
}
