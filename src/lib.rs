//! quotecache - client-side request/cache manager for market-data views
//!
//! Provides a bounded TTL response cache, deduplication of concurrent
//! identical fetches, a concurrency cap on outbound calls, adaptive
//! polling intervals keyed to the trading session and host signals, and
//! idle-time cache warming.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod host;
pub mod poll;
pub mod preload;
pub mod tasks;

pub use cache::{CacheStats, CacheStore};
pub use config::Config;
pub use error::{FetchError, Result};
pub use fetch::{cache_key, FetchOptions, HttpClient, RequestManager, RequestOptions, RequestQueue};
pub use host::{ConnectionType, DefaultHost, FallbackIdle, HostSignals, IdleScheduler};
pub use poll::{poll_interval, poll_interval_now, PollContext};
pub use preload::IdlePreloader;
pub use tasks::spawn_sweep_task;
