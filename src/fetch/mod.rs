//! Fetch Module
//!
//! The outbound path: HTTP client, request identity and cache keys,
//! concurrency-bounded admission, and the deduplicating request manager.

mod http;
mod manager;
mod options;
mod queue;

// Re-export public types
pub use http::HttpClient;
pub use manager::RequestManager;
pub use options::{cache_key, FetchOptions, RequestOptions};
pub use queue::RequestQueue;
