//! Request Options Module
//!
//! Defines the per-request parameters that identify a cacheable fetch and
//! the cache controls that accompany it.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

// == Request Options ==
/// Parameters that shape an outbound request and participate in its cache
/// key. The bearer token deliberately does not appear here: credentials
/// are attached at send time and are excluded from request identity.
///
/// Query parameters live in a `BTreeMap` so that two logically-identical
/// requests always serialize to the same key.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RequestOptions {
    /// Query string parameters, ordered by name
    pub query: BTreeMap<String, String>,
}

impl RequestOptions {
    /// Creates empty options (plain GET with no parameters).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a query parameter.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }
}

// == Fetch Options ==
/// Cache controls for a single fetch.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    /// TTL for the cached result; the manager default applies when None
    pub ttl: Option<Duration>,
    /// Skip the cache read and fetch fresh (the result is still cached)
    pub force_refresh: bool,
}

// == Cache Key ==
/// Builds the cache key for a request: the URL joined with the canonical
/// serialization of its options.
///
/// Callers must keep semantically-equivalent requests serializing
/// identically; a divergence is not an error, it just degrades to a cache
/// miss.
pub fn cache_key(url: &str, options: &RequestOptions) -> String {
    let serialized =
        serde_json::to_string(options).expect("request options always serialize");
    format!("{}:{}", url, serialized)
}
