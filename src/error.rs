//! Error types for the request cache
//!
//! Provides unified error handling using thiserror.
//!
//! Every variant carries owned strings and derives `Clone`: when several
//! callers join one in-flight request, the single failure is delivered to
//! all of them over a broadcast channel, which requires a cloneable payload.

use thiserror::Error;

// == Fetch Error Enum ==
/// Unified error type for outbound fetch operations.
///
/// The cache/dedup/queue layers never retry or transform these errors;
/// they pass through exactly what the underlying call produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network-level failure (connect, timeout, broken transfer)
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// Server answered with a non-2xx status
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Response body could not be decoded as JSON
    #[error("invalid response body from {url}: {message}")]
    Decode { url: String, message: String },
}

// == Result Type Alias ==
/// Convenience Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
