//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Request manager configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. These are constructor-time constants; nothing here is mutable
/// at runtime.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend API
    pub base_url: String,
    /// Maximum number of simultaneous outbound requests
    pub max_concurrent: usize,
    /// Default TTL in milliseconds for cached responses without an explicit TTL
    pub default_ttl_ms: u64,
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Upper bound in milliseconds on waiting for host idle before preloading
    pub idle_timeout_ms: u64,
    /// Background expiry sweep interval in seconds
    pub sweep_interval_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `API_BASE_URL` - Backend base URL (default: http://localhost:8000)
    /// - `MAX_CONCURRENT` - Simultaneous outbound requests (default: 6)
    /// - `DEFAULT_TTL_MS` - Default cache TTL in milliseconds (default: 30000)
    /// - `MAX_CACHE_ENTRIES` - Maximum cache entries (default: 100)
    /// - `IDLE_TIMEOUT_MS` - Idle-wait bound for preloading (default: 2000)
    /// - `SWEEP_INTERVAL` - Expiry sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            max_concurrent: env::var("MAX_CONCURRENT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(6),
            default_ttl_ms: env::var("DEFAULT_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30_000),
            max_entries: env::var("MAX_CACHE_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            idle_timeout_ms: env::var("IDLE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2_000),
            sweep_interval_secs: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Default TTL as a Duration.
    pub fn default_ttl(&self) -> Duration {
        Duration::from_millis(self.default_ttl_ms)
    }

    /// Idle-wait bound as a Duration.
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }

    /// Sweep interval as a Duration.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            max_concurrent: 6,
            default_ttl_ms: 30_000,
            max_entries: 100,
            idle_timeout_ms: 2_000,
            sweep_interval_secs: 60,
        }
    }
}
