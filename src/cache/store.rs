//! Cache Store Module
//!
//! Bounded key/value store combining HashMap storage with insertion-order
//! eviction and lazy TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, InsertionOrder};

// == Cache Store ==
/// Holds the most recent successfully-fetched value per key, with expiry
/// and a capacity bound.
///
/// All operations are pure in-memory structural operations and cannot fail.
/// Expiry is lazy: an expired entry is removed by the `get` that observes
/// it (or by `sweep_expired`), and is never handed out.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// First-insertion order, for eviction
    order: InsertionOrder,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// TTL applied when the caller does not supply one
    default_ttl: Duration,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with the given capacity and default TTL.
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            max_entries,
            default_ttl,
        }
    }

    // == Get ==
    /// Returns the stored value if present and not expired.
    ///
    /// An expired entry is removed on the spot and counts as a miss.
    /// Reads do not refresh an entry's eviction position.
    pub fn get(&mut self, key: &str) -> Option<V> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                self.entries.remove(key);
                self.order.remove(key);
                self.stats.set_entries(self.entries.len());
                self.stats.record_miss();
                return None;
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Set ==
    /// Stores a value under a key with an optional TTL.
    ///
    /// If the key already exists, the value and TTL are replaced and the
    /// entry keeps its original insertion position. If a new key would
    /// exceed capacity, the oldest-inserted entry is evicted first.
    pub fn set(&mut self, key: String, value: V, ttl: Option<Duration>) {
        let effective_ttl = ttl.unwrap_or(self.default_ttl);
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(evicted_key) = self.order.evict_oldest() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
            }
        }

        self.entries
            .insert(key.clone(), CacheEntry::new(value, effective_ttl));
        self.order.record(&key);
        self.stats.set_entries(self.entries.len());
    }

    // == Delete ==
    /// Removes an entry by key, for explicit invalidation after a mutation.
    ///
    /// Returns true if an entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.order.remove(key);
            self.stats.set_entries(self.entries.len());
        }
        removed
    }

    // == Clear ==
    /// Drops every entry; used at session teardown.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.set_entries(0);
    }

    // == Sweep Expired ==
    /// Proactively removes all entries whose TTL has elapsed, independent
    /// of reads. Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.order.remove(&key);
        }

        self.stats.set_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
