//! Route resolution caching.
//!
//! [`ResolveCache`] is an LRU cache mapping navigated URL paths to their
//! resolved [`RouteSnapshot`] chains, so repeat visits to the same view
//! (the common pattern when flipping between sibling entities) skip the
//! registry walk. Gated behind the `cache` feature flag; uses the
//! [`lru`] crate internally.
//!
//! [`CacheStats`] tracks hits, misses, and invalidations so cache
//! effectiveness can be observed at runtime.
//!
//! # Examples
//!
//! ```
//! use console_navigator::cache::ResolveCache;
//! use console_navigator::{RouteParams, RouteSnapshot};
//!
//! let mut cache = ResolveCache::new();
//! let chain = RouteSnapshot::new("nodes", None, RouteParams::new());
//! cache.insert("/nodes".to_string(), chain);
//!
//! assert!(cache.get("/nodes").is_some());
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::snapshot::RouteSnapshot;
use crate::trace_log;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default number of cached resolutions. A console rarely has more than a
/// few dozen distinct URLs live at once.
const DEFAULT_CAPACITY: usize = 64;

/// Counters tracking cache hit/miss rates and invalidations.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: usize,
    /// Number of cache misses.
    pub misses: usize,
    /// Number of full invalidations (via [`ResolveCache::clear`]).
    pub invalidations: usize,
}

impl CacheStats {
    /// Return the hit rate as a value in `0.0..=1.0`.
    ///
    /// Returns `0.0` if no lookups have been performed.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of resolved snapshot chains, keyed by normalized URL path.
#[derive(Debug)]
pub struct ResolveCache {
    entries: LruCache<String, RouteSnapshot>,
    stats: CacheStats,
}

impl ResolveCache {
    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a cache bounded to `capacity` entries (clamped to at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Look up the resolved chain for a path, updating hit/miss counters.
    pub fn get(&mut self, path: &str) -> Option<&RouteSnapshot> {
        if self.entries.contains(path) {
            self.stats.hits += 1;
            trace_log!("resolve cache hit for '{}'", path);
        } else {
            self.stats.misses += 1;
            trace_log!("resolve cache miss for '{}'", path);
        }
        self.entries.get(path)
    }

    /// Store the resolved chain for a path.
    pub fn insert(&mut self, path: String, snapshot: RouteSnapshot) {
        self.entries.put(path, snapshot);
    }

    /// Drop every entry. Called whenever the route registry changes, since
    /// cached chains reference the old registry shape.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.invalidations += 1;
    }

    /// Number of cached resolutions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current hit/miss/invalidation counters.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl Default for ResolveCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RouteParams;

    fn chain(segment: &str) -> RouteSnapshot {
        RouteSnapshot::new(segment, None, RouteParams::new())
    }

    #[test]
    fn test_hit_and_miss_counting() {
        let mut cache = ResolveCache::new();
        assert!(cache.get("/nodes").is_none());
        assert_eq!(cache.stats().misses, 1);

        cache.insert("/nodes".to_string(), chain("nodes"));
        assert!(cache.get("/nodes").is_some());
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_clear_counts_invalidation() {
        let mut cache = ResolveCache::new();
        cache.insert("/nodes".to_string(), chain("nodes"));
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.stats().invalidations, 1);
    }

    #[test]
    fn test_lru_eviction_at_capacity() {
        let mut cache = ResolveCache::with_capacity(2);
        cache.insert("/a".to_string(), chain("a"));
        cache.insert("/b".to_string(), chain("b"));
        cache.insert("/c".to_string(), chain("c"));

        assert_eq!(cache.len(), 2);
        // "/a" was the least recently used entry.
        assert!(cache.get("/a").is_none());
    }

    #[test]
    fn test_hit_rate() {
        let mut cache = ResolveCache::new();
        assert_eq!(cache.stats().hit_rate(), 0.0);

        cache.insert("/a".to_string(), chain("a"));
        cache.get("/a");
        cache.get("/missing");

        assert!((cache.stats().hit_rate() - 0.5).abs() < f64::EPSILON);
    }
}
