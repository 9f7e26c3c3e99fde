//! Cache metrics recorded through the `metrics` facade
//!
//! No recorder is installed by this crate; without one these calls are no-ops.

use metrics::counter;

/// Record a cache hit for a read of the given kind (`list` or `item`)
pub fn record_cache_hit(kind: &'static str) {
    counter!("posts_cache_hits_total", "kind" => kind).increment(1);
}

/// Record a cache miss; read failures of the cache store count as misses
pub fn record_cache_miss(kind: &'static str) {
    counter!("posts_cache_misses_total", "kind" => kind).increment(1);
}

/// Record keys deleted from the cache store by a write
pub fn record_cache_invalidations(count: u64) {
    if count > 0 {
        counter!("posts_cache_invalidations_total").increment(count);
    }
}
