//! Observability infrastructure - cache metrics

mod metrics;

pub use metrics::{record_cache_hit, record_cache_invalidations, record_cache_miss};
