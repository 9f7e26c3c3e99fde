//! Registry of observed list cache keys.
//!
//! The listing query has an unbounded key space (any page/limit/title
//! combination), so instead of scanning the cache store on every write the
//! keys a read could have populated are recorded here and drained on mutation.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Set of list cache keys that may currently be present in the cache store.
///
/// The registry may hold keys whose entries have already expired; it is an
/// invalidation aid, never a source of truth for cache contents.
#[derive(Debug, Default)]
pub struct CacheKeyRegistry {
    keys: Mutex<HashSet<String>>,
}

impl CacheKeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Registry state is a plain set; a panic while holding the lock cannot
    // leave it half-updated, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.keys.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a key. Idempotent.
    pub fn register(&self, key: impl Into<String>) {
        self.lock().insert(key.into());
    }

    /// Takes every registered key, leaving the registry empty.
    ///
    /// A `register` racing with this call lands either in the returned set or
    /// in the next generation, never in neither.
    pub fn drain(&self) -> HashSet<String> {
        std::mem::take(&mut *self.lock())
    }

    /// Puts back keys whose invalidation did not complete
    pub fn restore(&self, keys: impl IntoIterator<Item = String>) {
        self.lock().extend(keys);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_register_is_idempotent() {
        let registry = CacheKeyRegistry::new();

        registry.register("list page=1 limit=2 title=all");
        registry.register("list page=1 limit=2 title=all");

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("list page=1 limit=2 title=all"));
    }

    #[test]
    fn test_drain_returns_all_and_empties() {
        let registry = CacheKeyRegistry::new();
        registry.register("a");
        registry.register("b");

        let drained = registry.drain();

        assert_eq!(drained.len(), 2);
        assert!(drained.contains("a"));
        assert!(drained.contains("b"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_drain_empty() {
        let registry = CacheKeyRegistry::new();

        assert!(registry.drain().is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_restore() {
        let registry = CacheKeyRegistry::new();
        registry.register("a");

        registry.restore(vec!["b".to_string(), "a".to_string()]);

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_concurrent_register_during_drain_is_never_lost() {
        let registry = Arc::new(CacheKeyRegistry::new());
        let writers: Vec<_> = (0..8)
            .map(|t| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    for i in 0..500 {
                        registry.register(format!("key-{}-{}", t, i));
                    }
                })
            })
            .collect();

        let mut seen = HashSet::new();

        while writers.iter().any(|w| !w.is_finished()) {
            seen.extend(registry.drain());
        }

        for writer in writers {
            writer.join().unwrap();
        }

        seen.extend(registry.drain());

        assert_eq!(seen.len(), 8 * 500);
    }
}
