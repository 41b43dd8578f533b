//! Formatter handle caching.

use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

use lru::LruCache;

/// A per-factory cache of formatter handles.
///
/// Handles are shared: a hit returns a clone of the same `Arc`. The cache is
/// unbounded unless built with [`FormatterCache::with_capacity`], in which
/// case the least recently used handle is evicted first.
pub struct FormatterCache<K: Hash + Eq, V: ?Sized> {
    entries: Mutex<LruCache<K, Arc<V>>>,
}

impl<K: Hash + Eq, V: ?Sized> FormatterCache<K, V> {
    /// A cache that never evicts.
    pub fn unbounded() -> Self {
        FormatterCache {
            entries: Mutex::new(LruCache::unbounded()),
        }
    }

    /// A cache holding at most `capacity` handles.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        FormatterCache {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, Arc<V>>> {
        // A panic while holding the lock cannot leave a half-inserted entry.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns the cached handle for `key`, building and caching it on a miss.
    ///
    /// The lock is held while `build` runs, so concurrent misses on the same
    /// key construct a single handle.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: K,
        build: impl FnOnce() -> Result<Arc<V>, E>,
    ) -> Result<Arc<V>, E> {
        let mut cache = self.lock();

        if let Some(handle) = cache.get(&key) {
            return Ok(Arc::clone(handle));
        }

        let handle = build()?;
        cache.put(key, Arc::clone(&handle));
        Ok(handle)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl<K: Hash + Eq, V: ?Sized> Default for FormatterCache<K, V> {
    fn default() -> Self {
        FormatterCache::unbounded()
    }
}

impl<K: Hash + Eq, V: ?Sized> std::fmt::Debug for FormatterCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterCache")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_returns_same_handle() {
        let cache: FormatterCache<&str, String> = FormatterCache::unbounded();
        let first = cache
            .get_or_try_insert_with("a", || Ok::<_, ()>(Arc::new("one".to_string())))
            .unwrap();
        let second = cache
            .get_or_try_insert_with("a", || Ok::<_, ()>(Arc::new("two".to_string())))
            .unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*second, "one");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failed_build_is_not_cached() {
        let cache: FormatterCache<&str, String> = FormatterCache::unbounded();
        let result = cache.get_or_try_insert_with("a", || Err("boom"));
        assert_eq!(result.unwrap_err(), "boom");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_bounded_cache_evicts_least_recently_used() {
        let cache: FormatterCache<u8, u8> =
            FormatterCache::with_capacity(NonZeroUsize::new(2).unwrap());
        for key in 0..3u8 {
            cache
                .get_or_try_insert_with(key, || Ok::<_, ()>(Arc::new(key)))
                .unwrap();
        }
        assert_eq!(cache.len(), 2);
        let rebuilt = cache
            .get_or_try_insert_with(0, || Ok::<_, ()>(Arc::new(100)))
            .unwrap();
        assert_eq!(*rebuilt, 100);
    }

    #[test]
    fn test_clear() {
        let cache: FormatterCache<u8, u8> = FormatterCache::default();
        cache
            .get_or_try_insert_with(1, || Ok::<_, ()>(Arc::new(1)))
            .unwrap();
        cache.clear();
        assert!(cache.is_empty());
    }
}
