//! Read-through cache of collection snapshots keyed by resource name.

use dashmap::DashMap;
use std::any::Any;
use std::sync::Arc;

use crate::errors::Result;

#[derive(Default)]
struct CacheSlot {
    generation: u64,
    value: Option<Arc<dyn Any + Send + Sync>>,
}

/// Snapshots are stored behind `Arc` so readers share them without copying.
///
/// Every invalidation bumps the slot's generation. A load that started
/// before an invalidation finishes with a stale generation and is returned
/// to its caller but not stored.
#[derive(Default)]
pub struct QueryCache {
    slots: DashMap<&'static str, CacheSlot>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let value = {
            let slot = self.slots.get(key)?;
            slot.value.clone()?
        };
        value.downcast::<T>().ok()
    }

    pub fn get_or_load<T, F>(&self, key: &'static str, load: F) -> Result<Arc<T>>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> Result<T>,
    {
        if let Some(hit) = self.get::<T>(key) {
            return Ok(hit);
        }
        let generation = self.generation(key);
        let loaded = Arc::new(load()?);
        if !self.store_if_current(key, generation, loaded.clone()) {
            log::debug!("Discarding stale '{}' snapshot", key);
        }
        Ok(loaded)
    }

    /// Drops the cached snapshot for `key`.
    pub fn invalidate(&self, key: &'static str) {
        let mut slot = self.slots.entry(key).or_default();
        slot.generation += 1;
        slot.value = None;
    }

    pub fn is_cached(&self, key: &str) -> bool {
        self.slots
            .get(key)
            .map(|slot| slot.value.is_some())
            .unwrap_or(false)
    }

    fn generation(&self, key: &str) -> u64 {
        self.slots.get(key).map(|slot| slot.generation).unwrap_or(0)
    }

    fn store_if_current<T: Any + Send + Sync>(
        &self,
        key: &'static str,
        generation: u64,
        value: Arc<T>,
    ) -> bool {
        let mut slot = self.slots.entry(key).or_default();
        if slot.generation != generation {
            return false;
        }
        slot.value = Some(value as Arc<dyn Any + Send + Sync>);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn loads_once_until_invalidated() {
        let cache = QueryCache::new();
        let calls = Cell::new(0);
        let load = || {
            calls.set(calls.get() + 1);
            Ok(vec![1, 2, 3])
        };

        let first = cache.get_or_load("transactions", load).unwrap();
        let second = cache
            .get_or_load("transactions", || -> Result<Vec<i32>> {
                calls.set(calls.get() + 1);
                Ok(vec![])
            })
            .unwrap();
        assert_eq!(*first, vec![1, 2, 3]);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.get(), 1);

        cache.invalidate("transactions");
        assert!(!cache.is_cached("transactions"));
        let third = cache
            .get_or_load("transactions", || Ok(vec![4]))
            .unwrap();
        assert_eq!(*third, vec![4]);
    }

    #[test]
    fn invalidation_is_per_resource() {
        let cache = QueryCache::new();
        cache.get_or_load("goals", || Ok(1u8)).unwrap();
        cache.get_or_load("savings", || Ok(2u8)).unwrap();

        cache.invalidate("goals");

        assert!(!cache.is_cached("goals"));
        assert!(cache.is_cached("savings"));
    }

    #[test]
    fn load_racing_an_invalidation_is_not_stored() {
        let cache = QueryCache::new();
        let loaded = cache
            .get_or_load("subscriptions", || {
                cache.invalidate("subscriptions");
                Ok("stale".to_string())
            })
            .unwrap();

        assert_eq!(*loaded, "stale");
        assert!(!cache.is_cached("subscriptions"));
    }

    #[test]
    fn load_errors_are_not_cached() {
        let cache = QueryCache::new();
        let result: Result<Arc<u8>> = cache.get_or_load("goals", || {
            Err(crate::Error::Repository("down".to_string()))
        });
        assert!(result.is_err());
        assert!(!cache.is_cached("goals"));
    }
}
