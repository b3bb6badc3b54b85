//! TTL cache store backed by a concurrent map.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cache::CacheKey;

struct CacheEntry {
    payload: Vec<u8>,
    stored_at: Instant,
}

/// Process-shared TTL cache.
///
/// Values are stored as serialized JSON so unrelated result types can share
/// one map. The cache itself cannot fail; a payload that no longer
/// deserializes is treated as a miss.
#[derive(Default)]
pub struct TtlCache {
    entries: DashMap<CacheKey, CacheEntry>,
}

impl TtlCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Returns the stored value only if it is younger than `ttl`.
    ///
    /// A stale entry is a miss but is not evicted; the next `insert` for the
    /// key overwrites it.
    pub fn get<T: DeserializeOwned>(&self, key: &CacheKey, ttl: Duration) -> Option<T> {
        self.get_at(key, ttl, Instant::now())
    }

    fn get_at<T: DeserializeOwned>(&self, key: &CacheKey, ttl: Duration, now: Instant) -> Option<T> {
        let entry = self.entries.get(key)?;
        if now.duration_since(entry.stored_at) >= ttl {
            return None;
        }
        match serde_json::from_slice(&entry.payload) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "cache payload no longer deserializes, treating as miss");
                None
            }
        }
    }

    /// Unconditionally overwrites the entry for `key` with a fresh timestamp.
    pub fn insert<T: Serialize>(&self, key: CacheKey, value: &T) {
        self.insert_at(key, value, Instant::now());
    }

    fn insert_at<T: Serialize>(&self, key: CacheKey, value: &T, now: Instant) {
        match serde_json::to_vec(value) {
            Ok(payload) => {
                self.entries.insert(
                    key,
                    CacheEntry {
                        payload,
                        stored_at: now,
                    },
                );
            }
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "failed to serialize cache payload, skipping store");
            }
        }
    }

    /// Removes the entry if present; no-op otherwise.
    pub fn remove(&self, key: &CacheKey) {
        self.entries.remove(key);
    }

    /// Number of entries currently held, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TTL: Duration = Duration::from_secs(300);

    #[test]
    fn fresh_entry_is_returned() {
        let cache = TtlCache::new();
        cache.insert(CacheKey::Categories, &vec!["a", "b"]);
        let got: Option<Vec<String>> = cache.get(&CacheKey::Categories, TTL);
        assert_eq!(got, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn stale_entry_is_a_miss_but_stays_in_the_map() {
        let cache = TtlCache::new();
        let stored = Instant::now();
        cache.insert_at(CacheKey::Pages, &42u32, stored);

        let later = stored + Duration::from_secs(301);
        let got: Option<u32> = cache.get_at(&CacheKey::Pages, TTL, later);
        assert_eq!(got, None);
        // No eviction on stale read.
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn ttl_is_supplied_by_the_reader() {
        let cache = TtlCache::new();
        let stored = Instant::now();
        cache.insert_at(CacheKey::Settings, &1u32, stored);

        let now = stored + Duration::from_secs(200);
        // Same entry, two staleness tolerances.
        assert_eq!(
            cache.get_at::<u32>(&CacheKey::Settings, Duration::from_secs(300), now),
            Some(1)
        );
        assert_eq!(
            cache.get_at::<u32>(&CacheKey::Settings, Duration::from_secs(120), now),
            None
        );
    }

    #[test]
    fn expired_entry_never_resurfaces_without_insert() {
        let cache = TtlCache::new();
        let stored = Instant::now();
        cache.insert_at(CacheKey::Banners, &7u32, stored);

        let later = stored + Duration::from_secs(400);
        assert_eq!(cache.get_at::<u32>(&CacheKey::Banners, TTL, later), None);
        let even_later = later + Duration::from_secs(400);
        assert_eq!(cache.get_at::<u32>(&CacheKey::Banners, TTL, even_later), None);

        cache.insert_at(CacheKey::Banners, &8u32, even_later);
        assert_eq!(cache.get_at::<u32>(&CacheKey::Banners, TTL, even_later), Some(8));
    }

    #[test]
    fn remove_forces_a_miss_regardless_of_ttl() {
        let cache = TtlCache::new();
        cache.insert(CacheKey::Categories, &1u32);
        cache.remove(&CacheKey::Categories);
        let got: Option<u32> = cache.get(&CacheKey::Categories, Duration::from_secs(u64::MAX / 4));
        assert_eq!(got, None);
    }

    #[test]
    fn insert_overwrites_existing_entry() {
        let cache = TtlCache::new();
        cache.insert(CacheKey::Settings, &"old");
        cache.insert(CacheKey::Settings, &"new");
        let got: Option<String> = cache.get(&CacheKey::Settings, TTL);
        assert_eq!(got, Some("new".to_string()));
        assert_eq!(cache.len(), 1);
    }

    proptest! {
        /// get returns the value iff now - stored_at < ttl, for arbitrary
        /// (age, ttl) pairs.
        #[test]
        fn freshness_boundary(age_ms in 0u64..10_000, ttl_ms in 1u64..10_000) {
            let cache = TtlCache::new();
            let stored = Instant::now();
            cache.insert_at(CacheKey::Categories, &99u32, stored);

            let now = stored + Duration::from_millis(age_ms);
            let got = cache.get_at::<u32>(&CacheKey::Categories, Duration::from_millis(ttl_ms), now);
            if age_ms < ttl_ms {
                prop_assert_eq!(got, Some(99));
            } else {
                prop_assert_eq!(got, None);
            }
        }
    }
}
