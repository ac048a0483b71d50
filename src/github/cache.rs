// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Session cache of fetched snapshots, keyed by `owner/repo`.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use super::fetch::RepoSnapshot;
use super::url::RepoCoordinates;

/// A cached value with its insertion time.
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    inserted: Instant,
    ttl: Duration,
}

impl<T> CacheEntry<T> {
    fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            inserted: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.inserted.elapsed() > self.ttl
    }
}

/// Snapshot cache with a fixed time-to-live.
#[derive(Debug)]
pub struct SnapshotCache {
    entries: Mutex<HashMap<String, CacheEntry<RepoSnapshot>>>,
    ttl: Duration,
}

impl SnapshotCache {
    /// Create an empty cache.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// A fresh snapshot for `repo`, if one is cached.
    pub fn get(&self, repo: &RepoCoordinates) -> Option<RepoSnapshot> {
        let mut entries = self.entries.lock().ok()?;
        let key = repo.cache_key();

        match entries.get(&key) {
            Some(entry) if !entry.is_expired() => {
                tracing::debug!("Cache hit for {}", repo);
                Some(entry.value.clone())
            }
            Some(_) => {
                entries.remove(&key);
                None
            }
            None => None,
        }
    }

    /// Store a snapshot for `repo`.
    pub fn insert(&self, repo: &RepoCoordinates, snapshot: RepoSnapshot) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(repo.cache_key(), CacheEntry::new(snapshot, self.ttl));
        }
    }

    /// Number of stored snapshots, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether the cache holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(name: &str) -> RepoSnapshot {
        let mut snapshot = RepoSnapshot::default();
        snapshot.metadata.name = name.to_string();
        snapshot
    }

    #[test]
    fn test_insert_and_get() {
        let cache = SnapshotCache::new(Duration::from_secs(60));
        let repo = RepoCoordinates::new("foo", "bar");
        assert!(cache.get(&repo).is_none());

        cache.insert(&repo, snapshot("bar"));
        assert_eq!(cache.get(&repo).unwrap().metadata.name, "bar");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_key_ignores_case() {
        let cache = SnapshotCache::new(Duration::from_secs(60));
        cache.insert(&RepoCoordinates::new("Foo", "Bar"), snapshot("Bar"));
        assert!(cache.get(&RepoCoordinates::new("foo", "bar")).is_some());
    }

    #[test]
    fn test_expired_entries_are_evicted() {
        let cache = SnapshotCache::new(Duration::ZERO);
        let repo = RepoCoordinates::new("foo", "bar");
        cache.insert(&repo, snapshot("bar"));
        std::thread::sleep(Duration::from_millis(5));

        assert!(cache.get(&repo).is_none());
        assert!(cache.is_empty());
    }
}
