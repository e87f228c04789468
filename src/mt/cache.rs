//! Bounded in-process translation cache
//!
//! Memoizes `(trimmed text, provider code) → translated text`. Eviction is first-in,
//! first-out by insertion order: reads never re-promote an entry, and overwriting an
//! existing key keeps its original position in the eviction queue.

use std::collections::{HashMap, VecDeque};

use parking_lot::Mutex;
use serde::Serialize;

/// Default maximum number of cached translations
pub const MAX_CACHE_SIZE: usize = 1000;

/// Composite cache key: source text without surrounding whitespace, plus provider code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    text: String,
    provider_code: String,
}

impl CacheKey {
    pub fn new(text: &str, provider_code: &str) -> Self {
        Self {
            text: text.trim().to_string(),
            provider_code: provider_code.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn provider_code(&self) -> &str {
        &self.provider_code
    }
}

/// Point-in-time counters for observability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

#[derive(Default)]
struct CacheInner {
    entries: HashMap<CacheKey, String>,
    // Insertion order; front is the next eviction victim
    order: VecDeque<CacheKey>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

/// FIFO-bounded translation cache, safe to share between tasks
pub struct TranslationCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
}

impl TranslationCache {
    /// Create a cache holding at most `capacity` entries (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::with_capacity(capacity.min(MAX_CACHE_SIZE)),
                order: VecDeque::with_capacity(capacity.min(MAX_CACHE_SIZE)),
                ..CacheInner::default()
            }),
            capacity,
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<String> {
        let mut inner = self.inner.lock();
        let found = inner.entries.get(key).cloned();
        if found.is_some() {
            inner.hits += 1;
        } else {
            inner.misses += 1;
        }
        found
    }

    /// Insert or overwrite a translation. A new key entering a full cache evicts the
    /// oldest inserted entry first; an overwrite never evicts.
    pub fn put(&self, key: CacheKey, value: String) {
        let mut inner = self.inner.lock();

        if let Some(existing) = inner.entries.get_mut(&key) {
            *existing = value;
            return;
        }

        if inner.entries.len() >= self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
                inner.evictions += 1;
            }
        }

        inner.order.push_back(key.clone());
        inner.entries.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            entries: inner.entries.len(),
            capacity: self.capacity,
            hits: inner.hits,
            misses: inner.misses,
            evictions: inner.evictions,
        }
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new(MAX_CACHE_SIZE)
    }
}

impl std::fmt::Debug for TranslationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationCache")
            .field("capacity", &self.capacity)
            .field("entries", &self.len())
            .finish()
    }
}
