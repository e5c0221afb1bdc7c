//! Caches for fully-built features.
//!
//! Entries are keyed by item id and factory kind (see [`CacheKey`]) and hold the final
//! [`Feature`], so a hit skips both geometry reduction and property extraction.

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use geojson::Feature;

use crate::error::{GeoFeatureError, Result};

/// Key of a cached feature: `"geojson:" + id + ":" + factory kind`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for the item `id` built by a factory of kind `factory_kind`.
    pub fn new(id: &str, factory_kind: &str) -> Self {
        Self(format!("geojson:{id}:{factory_kind}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cache abstraction for built features.
///
/// A miss only costs recomputation; an `Err` is a failure of the cache itself and is
/// returned to the caller.
pub trait FeatureCache: Send + Sync {
    /// Get the cached feature for `key`.
    fn get(&self, key: &str) -> Result<Option<Feature>>;

    /// Store `feature` under `key`, replacing any previous entry.
    fn set(&self, key: &str, feature: Feature) -> Result<()>;
}

/// In-process cache backed by a map behind a [`RwLock`].
///
/// Concurrent writers to the same key resolve last-write-wins; readers never observe a
/// partially written entry.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Feature>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached features.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every entry.
    pub fn clear(&self) -> Result<()> {
        self.entries.write().map_err(poisoned)?.clear();
        Ok(())
    }
}

fn poisoned<T>(_: PoisonError<T>) -> GeoFeatureError {
    GeoFeatureError::Cache("memory cache lock poisoned".to_string())
}

impl FeatureCache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<Feature>> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, feature: Feature) -> Result<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), feature);
        Ok(())
    }
}

/// Cache that never stores anything. Always misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCache;

impl FeatureCache for NoOpCache {
    fn get(&self, _key: &str) -> Result<Option<Feature>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _feature: Feature) -> Result<()> {
        Ok(())
    }
}
