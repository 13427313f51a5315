//! In-memory mirror shared by cache stores.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value;

/// A shared in-memory view of cache entries.
///
/// Create one mirror at process start and hand clones of it to every
/// [`CacheStore`](crate::cache::CacheStore). Clones share the same map.
///
/// # Example
///
/// ```rust
/// use brickscout_api::cache::CacheMirror;
/// use serde_json::json;
///
/// let mirror = CacheMirror::new();
/// let handle = mirror.clone();
///
/// handle.insert("collector", json!({"access_token": "abc"}));
/// assert!(mirror.contains("collector"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CacheMirror {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl CacheMirror {
    /// Creates an empty mirror.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn insert(&self, key: impl Into<String>, value: Value) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value);
    }

    /// Removes and returns the value stored under `key`.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }

    /// Returns `true` if `key` is mirrored.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    /// Returns the number of mirrored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing is mirrored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every mirrored entry. Files on disk are untouched.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clones_share_entries() {
        let mirror = CacheMirror::new();
        let other = mirror.clone();

        other.insert("a", json!({"x": 1}));

        assert_eq!(mirror.get("a"), Some(json!({"x": 1})));
        assert_eq!(mirror.len(), 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let mirror = CacheMirror::new();
        mirror.insert("a", json!({}));
        mirror.insert("b", json!({}));

        assert_eq!(mirror.remove("a"), Some(json!({})));
        assert!(!mirror.contains("a"));

        mirror.clear();
        assert!(mirror.is_empty());
    }
}
