//! File-backed key/value store for JSON objects.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::cache::{CacheError, CacheMirror};
use crate::config::BrickScoutConfig;

/// Extension of cache files on disk.
pub const CACHE_FILE_EXTENSION: &str = "txt";

/// Persists JSON objects to one file per key, with an in-memory mirror.
///
/// Each entry lives at `<cache_dir>/<key>.txt` and holds the plain JSON
/// serialization of the stored object.
///
/// # Mirror
///
/// `write` updates the mirror and `get` answers from it without touching
/// disk. A `get` that falls through to disk does not populate the mirror,
/// so after a restart every read of a key hits the file until the key is
/// written again. `delete` evicts the key from the mirror whenever the
/// file is gone afterwards.
///
/// # Fail-silently mode
///
/// With `fail_silently` set, a duplicate key, a missing key or a failed
/// removal produce `false` / the caller's default instead of an error.
///
/// # Example
///
/// ```rust,no_run
/// use brickscout_api::cache::{CacheMirror, CacheStore};
/// use serde_json::json;
///
/// let store = CacheStore::new("/tmp/brickscout-cache", false, CacheMirror::new());
///
/// store.write("collector", &json!({"access_token": "abc"}), true)?;
/// let value = store.get("collector", None)?;
/// assert_eq!(value, Some(json!({"access_token": "abc"})));
/// # Ok::<(), brickscout_api::cache::CacheError>(())
/// ```
#[derive(Clone, Debug)]
pub struct CacheStore {
    cache_dir: PathBuf,
    fail_silently: bool,
    mirror: CacheMirror,
}

impl CacheStore {
    /// Creates a store rooted at `cache_dir` sharing `mirror`.
    #[must_use]
    pub fn new(cache_dir: impl Into<PathBuf>, fail_silently: bool, mirror: CacheMirror) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            fail_silently,
            mirror,
        }
    }

    /// Creates a store from the configured cache directory and mode.
    #[must_use]
    pub fn from_config(config: &BrickScoutConfig, mirror: CacheMirror) -> Self {
        Self::new(config.cache_dir(), config.fail_silently(), mirror)
    }

    /// Returns the cache directory.
    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Returns whether the store runs in fail-silently mode.
    #[must_use]
    pub const fn fail_silently(&self) -> bool {
        self.fail_silently
    }

    /// Returns the mirror this store shares.
    #[must_use]
    pub const fn mirror(&self) -> &CacheMirror {
        &self.mirror
    }

    /// Returns the file path for `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{key}.{CACHE_FILE_EXTENSION}"))
    }

    /// Writes `value` under `key`.
    ///
    /// Returns `Ok(false)` only in fail-silently mode when the key exists
    /// and `overwrite` is `false`.
    ///
    /// # Errors
    ///
    /// - [`CacheError::NotAMapping`] if `value` is not a JSON object
    /// - [`CacheError::DuplicateKey`] if the key exists and `overwrite` is `false`
    /// - [`CacheError::Io`] if the directory or file cannot be written
    pub fn write(&self, key: &str, value: &Value, overwrite: bool) -> Result<bool, CacheError> {
        if !value.is_object() {
            return Err(CacheError::NotAMapping {
                key: key.to_string(),
            });
        }

        let path = self.path_for(key);

        if path.exists() && !overwrite {
            if self.fail_silently {
                return Ok(false);
            }
            return Err(CacheError::DuplicateKey {
                key: key.to_string(),
            });
        }

        let serialized = serde_json::to_string(value).map_err(|source| {
            CacheError::Serialization {
                key: key.to_string(),
                source,
            }
        })?;

        fs::create_dir_all(&self.cache_dir)
            .and_then(|()| fs::write(&path, serialized))
            .map_err(|source| CacheError::Io {
                key: key.to_string(),
                source,
            })?;

        self.mirror.insert(key, value.clone());
        tracing::debug!("Wrote cache entry \"{}\"", key);

        Ok(true)
    }

    /// Returns the value stored under `key`.
    ///
    /// A mirrored key is answered without disk access. Otherwise the file is
    /// read and decoded; the mirror is left as it was.
    ///
    /// # Errors
    ///
    /// - [`CacheError::KeyNotFound`] if no file exists (returns `Ok(default)`
    ///   in fail-silently mode)
    /// - [`CacheError::Io`] / [`CacheError::Serialization`] if the file
    ///   cannot be read or decoded
    pub fn get(&self, key: &str, default: Option<Value>) -> Result<Option<Value>, CacheError> {
        if let Some(value) = self.mirror.get(key) {
            tracing::debug!("Cache mirror hit for \"{}\"", key);
            return Ok(Some(value));
        }

        let path = self.path_for(key);

        if !path.exists() {
            tracing::debug!("Cache miss for \"{}\"", key);
            if self.fail_silently {
                return Ok(default);
            }
            return Err(CacheError::KeyNotFound {
                key: key.to_string(),
            });
        }

        let contents = fs::read_to_string(&path).map_err(|source| CacheError::Io {
            key: key.to_string(),
            source,
        })?;

        let value = serde_json::from_str(&contents).map_err(|source| {
            CacheError::Serialization {
                key: key.to_string(),
                source,
            }
        })?;

        tracing::debug!("Read cache entry \"{}\" from disk", key);
        Ok(Some(value))
    }

    /// Removes the entry stored under `key`.
    ///
    /// # Mirror
    ///
    /// Unlike [`get`](Self::get), which never touches the mirror, `delete`
    /// also evicts `key` from the shared mirror. It does so whenever the file
    /// is gone afterwards, including when the file had already been removed
    /// outside the store, so a deleted key cannot keep answering from memory.
    /// A failed removal leaves the mirror unchanged.
    ///
    /// # Errors
    ///
    /// - [`CacheError::KeyNotFound`] if no file exists
    /// - [`CacheError::DeleteFailed`] if the file cannot be removed
    ///
    /// Both return `Ok(false)` instead in fail-silently mode.
    pub fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let path = self.path_for(key);

        if !path.exists() {
            if self.mirror.remove(key).is_some() {
                tracing::debug!("Evicted stale mirror entry \"{}\"", key);
            }
            if self.fail_silently {
                return Ok(false);
            }
            return Err(CacheError::KeyNotFound {
                key: key.to_string(),
            });
        }

        match fs::remove_file(&path) {
            Ok(()) => {
                self.mirror.remove(key);
                tracing::debug!("Deleted cache entry \"{}\"", key);
                Ok(true)
            }
            Err(source) => {
                tracing::warn!("Could not delete cache entry \"{}\": {}", key, source);
                if self.fail_silently {
                    return Ok(false);
                }
                Err(CacheError::DeleteFailed {
                    key: key.to_string(),
                    source,
                })
            }
        }
    }
}
