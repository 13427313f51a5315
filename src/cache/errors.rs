//! Cache-specific error types.

use thiserror::Error;

/// Errors raised by [`CacheStore`](crate::cache::CacheStore).
///
/// `DuplicateKey`, `KeyNotFound` and `DeleteFailed` are replaced by a
/// sentinel return value when the store runs in fail-silently mode. The
/// remaining variants are always raised.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Only JSON objects can be stored.
    #[error("Value for \"{key}\" must be a JSON object.")]
    NotAMapping {
        /// The key the value was written under.
        key: String,
    },

    /// The key exists and overwriting was not allowed.
    #[error("\"{key}\" already exists in this cache, overwrite is set to false.")]
    DuplicateKey {
        /// The existing key.
        key: String,
    },

    /// No entry exists for the key.
    #[error("\"{key}\" does not exist inside cache.")]
    KeyNotFound {
        /// The missing key.
        key: String,
    },

    /// The cache file could not be removed.
    #[error("Could not delete \"{key}\" from cache: {source}")]
    DeleteFailed {
        /// The key whose file could not be removed.
        key: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Reading or writing the cache file failed.
    #[error("Cache I/O failed for \"{key}\": {source}")]
    Io {
        /// The key being read or written.
        key: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The cache file does not hold valid JSON.
    #[error("Cache entry \"{key}\" is not valid JSON: {source}")]
    Serialization {
        /// The key being decoded.
        key: String,
        /// The underlying parse error.
        source: serde_json::Error,
    },
}

// Verify CacheError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CacheError>();
};
