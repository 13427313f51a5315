//! Disk-backed cache for JSON objects.
//!
//! The cache persists values such as token payloads across process restarts.
//! Each key maps to one file; a shared [`CacheMirror`] keeps written values
//! in memory so repeated reads skip the disk.
//!
//! # Overview
//!
//! - [`CacheStore`]: Read, write and delete entries
//! - [`CacheMirror`]: The in-memory mirror, created once and injected into stores
//! - [`CacheError`]: Cache failures
//!
//! # Concurrency
//!
//! There is no file locking. One process with one logical user is assumed;
//! concurrent writers to the same key race at the file system level.

mod errors;
mod mirror;
mod store;

pub use errors::CacheError;
pub use mirror::CacheMirror;
pub use store::{CacheStore, CACHE_FILE_EXTENSION};
