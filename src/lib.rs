//! # BrickScout API Rust Client
//!
//! A Rust client for the BrickScout marketplace REST API, providing validated
//! configuration, password-grant authentication with on-disk token caching,
//! and a schema-less mapper for JSON response bodies.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`BrickScoutConfig`] and [`BrickScoutConfigBuilder`]
//! - Validated newtypes for credentials and URLs
//! - Token acquisition via [`AuthHandler`], cached per username
//! - A disk-backed [`CacheStore`] with a shared in-memory [`CacheMirror`]
//! - Mapping of arbitrary JSON into [`GenericObject`] and [`ObjectSequence`],
//!   including error-shaped responses via [`ErrorInfo`]
//! - An async HTTP client for the underlying round trips
//!
//! ## Quick Start
//!
//! ```rust
//! use brickscout_api::{ApiUrl, BrickScoutConfig};
//!
//! let config = BrickScoutConfig::builder()
//!     .username("brick-fan")
//!     .password("hunter2")
//!     .auth_url(ApiUrl::new("https://auth.brickscout.example").unwrap())
//!     .api_url(ApiUrl::new("https://api.brickscout.example/v1").unwrap())
//!     .cache_dir("/tmp/brickscout")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.credentials().username().as_ref(), "brick-fan");
//! ```
//!
//! ## Authentication
//!
//! ```rust,ignore
//! use brickscout_api::{AuthHandler, CacheMirror, CacheStore};
//!
//! // One mirror per process, shared by every store
//! let mirror = CacheMirror::new();
//! let auth = AuthHandler::new(&config, CacheStore::from_config(&config, mirror))?;
//!
//! // Authenticates on the first call, then reads the cache
//! let tokens = auth.get_tokens().await?;
//! ```
//!
//! ## Mapping Responses
//!
//! ```rust
//! use brickscout_api::construct_object_from_data;
//! use serde_json::json;
//!
//! let mapped = construct_object_from_data(&json!({
//!     "id": 17,
//!     "items": [{"part": "3001"}, {"part": "3020"}]
//! })).unwrap();
//!
//! let order = mapped.as_object().unwrap();
//! assert_eq!(order.get_i64("id"), Some(17));
//! assert_eq!(order.get_sequence("items").unwrap().len(), 2);
//! assert!(order.get("status").is_none());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and the cache mirror are passed explicitly
//! - **Fail-fast validation**: Missing credentials fail when the config is built
//! - **Single writer**: The cache assumes one process and one logical user
//! - **No retries**: Every operation is one round trip or one file access

pub mod auth;
pub mod cache;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;

// Re-export public types at crate root for convenience
pub use config::{
    ApiUrl, BrickScoutConfig, BrickScoutConfigBuilder, Credentials, Password, Username,
};
pub use error::ConfigError;

pub use auth::{AuthError, AuthHandler, TokenPayload};
pub use cache::{CacheError, CacheMirror, CacheStore};

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError,
};

// Re-export mapper types
pub use models::{
    construct_error_from_data, construct_object_from_data, ErrorInfo, FieldValue,
    GenericObject, MappedResponse, MapperError, ObjectSequence,
};
