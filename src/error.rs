//! Error types for the BrickScout API client.
//!
//! This module contains the configuration error raised while validating
//! credentials, URLs and cache settings. Errors for the cache, the object
//! mapper and the authentication flow live next to the code that raises them.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` so a bad
//! setting fails immediately instead of on first use.
//!
//! # Example
//!
//! ```rust
//! use brickscout_api::{ConfigError, Username};
//!
//! let result = Username::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyUsername)));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Username cannot be empty.
    #[error("Username cannot be empty. Username and password are required to authenticate.")]
    EmptyUsername,

    /// Password cannot be empty.
    #[error("Password cannot be empty. Username and password are required to authenticate.")]
    EmptyPassword,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A URL is invalid.
    #[error("Invalid URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.example.com').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// No cache directory was configured and none could be derived.
    #[error("Could not determine a cache directory. Please set one explicitly.")]
    CacheDirUnavailable,
}
