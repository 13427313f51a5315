//! Authentication error types.
//!
//! # Example
//!
//! ```rust
//! use brickscout_api::auth::AuthError;
//! use serde_json::json;
//!
//! let error = AuthError::AuthenticationFailed {
//!     status: 401,
//!     content: json!({"error": "invalid_grant"}),
//! };
//! assert!(error.to_string().contains("invalid_grant"));
//! ```

use thiserror::Error;

use crate::cache::CacheError;
use crate::clients::HttpError;

/// Errors that can occur while obtaining tokens.
///
/// Cache and transport errors pass through unchanged.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint answered with a status other than 200.
    ///
    /// `content` is the decoded response body: the JSON document for JSON
    /// responses, a JSON string holding the text otherwise.
    #[error("Error while authenticating (status {status}): {content}")]
    AuthenticationFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The decoded response body.
        content: serde_json::Value,
    },

    /// The token request could not be completed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Reading or writing cached tokens failed.
    #[error(transparent)]
    Cache(#[from] CacheError),
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};
