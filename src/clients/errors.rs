//! HTTP-specific error types for the BrickScout API client.
//!
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all transport failures
//!
//! Non-2xx responses are not errors at this layer. The client hands every
//! response back and callers decide what a status means.
//!
//! # Example
//!
//! ```rust,ignore
//! use brickscout_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{}: {}", response.code, response.body),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::MissingBaseUrl { path }) => println!("No base URL for {path}"),
//!     Err(HttpError::InvalidJson { code, .. }) => println!("Bad JSON body ({code})"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// Base prefixing was disabled for a path that is not an absolute URL.
    #[error("Path '{path}' must be an absolute URL when the base URL is not prepended.")]
    RelativeUrl {
        /// The offending path.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A relative path was requested but no API base URL is configured.
    #[error("Cannot request relative path '{path}' without a configured API base URL.")]
    MissingBaseUrl {
        /// The relative path that was requested.
        path: String,
    },

    /// The response declared a JSON content type but the body did not parse.
    #[error("Response with status {code} declared JSON but could not be decoded: {source}")]
    InvalidJson {
        /// The HTTP status code of the response.
        code: u16,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_missing_body_type() {
        let error = InvalidHttpRequestError::MissingBodyType;
        assert_eq!(
            error.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_relative_url_error_names_path() {
        let error = InvalidHttpRequestError::RelativeUrl {
            path: "token".to_string(),
        };
        assert!(error.to_string().contains("'token'"));
    }

    #[test]
    fn test_missing_base_url_names_path() {
        let error = HttpError::MissingBaseUrl {
            path: "orders".to_string(),
        };
        assert!(error.to_string().contains("orders"));
    }

    #[test]
    fn test_invalid_request_converts_transparently() {
        let error: HttpError = InvalidHttpRequestError::MissingBodyType.into();
        assert_eq!(
            error.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_invalid_json_includes_status() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = HttpError::InvalidJson { code: 200, source };
        assert!(error.to_string().contains("200"));
    }
}
