//! Token payload returned by the token endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The decoded body of a successful token response.
///
/// The payload is stored and returned exactly as the server sent it. The
/// accessors read the conventional OAuth fields when they are present.
///
/// # Example
///
/// ```rust
/// use brickscout_api::TokenPayload;
/// use serde_json::json;
///
/// let tokens = TokenPayload::new(json!({
///     "access_token": "abc",
///     "token_type": "bearer",
///     "expires_in": 3600
/// }));
///
/// assert_eq!(tokens.access_token(), Some("abc"));
/// assert_eq!(tokens.expires_in(), Some(3600));
/// assert!(tokens.refresh_token().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenPayload(Value);

impl TokenPayload {
    /// Wraps a decoded token response.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the access token.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.0.get("access_token").and_then(Value::as_str)
    }

    /// Returns the refresh token.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.0.get("refresh_token").and_then(Value::as_str)
    }

    /// Returns the token type (e.g., "bearer").
    #[must_use]
    pub fn token_type(&self) -> Option<&str> {
        self.0.get("token_type").and_then(Value::as_str)
    }

    /// Returns the token lifetime in seconds.
    #[must_use]
    pub fn expires_in(&self) -> Option<u64> {
        self.0.get("expires_in").and_then(Value::as_u64)
    }

    /// Returns the raw payload.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the wrapper, returning the raw payload.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for TokenPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
