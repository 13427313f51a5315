//! Password-grant token flow backed by the cache store.
//!
//! [`AuthHandler::get_tokens`] first looks for tokens cached under the
//! configured username. Only on a miss does it call the token endpoint, and
//! a successful response is written back to the cache before it is returned.
//!
//! # Example
//!
//! ```rust,ignore
//! use brickscout_api::{ApiUrl, AuthHandler, BrickScoutConfig, CacheMirror, CacheStore};
//!
//! let config = BrickScoutConfig::builder()
//!     .username("brick-fan")
//!     .password("hunter2")
//!     .auth_url(ApiUrl::new("https://auth.brickscout.example")?)
//!     .build()?;
//!
//! let store = CacheStore::from_config(&config, CacheMirror::new());
//! let auth = AuthHandler::new(&config, store)?;
//!
//! let tokens = auth.get_tokens().await?;
//! println!("Access token: {:?}", tokens.access_token());
//! ```

use serde_json::Value;

use crate::auth::{AuthError, TokenPayload};
use crate::cache::{CacheError, CacheStore};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::{BrickScoutConfig, Password, Username};

/// Client id sent with every token request.
const CLIENT_ID: &str = "brickscout";

/// Client secret sent with every token request.
const CLIENT_SECRET: &str = "brickscout";

/// Grant type for username/password authentication.
const PASSWORD_GRANT_TYPE: &str = "password";

/// Path of the token endpoint below the auth URL.
const TOKEN_PATH: &str = "token";

/// Obtains access tokens for a single configured identity.
///
/// State lives entirely in the cache: the handler is "authenticated" when
/// tokens are cached under its username. Cached tokens are returned as-is,
/// without an expiry check.
#[derive(Debug)]
pub struct AuthHandler {
    username: Username,
    password: Password,
    token_url: String,
    client: HttpClient,
    cache: CacheStore,
}

// Verify AuthHandler is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthHandler>();
};

impl AuthHandler {
    /// Creates a handler for the credentials in `config`.
    ///
    /// Credentials were validated when `config` was built, so a handler can
    /// never exist without them.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &BrickScoutConfig, cache: CacheStore) -> Result<Self, AuthError> {
        let credentials = config.credentials();
        Ok(Self {
            username: credentials.username().clone(),
            password: credentials.password().clone(),
            token_url: config.auth_url().join(TOKEN_PATH),
            client: HttpClient::new(config)?,
            cache,
        })
    }

    /// Returns the username tokens are cached under.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the cache store holding the tokens.
    #[must_use]
    pub const fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Returns the access tokens, authenticating only if none are cached.
    ///
    /// A missing cache entry counts as a miss whether or not the store
    /// fails silently, and so does an empty cached mapping.
    ///
    /// # Errors
    ///
    /// - [`AuthError::AuthenticationFailed`] if the token endpoint rejects
    ///   the credentials
    /// - [`AuthError::Http`] if the token request cannot be completed
    /// - [`AuthError::Cache`] if the cache cannot be read or written
    pub async fn get_tokens(&self) -> Result<TokenPayload, AuthError> {
        if let Some(cached) = self.cached_tokens()? {
            tracing::debug!("Using cached tokens for \"{}\"", self.username);
            return Ok(TokenPayload::new(cached));
        }

        self.authenticate().await
    }

    fn cached_tokens(&self) -> Result<Option<Value>, CacheError> {
        match self.cache.get(self.username.as_ref(), None) {
            Ok(Some(value)) if !is_empty_payload(&value) => Ok(Some(value)),
            Ok(_) | Err(CacheError::KeyNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Requests fresh tokens and caches them under the username.
    async fn authenticate(&self) -> Result<TokenPayload, AuthError> {
        let url = format!("{}?{}", self.token_url, self.token_query());

        let request = HttpRequest::builder(HttpMethod::Post, url)
            .prepend_base_to_url(false)
            .build()
            .map_err(HttpError::from)?;

        tracing::debug!("Requesting tokens for \"{}\"", self.username);
        let response = self.client.request(request).await?;

        if response.code != 200 {
            tracing::warn!(
                "Authentication for \"{}\" failed with status {}",
                self.username,
                response.code
            );
            return Err(AuthError::AuthenticationFailed {
                status: response.code,
                content: response.body,
            });
        }

        self.cache.write(self.username.as_ref(), &response.body, true)?;

        Ok(TokenPayload::new(response.body))
    }

    /// Builds the percent-encoded password-grant parameters.
    fn token_query(&self) -> String {
        [
            ("client_id", CLIENT_ID),
            ("client_secret", CLIENT_SECRET),
            ("grant_type", PASSWORD_GRANT_TYPE),
            ("username", self.username.as_ref()),
            ("password", self.password.as_ref()),
        ]
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
