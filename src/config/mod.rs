//! Configuration types for the BrickScout API client.
//!
//! # Overview
//!
//! - [`BrickScoutConfig`]: The configuration consumed by the client
//! - [`BrickScoutConfigBuilder`]: A builder for constructing [`BrickScoutConfig`] instances
//! - [`Credentials`], [`Username`], [`Password`]: Validated account credentials
//! - [`ApiUrl`]: A validated absolute URL
//!
//! # Example
//!
//! ```rust
//! use brickscout_api::{ApiUrl, BrickScoutConfig};
//!
//! let config = BrickScoutConfig::builder()
//!     .username("brick-fan")
//!     .password("hunter2")
//!     .auth_url(ApiUrl::new("https://auth.example.com").unwrap())
//!     .cache_dir("/tmp/brickscout-cache")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.credentials().username().as_ref(), "brick-fan");
//! ```

mod newtypes;

pub use newtypes::{ApiUrl, Credentials, Password, Username};

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::ConfigError;

/// Application name used for the platform cache directory.
const APP_NAME: &str = "brickscout";

/// Configuration for the BrickScout API client.
///
/// `BrickScoutConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct BrickScoutConfig {
    credentials: Credentials,
    auth_url: ApiUrl,
    api_url: Option<ApiUrl>,
    cache_dir: PathBuf,
    fail_silently: bool,
    user_agent_prefix: Option<String>,
}

impl BrickScoutConfig {
    /// Creates a new builder for constructing a `BrickScoutConfig`.
    #[must_use]
    pub fn builder() -> BrickScoutConfigBuilder {
        BrickScoutConfigBuilder::new()
    }

    /// Returns the account credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the base URL of the token endpoint.
    #[must_use]
    pub const fn auth_url(&self) -> &ApiUrl {
        &self.auth_url
    }

    /// Returns the base URL for relative API paths, if configured.
    #[must_use]
    pub const fn api_url(&self) -> Option<&ApiUrl> {
        self.api_url.as_ref()
    }

    /// Returns the directory holding cache files.
    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Returns whether cache failures are reported as sentinel values.
    #[must_use]
    pub const fn fail_silently(&self) -> bool {
        self.fail_silently
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify BrickScoutConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BrickScoutConfig>();
};

/// Builder for constructing [`BrickScoutConfig`] instances.
///
/// Required fields are `username`, `password` and `auth_url`.
///
/// # Defaults
///
/// - `api_url`: `None`
/// - `cache_dir`: the platform cache directory for `brickscout`
/// - `fail_silently`: `false`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct BrickScoutConfigBuilder {
    username: Option<String>,
    password: Option<String>,
    auth_url: Option<ApiUrl>,
    api_url: Option<ApiUrl>,
    cache_dir: Option<PathBuf>,
    fail_silently: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl BrickScoutConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account username (required).
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the account password (required).
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the token endpoint base URL (required).
    #[must_use]
    pub fn auth_url(mut self, url: ApiUrl) -> Self {
        self.auth_url = Some(url);
        self
    }

    /// Sets the base URL that relative request paths are joined onto.
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the cache directory.
    #[must_use]
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    /// Sets fail-silently mode for the cache store.
    #[must_use]
    pub const fn fail_silently(mut self, fail_silently: bool) -> Self {
        self.fail_silently = Some(fail_silently);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`BrickScoutConfig`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingRequiredField`] if `username`, `password` or
    ///   `auth_url` was never set
    /// - [`ConfigError::EmptyUsername`] / [`ConfigError::EmptyPassword`] if a
    ///   credential is empty
    /// - [`ConfigError::CacheDirUnavailable`] if no cache directory was set
    ///   and the platform has none
    pub fn build(self) -> Result<BrickScoutConfig, ConfigError> {
        let username = self
            .username
            .ok_or(ConfigError::MissingRequiredField { field: "username" })?;
        let password = self
            .password
            .ok_or(ConfigError::MissingRequiredField { field: "password" })?;
        let credentials = Credentials::new(username, password)?;

        let auth_url = self
            .auth_url
            .ok_or(ConfigError::MissingRequiredField { field: "auth_url" })?;

        let cache_dir = match self.cache_dir {
            Some(dir) => dir,
            None => default_cache_dir()?,
        };

        Ok(BrickScoutConfig {
            credentials,
            auth_url,
            api_url: self.api_url,
            cache_dir,
            fail_silently: self.fail_silently.unwrap_or(false),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

fn default_cache_dir() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .ok_or(ConfigError::CacheDirUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_url() -> ApiUrl {
        ApiUrl::new("https://auth.example.com").unwrap()
    }

    #[test]
    fn test_builder_requires_username() {
        let result = BrickScoutConfigBuilder::new()
            .password("secret")
            .auth_url(auth_url())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "username" })
        ));
    }

    #[test]
    fn test_builder_requires_password() {
        let result = BrickScoutConfigBuilder::new()
            .username("collector")
            .auth_url(auth_url())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "password" })
        ));
    }

    #[test]
    fn test_builder_rejects_empty_credentials() {
        let result = BrickScoutConfig::builder()
            .username("")
            .password("secret")
            .auth_url(auth_url())
            .build();
        assert!(matches!(result, Err(ConfigError::EmptyUsername)));

        let result = BrickScoutConfig::builder()
            .username("collector")
            .password("")
            .auth_url(auth_url())
            .build();
        assert!(matches!(result, Err(ConfigError::EmptyPassword)));
    }

    #[test]
    fn test_builder_requires_auth_url() {
        let result = BrickScoutConfig::builder()
            .username("collector")
            .password("secret")
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "auth_url" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = BrickScoutConfig::builder()
            .username("collector")
            .password("secret")
            .auth_url(auth_url())
            .cache_dir("/tmp/brickscout-test")
            .build()
            .unwrap();

        assert!(!config.fail_silently());
        assert!(config.api_url().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.cache_dir(), Path::new("/tmp/brickscout-test"));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let api_url = ApiUrl::new("https://api.example.com/v1").unwrap();
        let config = BrickScoutConfig::builder()
            .username("collector")
            .password("secret")
            .auth_url(auth_url())
            .api_url(api_url.clone())
            .cache_dir("/tmp/brickscout-test")
            .fail_silently(true)
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert!(config.fail_silently());
        assert_eq!(config.api_url(), Some(&api_url));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_debug_masks_password() {
        let config = BrickScoutConfig::builder()
            .username("collector")
            .password("super-secret")
            .auth_url(auth_url())
            .cache_dir("/tmp/brickscout-test")
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("BrickScoutConfig"));
        assert!(!debug_str.contains("super-secret"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BrickScoutConfig>();
    }
}
