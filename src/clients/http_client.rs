//! HTTP client for BrickScout API communication.
//!
//! This module provides the [`HttpClient`] type that performs a single
//! request/response round trip against the API or an absolute URL.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{is_json_content_type, HttpResponse};
use crate::config::{ApiUrl, BrickScoutConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the BrickScout API.
///
/// The client handles:
/// - URL construction from the configured API base URL
/// - Default headers including User-Agent and Accept
/// - Body decoding driven by the response content type
///
/// Every response is returned regardless of status; there is no retry.
///
/// # Example
///
/// ```rust,ignore
/// use brickscout_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new(&config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, "orders").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Option<ApiUrl>,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &BrickScoutConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}BrickScout API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_url: config.api_url().cloned(),
            default_headers,
        })
    }

    /// Returns the base URL for relative paths, if configured.
    #[must_use]
    pub const fn base_url(&self) -> Option<&ApiUrl> {
        self.base_url.as_ref()
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves the URL a request will be sent to.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::MissingBaseUrl`] for a relative path when no API
    /// base URL is configured.
    pub fn resolve_url(&self, request: &HttpRequest) -> Result<String, HttpError> {
        if !request.prepend_base_to_url {
            return Ok(request.path.clone());
        }

        self.base_url
            .as_ref()
            .map(|base| base.join(&request.path))
            .ok_or_else(|| HttpError::MissingBaseUrl {
                path: request.path.clone(),
            })
    }

    /// Sends an HTTP request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A relative path has no base URL (`MissingBaseUrl`)
    /// - Network error occurs (`Network`)
    /// - A JSON response body does not parse (`InvalidJson`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.resolve_url(&request)?;

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!("Sending {} request to {}", request.http_method, redact_query(&url));

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let is_json = is_json_content_type(
            res_headers
                .get("content-type")
                .and_then(|values| values.first())
                .map(String::as_str),
        );
        let body = Self::decode_body(code, is_json, body_text)?;

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Decodes a body as JSON or keeps it as opaque text.
    fn decode_body(
        code: u16,
        is_json: bool,
        body_text: String,
    ) -> Result<serde_json::Value, HttpError> {
        if !is_json {
            return Ok(serde_json::Value::String(body_text));
        }
        if body_text.is_empty() {
            return Ok(serde_json::json!({}));
        }
        serde_json::from_str(&body_text).map_err(|source| HttpError::InvalidJson { code, source })
    }
}

/// Strips the query string so credentials in token URLs stay out of logs.
fn redact_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}
