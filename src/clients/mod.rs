//! HTTP client types for BrickScout API communication.
//!
//! This module is the transport the authentication flow and the wider client
//! issue requests through. It performs one round trip per call.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response with its decoded body
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`HttpError`]: Transport failures
//!
//! # Body Decoding
//!
//! A response body is decoded as JSON when the response declares an
//! `application/json` content type. Any other body is kept as opaque text
//! inside a JSON string value.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
