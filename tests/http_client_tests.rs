//! Integration tests for the HTTP client functionality.
//!
//! These tests verify URL resolution, default headers, body decoding and
//! the pass-through of non-success responses.

use brickscout_api::clients::{DataType, HttpClient, HttpMethod, HttpRequest};
use brickscout_api::{ApiUrl, BrickScoutConfig, HttpError, InvalidHttpRequestError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_config(api_url: Option<&str>) -> BrickScoutConfig {
    let mut builder = BrickScoutConfig::builder()
        .username("collector")
        .password("s3cret")
        .auth_url(ApiUrl::new("https://auth.example.com").unwrap())
        .cache_dir(std::env::temp_dir().join("brickscout-http-tests"))
        .user_agent_prefix("InventorySync/1.0");
    if let Some(url) = api_url {
        builder = builder.api_url(ApiUrl::new(url).unwrap());
    }
    builder.build().unwrap()
}

// ============================================================================
// Integration Tests
// ============================================================================

#[tokio::test]
async fn test_relative_request_is_sent_below_api_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/orders"))
        .and(query_param("page", "2"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_config(Some(&format!("{}/v1", server.uri())))).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "orders")
        .query_param("page", "2")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();

    assert!(response.is_ok());
    assert!(response.is_json());
    assert_eq!(response.body, json!([{"id": 1}]));
}

#[tokio::test]
async fn test_json_body_is_sent_with_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/orders/42"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"status": "SHIPPED"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_config(Some(&server.uri()))).unwrap();
    let request = HttpRequest::builder(HttpMethod::Put, "orders/42")
        .body(json!({"status": "SHIPPED"}))
        .body_type(DataType::Json)
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 204);
}

#[tokio::test]
async fn test_error_status_is_returned_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("x-request-id", "req-77")
                .set_body_json(json!({"type": "NotFoundException"})),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_config(Some(&server.uri()))).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "orders/77").build().unwrap();

    let response = client.request(request).await.unwrap();

    assert!(!response.is_ok());
    assert_eq!(response.code, 404);
    assert_eq!(response.request_id(), Some("req-77"));
    assert_eq!(response.body["type"], json!("NotFoundException"));
}

#[tokio::test]
async fn test_text_body_is_kept_as_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("pong", "text/plain"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_config(None)).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, format!("{}/ping", server.uri()))
        .prepend_base_to_url(false)
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();

    assert!(!response.is_json());
    assert_eq!(response.body, json!("pong"));
}

#[tokio::test]
async fn test_json_with_charset_is_decoded_and_reported_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"id":7}"#, "application/json; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_config(Some(&server.uri()))).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "orders/7").build().unwrap();

    let response = client.request(request).await.unwrap();

    assert!(response.is_json());
    assert_eq!(response.body, json!({"id": 7}));
}

#[tokio::test]
async fn test_malformed_json_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_config(Some(&server.uri()))).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "orders").build().unwrap();

    assert!(matches!(
        client.request(request).await,
        Err(HttpError::InvalidJson { code: 200, .. })
    ));
}

#[tokio::test]
async fn test_relative_path_without_api_url_is_rejected() {
    let client = HttpClient::new(&create_config(None)).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "orders").build().unwrap();

    assert!(matches!(
        client.request(request).await,
        Err(HttpError::MissingBaseUrl { ref path }) if path == "orders"
    ));
}

#[test]
fn test_user_agent_includes_prefix() {
    let client = HttpClient::new(&create_config(None)).unwrap();
    let user_agent = client.default_headers().get("User-Agent").unwrap();

    assert!(user_agent.starts_with("InventorySync/1.0 | BrickScout API Library v"));
}

#[test]
fn test_invalid_requests_are_rejected_by_builder() {
    let result = HttpRequest::builder(HttpMethod::Post, "orders")
        .body(json!({"a": 1}))
        .build();
    assert!(matches!(result, Err(InvalidHttpRequestError::MissingBodyType)));

    let result = HttpRequest::builder(HttpMethod::Post, "token")
        .prepend_base_to_url(false)
        .build();
    assert!(matches!(
        result,
        Err(InvalidHttpRequestError::RelativeUrl { .. })
    ));
}
