//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use crate::types::StringMap;
use serde_json::json;
use test_case::test_case;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> HttpClient {
    HttpClient::new().unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(
        config.default_headers.get("Content-Type"),
        Some(&"application/json".to_string())
    );
    assert!(config.user_agent.starts_with("order-tracking/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(5))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_page_items() {
    let page = Page::new(json!({"orders": [{"id": 1}, {"id": 2}]}));
    assert_eq!(page.items("orders").unwrap().len(), 2);
    assert!(page.items("customers").unwrap().is_empty());

    let page = Page::new(json!({"orders": null}));
    assert!(page.items("orders").unwrap().is_empty());

    let page = Page::new(json!([1, 2, 3]));
    assert!(page.items("orders").unwrap().is_empty());
}

#[test_case(json!({"orders": "nope"}); "string")]
#[test_case(json!({"orders": {"id": 1}}); "object")]
#[test_case(json!({"orders": 3}); "number")]
fn test_page_items_rejects_non_array(body: serde_json::Value) {
    let err = Page::new(body).items("orders").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_fetch_page_parses_body_and_link() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2023-01/orders.json"))
        .and(query_param("limit", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"orders": [{"id": 1}, {"id": 2}]}))
                .insert_header(
                    "Link",
                    "<https://shop.example/orders.json?page_info=abc>; rel=\"next\"",
                ),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/admin/api/2023-01/orders.json?limit=2", mock_server.uri());
    let page = client().fetch_page(&url, &StringMap::new()).await.unwrap();

    assert_eq!(page.items("orders").unwrap().len(), 2);
    assert_eq!(
        page.link_header.as_deref(),
        Some("<https://shop.example/orders.json?page_info=abc>; rel=\"next\"")
    );
}

#[tokio::test]
async fn test_fetch_page_without_link_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .mount(&mock_server)
        .await;

    let url = format!("{}/orders.json", mock_server.uri());
    let page = client().fetch_page(&url, &StringMap::new()).await.unwrap();

    assert!(page.link_header.is_none());
    assert!(page.items("orders").unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_page_sends_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders.json"))
        .and(header("X-Shopify-Access-Token", "shpat_test"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut headers = StringMap::new();
    headers.insert("X-Shopify-Access-Token".to_string(), "shpat_test".to_string());

    let url = format!("{}/orders.json", mock_server.uri());
    client().fetch_page(&url, &headers).await.unwrap();
}

#[tokio::test]
async fn test_fetch_page_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders.json"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string("{\"errors\":\"[API] Invalid API key or access token\"}"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/orders.json", mock_server.uri());
    let err = client()
        .fetch_page(&url, &StringMap::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 401, .. }));
    assert!(err.is_upstream());
}

#[tokio::test]
async fn test_fetch_page_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/orders.json", mock_server.uri());
    let err = client()
        .fetch_page(&url, &StringMap::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_fetch_page_no_retry_on_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders.json"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/orders.json", mock_server.uri());
    let result = client().fetch_page(&url, &StringMap::new()).await;

    assert!(matches!(result, Err(Error::HttpStatus { status: 500, .. })));
}

#[tokio::test]
async fn test_fetch_page_connection_refused() {
    // Nothing listens on port 1
    let err = client()
        .fetch_page("http://127.0.0.1:1/orders.json", &StringMap::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Http(_)));
}
