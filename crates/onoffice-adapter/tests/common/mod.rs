/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for onoffice-adapter tests

#![allow(dead_code)]

use onoffice_adapter::{ClientConfig, Credentials, OnOfficeClient};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "test_token";
pub const TEST_SECRET: &str = "test_secret";
pub const API_PATH: &str = "/api/stable/api.php";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with the default API version
pub fn test_client(server: &MockServer) -> OnOfficeClient {
    test_client_with(server, ClientConfig::default())
}

pub fn test_client_with(server: &MockServer, config: ClientConfig) -> OnOfficeClient {
    let config = config.with_base_url(format!("{}/api", server.uri()));
    let credentials = Credentials::new(TEST_TOKEN, TEST_SECRET).expect("credentials");
    OnOfficeClient::with_config(credentials, config).expect("client init")
}

/// Body with `status.code` 200 and the given `response` payload
pub fn ok_body(response: Value) -> Value {
    json!({
        "status": {"code": 200, "message": "OK"},
        "response": response
    })
}

/// Answer every POST to the API path with `body` (HTTP 200)
pub async fn mount_json(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Decoded JSON body of the single request the server received
pub async fn sent_envelope(server: &MockServer) -> Value {
    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    serde_json::from_slice(&requests[0].body).expect("request body is JSON")
}

/// The first action inside a sent envelope
pub fn first_action(envelope: &Value) -> &Value {
    &envelope["request"]["actions"][0]
}
