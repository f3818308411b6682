//! Fail-fast client construction tests.
//!
//! The client factory must validate the credential format before any
//! request and probe connectivity before handing back a usable client.
//! An invalid credential can never produce a partially-initialized
//! client. Uses wiremock for the probe endpoint; blocking calls run on
//! a spawn_blocking thread.

use notion2table::{ApiKey, AppError, NotionClient, ValidationError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn empty_credential_is_rejected_before_any_request() {
    let err = ApiKey::new("").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidApiKey { .. }));
}

#[test]
fn credential_without_secret_prefix_is_rejected() {
    let err = ApiKey::new("token_abc123").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidApiKey { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn construction_succeeds_when_probe_returns_200() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("Authorization", "Bearer secret_abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list",
            "results": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base = server.uri();
    let client = tokio::task::spawn_blocking(move || {
        NotionClient::connect_with_base_url(ApiKey::new("secret_abc").unwrap(), &base)
    })
    .await
    .unwrap();

    assert!(client.is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn construction_fails_when_probe_returns_401() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "object": "error",
            "status": 401,
            "code": "unauthorized",
            "message": "API token is invalid."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base = server.uri();
    let result = tokio::task::spawn_blocking(move || {
        NotionClient::connect_with_base_url(ApiKey::new("secret_abc").unwrap(), &base)
    })
    .await
    .unwrap();

    match result {
        Err(AppError::ConnectionProbe { status }) => assert_eq!(status.as_u16(), 401),
        other => panic!("expected connection probe failure, got {:?}", other.err()),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn probe_sends_the_pinned_api_version() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("Notion-Version", "2021-08-16"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list",
            "results": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base = server.uri();
    let client = tokio::task::spawn_blocking(move || {
        NotionClient::connect_with_base_url(ApiKey::new("secret_abc").unwrap(), &base)
    })
    .await
    .unwrap();

    assert!(client.is_ok());
}
