mod common;

use earningsfeed::{Client, Config, Error, FilingsParams};
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn unauthorized_maps_to_authentication() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/filings");
            then.status(401).json_body(json!({"error": "Unauthorized"}));
        })
        .await;

    let err = common::client(&server)
        .filings()
        .list(&FilingsParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Authentication { ref message } if message == "Unauthorized"));
    assert_eq!(err.status_code(), Some(401));
}

#[tokio::test]
async fn rate_limit_carries_reset() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/filings");
            then.status(429)
                .header("X-RateLimit-Reset", "1234567890")
                .json_body(json!({"error": "Rate limit exceeded"}));
        })
        .await;

    let err = common::client(&server)
        .filings()
        .list(&FilingsParams::default())
        .await
        .unwrap_err();
    match err {
        Error::RateLimit { reset_at, .. } => assert_eq!(reset_at, Some(1_234_567_890)),
        other => panic!("expected rate limit error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_filing_maps_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/filings/invalid");
            then.status(404).json_body(json!({"error": "Not found"}));
        })
        .await;

    let err = common::client(&server)
        .filings()
        .get("invalid")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn bad_request_maps_to_validation() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/filings");
            then.status(400).json_body(json!({"error": "Invalid parameter"}));
        })
        .await;

    let err = common::client(&server)
        .filings()
        .list(&FilingsParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { ref message } if message == "Invalid parameter"));
}

#[tokio::test]
async fn server_error_keeps_status_and_code() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/filings");
            then.status(500)
                .json_body(json!({"error": "Server error", "code": "INTERNAL_ERROR"}));
        })
        .await;

    let err = common::client(&server)
        .filings()
        .list(&FilingsParams::default())
        .await
        .unwrap_err();
    match err {
        Error::Api {
            status_code, code, ..
        } => {
            assert_eq!(status_code, 500);
            assert_eq!(code.as_deref(), Some("INTERNAL_ERROR"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn html_error_body_does_not_break_mapping() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/filings");
            then.status(503)
                .header("content-type", "text/html")
                .body("<html>Service Unavailable</html>");
        })
        .await;

    let err = common::client(&server)
        .filings()
        .list(&FilingsParams::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Api { status_code: 503, code: None, ref message } if message == "HTTP 503"
    ));
}

#[tokio::test]
async fn invalid_success_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/filings");
            then.status(200).body("not json");
        })
        .await;

    let err = common::client(&server)
        .filings()
        .list(&FilingsParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Nothing listens on the discard port.
    let client = Client::with_config(Config::new("test_api_key").with_base_url("http://127.0.0.1:9"))
        .unwrap();

    let err = client
        .filings()
        .list(&FilingsParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.status_code(), None);
}
