mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::{Router, routing::post};
use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use serde_json::{Value, json};
use shorturls::api::handlers::shorten_handler;
use shorturls::domain::audit_event::AuditLevel;
use shorturls::routes::app_router;
use tower::ServiceExt;

fn shorten_app(state: shorturls::AppState) -> Router {
    Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state)
}

fn parse_expiry(json: &Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(json["expiry"].as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

#[tokio::test]
async fn test_shorten_generated_code() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();
    let before = Utc::now();

    let response = server
        .post("/shorturls")
        .add_header("Host", common::TEST_HOST)
        .json(&json!({ "url": "https://example.com", "validity": 1 }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    let short_link = json["shortLink"].as_str().unwrap();
    let pattern = Regex::new(r"^http://localhost(:\d+)?/[A-Za-z0-9_-]{6}$").unwrap();
    assert!(pattern.is_match(short_link), "unexpected link {short_link}");

    let expiry = parse_expiry(&json);
    assert!(expiry >= before + Duration::minutes(1) - Duration::seconds(1));
    assert!(expiry <= Utc::now() + Duration::minutes(1) + Duration::seconds(1));
    assert!(json["expiry"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_shorten_default_validity() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();
    let before = Utc::now();

    let response = server
        .post("/shorturls")
        .add_header("Host", common::TEST_HOST)
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let expiry = parse_expiry(&response.json::<Value>());
    assert!(expiry >= before + Duration::minutes(30) - Duration::seconds(1));
    assert!(expiry <= Utc::now() + Duration::minutes(30) + Duration::seconds(1));
}

#[tokio::test]
async fn test_shorten_custom_code() {
    let (state, mut rx) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorturls")
        .add_header("Host", common::TEST_HOST)
        .json(&json!({ "url": "https://example.com", "shortcode": "my-code_1" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert!(json["shortLink"].as_str().unwrap().ends_with("/my-code_1"));

    let events = common::drain_audit(&mut rx);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, AuditLevel::Info);
    assert_eq!(
        events[0].message,
        "Short URL created: my-code_1 for https://example.com"
    );
}

#[tokio::test]
async fn test_shorten_duplicate_custom_code() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let body = json!({ "url": "https://example.com", "shortcode": "taken" });

    server
        .post("/shorturls")
        .add_header("Host", common::TEST_HOST)
        .json(&body)
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/shorturls")
        .add_header("Host", common::TEST_HOST)
        .json(&body)
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "error": "Shortcode already exists" }));
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (state, mut rx) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorturls")
        .add_header("Host", common::TEST_HOST)
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "error": "Invalid URL format" }));

    let events = common::drain_audit(&mut rx);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, AuditLevel::Error);
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorturls")
        .add_header("Host", common::TEST_HOST)
        .json(&json!({ "validity": 5 }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "error": "Invalid URL format" }));
}

#[tokio::test]
async fn test_shorten_invalid_custom_code() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    for code in ["a", "has space", "this-code-is-way-too-long-to-use", "health"] {
        let response = server
            .post("/shorturls")
            .add_header("Host", common::TEST_HOST)
            .json(&json!({ "url": "https://example.com", "shortcode": code }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "error": "Invalid shortcode format" }));
    }
}

#[tokio::test]
async fn test_shorten_validity_out_of_range() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorturls")
        .add_header("Host", common::TEST_HOST)
        .json(&json!({ "url": "https://example.com", "validity": 525_601 }))
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>()["error"].is_string());
}

#[tokio::test]
async fn test_shorten_malformed_json() {
    let (state, mut rx) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorturls")
        .add_header("Host", common::TEST_HOST)
        .add_header("Content-Type", "application/json")
        .text("{ not json")
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>()["error"].is_string());

    let events = common::drain_audit(&mut rx);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, AuditLevel::Warn);
}

#[tokio::test]
async fn test_shorten_uses_forwarded_proto_behind_proxy() {
    let (state, _rx) = common::create_test_state_with(true);
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorturls")
        .add_header("Host", "sho.rt")
        .add_header("X-Forwarded-Proto", "https")
        .json(&json!({ "url": "https://example.com", "shortcode": "secure" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["shortLink"], "https://sho.rt/secure");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_with_same_code_yield_one_success() {
    let (state, _rx) = common::create_test_state();
    let app = app_router(state, None);

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let app = app.clone();
            let body = json!({ "url": format!("https://example.com/{i}"), "shortcode": "race" });
            let request = Request::post("/shorturls")
                .header(header::HOST, common::TEST_HOST)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap();

            tokio::spawn(async move { app.oneshot(request).await.unwrap().status() })
        })
        .collect();

    let mut created = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            StatusCode::CREATED => created += 1,
            StatusCode::BAD_REQUEST => rejected += 1,
            other => panic!("unexpected status {other}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(rejected, 9);
}
