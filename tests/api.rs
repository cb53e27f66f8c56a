// Integration tests for the HTTP API - requests go through the full router

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use engine_clock::{create_router, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_app() -> Router {
    create_router(Arc::new(AppState::new(0, "127.0.0.1".to_string())))
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn type_digits(app: &Router, digits: &str) -> Value {
    let mut last = Value::Null;
    for d in digits.chars() {
        let (status, body) = send(app, "POST", &format!("/digit/{}", d)).await;
        assert_eq!(status, StatusCode::OK);
        last = body;
    }
    last
}

#[tokio::test]
async fn test_health_endpoint_returns_200() {
    let app = create_test_app();
    let (status, body) = send(&app, "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_fresh_status_shows_placeholders() {
    let app = create_test_app();
    let (status, body) = send(&app, "GET", "/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entry"]["engine_start"], "");
    assert_eq!(body["entry"]["active"], Value::Null);
    assert_eq!(body["entry"]["elapsed"]["minutes"], Value::Null);
    assert_eq!(body["entry"]["elapsed"]["clock"], "--:--");
    assert_eq!(body["entry"]["elapsed"]["tc_decimal"], "--.-");
    assert_eq!(body["last_action"], Value::Null);
}

#[tokio::test]
async fn test_full_entry_flow() {
    let app = create_test_app();
    send(&app, "POST", "/select/engineStart").await;

    let body = type_digits(&app, "0802").await;
    assert_eq!(body["entry"]["engine_start"], "08:02");
    assert_eq!(body["entry"]["active"], "engineStop");

    let body = type_digits(&app, "0905").await;
    assert_eq!(body["entry"]["engine_stop"], "09:05");
    assert_eq!(body["entry"]["active"], "engineStop");
    assert_eq!(body["entry"]["elapsed"]["minutes"], 63);
    assert_eq!(body["entry"]["elapsed"]["clock"], "01:03");
    assert_eq!(body["entry"]["elapsed"]["tc_decimal"], "1.1");

    let (_, status) = send(&app, "GET", "/status").await;
    assert_eq!(status["last_action"], "digit");
    assert_eq!(status["entry"]["elapsed"]["tc_decimal"], "1.1");
}

#[tokio::test]
async fn test_midnight_rollover() {
    let app = create_test_app();
    send(&app, "POST", "/select/engine-start").await;
    let body = type_digits(&app, "23580002").await;

    assert_eq!(body["entry"]["elapsed"]["minutes"], 4);
    assert_eq!(body["entry"]["elapsed"]["clock"], "00:04");
    assert_eq!(body["entry"]["elapsed"]["tc_decimal"], "0.1");
}

#[tokio::test]
async fn test_invalid_inputs_are_ignored() {
    let app = create_test_app();

    let (status, body) = send(&app, "POST", "/select/engineIdle").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ignored");
    assert_eq!(body["entry"]["active"], Value::Null);

    send(&app, "POST", "/select/engineStart").await;
    for bad in ["x", "12", "%20"] {
        let (status, body) = send(&app, "POST", &format!("/digit/{}", bad)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ignored");
        assert_eq!(body["entry"]["engine_start"], "");
    }
}

#[tokio::test]
async fn test_digits_without_selection_do_nothing() {
    let app = create_test_app();
    let body = type_digits(&app, "12").await;

    assert_eq!(body["status"], "applied");
    assert_eq!(body["entry"]["engine_start"], "");
    assert_eq!(body["entry"]["engine_stop"], "");
}

#[tokio::test]
async fn test_backspace_clear_and_reset() {
    let app = create_test_app();
    send(&app, "POST", "/select/engineStart").await;
    type_digits(&app, "08301015").await;

    send(&app, "POST", "/select/engineStart").await;
    let (_, body) = send(&app, "POST", "/backspace").await;
    assert_eq!(body["entry"]["engine_start"], "08:3");
    assert_eq!(body["entry"]["active"], "engineStart");
    assert_eq!(body["entry"]["elapsed"]["clock"], "--:--");

    let (_, body) = send(&app, "POST", "/clear").await;
    assert_eq!(body["entry"]["engine_start"], "");
    assert_eq!(body["entry"]["engine_stop"], "10:15");
    assert_eq!(body["entry"]["active"], "engineStart");

    let (_, body) = send(&app, "POST", "/reset").await;
    assert_eq!(body["entry"]["engine_stop"], "");
    assert_eq!(body["entry"]["active"], Value::Null);
}

#[tokio::test]
async fn test_deselect_stops_input() {
    let app = create_test_app();
    send(&app, "POST", "/select/engineStop").await;
    type_digits(&app, "1").await;
    send(&app, "POST", "/deselect").await;

    let body = type_digits(&app, "2").await;
    assert_eq!(body["entry"]["engine_stop"], "1");
    assert_eq!(body["entry"]["active"], Value::Null);
}

#[tokio::test]
async fn test_install_hint_for_ios_safari() {
    let app = create_test_app();
    let request = Request::builder()
        .uri("/install-hint")
        .header(
            header::USER_AGENT,
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
        )
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let hint: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(hint["hint"], "ios_safari_tip");
    assert_eq!(hint["standalone"], false);
    assert_eq!(hint["touch_device"], true);
}

#[tokio::test]
async fn test_install_hint_hidden_when_standalone() {
    let app = create_test_app();
    let request = Request::builder()
        .uri("/install-hint")
        .header(header::USER_AGENT, "Mozilla/5.0 (Linux; Android 14) Mobile Safari/537.36")
        .header("x-display-mode", "standalone")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let hint: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(hint["hint"], "none");
}
