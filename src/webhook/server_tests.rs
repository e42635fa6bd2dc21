//! Tests for the axum receiver.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::{CONNECT_META_HEADER, WebhookDispatcher, WebhookListeners, router, router_at};

fn counting_router(count: &Arc<AtomicUsize>) -> axum::Router {
    let counter = Arc::clone(count);
    let listeners = WebhookListeners::new().on_account_created(move |_, meta| {
        assert_eq!(meta.get("customer"), Some("42"));
        counter.fetch_add(1, Ordering::SeqCst);
    });
    router(Arc::new(WebhookDispatcher::new(listeners)))
}

fn post(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .header(CONNECT_META_HEADER, "customer=42")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn valid_delivery_is_ok_and_dispatched() {
    let count = Arc::new(AtomicUsize::new(0));
    let body = serde_json::json!({
        "event": "account.post",
        "data": r#"{"id": 17, "name": "Compte chèque"}"#,
    });

    let response = counting_router(&count)
        .oneshot(post("/webhooks", &body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unrecognized_event_is_ok() {
    let count = Arc::new(AtomicUsize::new(0));

    let response = counting_router(&count)
        .oneshot(post("/webhooks", r#"{"event": "foo.bar", "data": "{}"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn undecodable_payload_is_bad_request() {
    let count = Arc::new(AtomicUsize::new(0));

    let response = counting_router(&count)
        .oneshot(post("/webhooks", r#"{"event": "account.post", "data": "{oops"}"#))
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("account.post"));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_envelope_is_bad_request() {
    let count = Arc::new(AtomicUsize::new(0));

    let response = counting_router(&count)
        .oneshot(post("/webhooks", "not json at all"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn custom_path_is_honoured() {
    let app = router_at("/hooks/bi", Arc::new(WebhookDispatcher::default()));

    let response = app
        .oneshot(post("/hooks/bi", r#"{"event": "user.created", "data": {"id": 1}}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
