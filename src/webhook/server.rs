//! Axum receiver for webhook deliveries.

use std::sync::Arc;

use axum::Router;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;

use super::{CONNECT_META_HEADER, Dispatch, WebhookDispatcher};

/// Route the receiver is mounted on by [`router`].
pub const DEFAULT_PATH: &str = "/webhooks";

/// Builds a router accepting deliveries on `POST /webhooks`.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use budins::webhook::{WebhookDispatcher, WebhookListeners, router};
///
/// # async fn example() -> std::io::Result<()> {
/// let listeners = WebhookListeners::new().on_user_created(|user| println!("user {}", user.id));
/// let app = router(Arc::new(WebhookDispatcher::new(listeners)));
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, app).await
/// # }
/// ```
pub fn router(dispatcher: Arc<WebhookDispatcher>) -> Router {
    router_at(DEFAULT_PATH, dispatcher)
}

/// Builds a router accepting deliveries on `POST {path}`.
pub fn router_at(path: &str, dispatcher: Arc<WebhookDispatcher>) -> Router {
    Router::new()
        .route(path, post(receive))
        .with_state(dispatcher)
}

async fn receive(
    State(dispatcher): State<Arc<WebhookDispatcher>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let connect_meta = headers
        .get(CONNECT_META_HEADER)
        .and_then(|value| value.to_str().ok());

    match dispatcher.handle_json(&body, connect_meta) {
        Ok(Dispatch::Delivered(event)) => {
            tracing::info!(%event, "Webhook delivered");
            StatusCode::OK.into_response()
        }
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}
