//! Error types for webhook handling.

use thiserror::Error;

use super::WebhookEvent;

/// A delivery that cannot be handed to a listener.
///
/// Always the sender's fault; the receiver answers 400.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The body is not a `{"event", "data"}` envelope.
    #[error("Malformed webhook envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    /// The payload does not decode into the event's model.
    #[error("Failed to decode {event} payload: {source}")]
    Decode {
        event: WebhookEvent,
        #[source]
        source: serde_json::Error,
    },
}
