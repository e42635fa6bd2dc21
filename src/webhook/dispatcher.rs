//! Event-name dispatch.

use serde::de::DeserializeOwned;

use crate::models::{Account, Connection, SyncedAccount, User};

use super::{ConnectMeta, WebhookEnvelope, WebhookError, WebhookEvent, WebhookListeners};

/// What a delivery resulted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The payload decoded and its listener ran.
    Delivered(WebhookEvent),
    /// The payload decoded but no listener is registered for it.
    NoListener(WebhookEvent),
    /// The event name is not one the dispatcher knows; nothing ran.
    Unrecognized(String),
}

/// Routes deliveries to [`WebhookListeners`].
///
/// Holds no per-delivery state, so one instance behind an `Arc` can serve
/// any number of concurrent deliveries.
#[derive(Debug, Default)]
pub struct WebhookDispatcher {
    listeners: WebhookListeners,
}

impl WebhookDispatcher {
    #[must_use]
    pub const fn new(listeners: WebhookListeners) -> Self {
        Self { listeners }
    }

    /// Parses a raw request body as an envelope, then dispatches it.
    ///
    /// # Errors
    ///
    /// [`WebhookError::Envelope`] for a malformed body, otherwise as
    /// [`handle`](Self::handle).
    pub fn handle_json(
        &self,
        body: &[u8],
        connect_meta: Option<&str>,
    ) -> Result<Dispatch, WebhookError> {
        let envelope: WebhookEnvelope =
            serde_json::from_slice(body).map_err(WebhookError::Envelope)?;
        self.handle(&envelope, connect_meta)
    }

    /// Decodes the envelope's payload and invokes at most one listener.
    ///
    /// `connect_meta` is the raw `X-Connect-Meta` header; it is only read
    /// for `account.post`. Unknown event names succeed without side effects.
    ///
    /// # Errors
    ///
    /// [`WebhookError::Decode`] if the payload does not match the event's
    /// model. No listener runs in that case.
    pub fn handle(
        &self,
        envelope: &WebhookEnvelope,
        connect_meta: Option<&str>,
    ) -> Result<Dispatch, WebhookError> {
        let Some(event) = WebhookEvent::from_name(&envelope.event) else {
            tracing::debug!(event = %envelope.event, "Ignoring unrecognized webhook event");
            return Ok(Dispatch::Unrecognized(envelope.event.clone()));
        };

        tracing::debug!(%event, "Received webhook event");

        let listeners = &self.listeners;
        let dispatch = match event {
            WebhookEvent::AccountCreated => {
                let account: Account = decode(event, envelope)?;
                let meta = connect_meta.map(ConnectMeta::parse).unwrap_or_default();
                invoke(event, listeners.account_created.as_deref(), |f| {
                    f(account, meta);
                })
            }
            WebhookEvent::AccountSynced => {
                let account: SyncedAccount = decode(event, envelope)?;
                invoke(event, listeners.account_synced.as_deref(), |f| f(account))
            }
            WebhookEvent::AccountDisabled => {
                let account: Account = decode(event, envelope)?;
                invoke(event, listeners.account_disabled.as_deref(), |f| f(account))
            }
            WebhookEvent::ConnectionDeleted => {
                let connection: Connection = decode(event, envelope)?;
                invoke(event, listeners.connection_deleted.as_deref(), |f| {
                    f(connection);
                })
            }
            WebhookEvent::UserCreated => {
                let user: User = decode(event, envelope)?;
                invoke(event, listeners.user_created.as_deref(), |f| f(user))
            }
        };

        Ok(dispatch)
    }
}

fn decode<T: DeserializeOwned>(
    event: WebhookEvent,
    envelope: &WebhookEnvelope,
) -> Result<T, WebhookError> {
    envelope.decode_data().map_err(|source| {
        tracing::warn!(%event, error = %source, "Rejecting webhook payload");
        WebhookError::Decode { event, source }
    })
}

fn invoke<F: ?Sized>(event: WebhookEvent, listener: Option<&F>, call: impl FnOnce(&F)) -> Dispatch {
    match listener {
        Some(listener) => {
            call(listener);
            Dispatch::Delivered(event)
        }
        None => {
            tracing::warn!(%event, "No listener registered for webhook event");
            Dispatch::NoListener(event)
        }
    }
}
