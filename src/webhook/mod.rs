//! Inbound webhook handling.
//!
//! The provider POSTs `{"event": <name>, "data": <payload>}` for account and
//! connection lifecycle events. [`WebhookDispatcher`] decodes the payload
//! into the model matching the event name and calls the listener registered
//! in [`WebhookListeners`]. [`router`] mounts the dispatcher on an axum
//! route that answers 400 for payloads that fail to decode.
//!
//! | Event | Model | Listener |
//! |---|---|---|
//! | `account.post` | [`Account`](crate::models::Account) + [`ConnectMeta`] | `on_account_created` |
//! | `account.synced` | [`SyncedAccount`](crate::models::SyncedAccount) | `on_account_synced` |
//! | `account.disabled` | [`Account`](crate::models::Account) | `on_account_disabled` |
//! | `connection.deleted` | [`Connection`](crate::models::Connection) | `on_connection_deleted` |
//! | `user.created` | [`User`](crate::models::User) | `on_user_created` |

mod dispatcher;
mod envelope;
mod error;
mod listeners;
mod meta;
mod server;

#[cfg(test)]
mod server_tests;

pub use dispatcher::{Dispatch, WebhookDispatcher};
pub use envelope::{WebhookEnvelope, WebhookEvent};
pub use error::WebhookError;
pub use listeners::WebhookListeners;
pub use meta::{CONNECT_META_HEADER, ConnectMeta};
pub use server::{DEFAULT_PATH, router, router_at};
