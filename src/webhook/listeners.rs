//! Listener slots, one per known event.

use std::fmt;

use super::ConnectMeta;
use crate::models::{Account, Connection, SyncedAccount, User};

type Listener<T> = Box<dyn Fn(T) + Send + Sync>;
type CreatedListener = Box<dyn Fn(Account, ConnectMeta) + Send + Sync>;

/// Callbacks invoked by the dispatcher.
///
/// Every slot is optional; an empty slot turns the matching event into a
/// logged no-op.
///
/// # Example
///
/// ```
/// use budins::webhook::WebhookListeners;
///
/// let listeners = WebhookListeners::new()
///     .on_account_created(|account, meta| {
///         println!("account {} created for {:?}", account.id, meta.get("customer"));
///     })
///     .on_connection_deleted(|connection| println!("connection {} gone", connection.id));
/// assert!(listeners.has_account_created());
/// ```
#[derive(Default)]
pub struct WebhookListeners {
    pub(super) account_created: Option<CreatedListener>,
    pub(super) account_synced: Option<Listener<SyncedAccount>>,
    pub(super) account_disabled: Option<Listener<Account>>,
    pub(super) connection_deleted: Option<Listener<Connection>>,
    pub(super) user_created: Option<Listener<User>>,
}

impl WebhookListeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_account_created<F>(mut self, f: F) -> Self
    where
        F: Fn(Account, ConnectMeta) + Send + Sync + 'static,
    {
        self.account_created = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_account_synced<F>(mut self, f: F) -> Self
    where
        F: Fn(SyncedAccount) + Send + Sync + 'static,
    {
        self.account_synced = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_account_disabled<F>(mut self, f: F) -> Self
    where
        F: Fn(Account) + Send + Sync + 'static,
    {
        self.account_disabled = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_connection_deleted<F>(mut self, f: F) -> Self
    where
        F: Fn(Connection) + Send + Sync + 'static,
    {
        self.connection_deleted = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_user_created<F>(mut self, f: F) -> Self
    where
        F: Fn(User) + Send + Sync + 'static,
    {
        self.user_created = Some(Box::new(f));
        self
    }

    #[must_use]
    pub const fn has_account_created(&self) -> bool {
        self.account_created.is_some()
    }
}

impl fmt::Debug for WebhookListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookListeners")
            .field("account_created", &self.account_created.is_some())
            .field("account_synced", &self.account_synced.is_some())
            .field("account_disabled", &self.account_disabled.is_some())
            .field("connection_deleted", &self.connection_deleted.is_some())
            .field("user_created", &self.user_created.is_some())
            .finish()
    }
}
