//! Webhook envelope and event names.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Generic wrapper of every webhook delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEnvelope {
    pub event: String,
    /// Either a JSON string holding the encoded document, as the provider
    /// sends it, or the document inline.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl WebhookEnvelope {
    #[must_use]
    pub fn new(event: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            event: event.into(),
            data,
        }
    }

    /// Decodes the payload into `T`.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the payload does not match `T`.
    pub fn decode_data<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        match &self.data {
            serde_json::Value::String(encoded) => serde_json::from_str(encoded),
            inline => T::deserialize(inline),
        }
    }
}

/// Events the dispatcher understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebhookEvent {
    AccountCreated,
    AccountSynced,
    AccountDisabled,
    ConnectionDeleted,
    UserCreated,
}

impl WebhookEvent {
    pub const ALL: [Self; 5] = [
        Self::AccountCreated,
        Self::AccountSynced,
        Self::AccountDisabled,
        Self::ConnectionDeleted,
        Self::UserCreated,
    ];

    /// Matches an event name exactly; `None` for names not in the table.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.name() == name)
    }

    /// The provider's name for this event.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AccountCreated => "account.post",
            Self::AccountSynced => "account.synced",
            Self::AccountDisabled => "account.disabled",
            Self::ConnectionDeleted => "connection.deleted",
            Self::UserCreated => "user.created",
        }
    }
}

impl fmt::Display for WebhookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
