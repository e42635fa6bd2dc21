//! Bank connections.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Response of `GET /users/{user}/connections`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionsResponse {
    #[serde(default)]
    pub connections: Vec<Connection>,
}

/// A user's link to one bank connector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: i64,
    #[serde(rename = "id_user")]
    pub user_id: Option<i64>,
    #[serde(rename = "id_connector", default)]
    pub connector_id: i64,
    pub state: Option<ConnectionState>,
    pub error_message: Option<String>,
    pub last_update: Option<Timestamp>,
    pub created: Option<Timestamp>,
    #[serde(default)]
    pub active: bool,
    pub last_push: Option<Timestamp>,
    pub next_try: Option<Timestamp>,
}

/// Flags describing why a connection needs attention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)] // mirrors the provider's flag object
pub struct ConnectionState {
    #[serde(rename = "SCARequired")]
    pub sca_required: bool,
    #[serde(rename = "webauthRequired")]
    pub webauth_required: bool,
    #[serde(rename = "additionalInformationNeeded")]
    pub additional_information_needed: bool,
    pub decoupled: bool,
    pub validating: bool,
    #[serde(rename = "actionNeeded")]
    pub action_needed: bool,
    #[serde(rename = "passwordExpired")]
    pub password_expired: bool,
    #[serde(rename = "SCAwrongpassRequired")]
    pub wrong_pass: bool,
    #[serde(rename = "rateLimiting")]
    pub rate_limiting: bool,
    #[serde(rename = "websiteUnavailable")]
    pub website_unavailable: bool,
    pub bug: bool,
}
