//! Token exchange payloads.

use serde::{Deserialize, Serialize};

/// Query parameters the provider appends to the connect callback URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectCallbackData {
    pub code: String,
    #[serde(rename = "connectionID")]
    pub connection_id: String,
}

/// Client credentials embedded in token requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Body of `POST /auth/token/access`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskForToken {
    #[serde(flatten)]
    pub credentials: ApiCredentials,
    pub code: String,
}

/// Body of `POST /auth/renew`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskForTokenRenew {
    #[serde(flatten)]
    pub credentials: ApiCredentials,
    #[serde(rename = "id_user")]
    pub user_id: i64,
    pub revoke_previous: bool,
}

/// A permanent user access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenAccessType {
    Standard,
    Single,
}

/// Short-lived code handed to the connect webview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporaryCode {
    pub code: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub access: Option<TokenAccessType>,
    /// Seconds until the code expires
    #[serde(default)]
    pub expires_in: u64,
}
