//! Error taxonomy of the API client.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http::HttpError;

/// Error document returned by the provider with non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "error")]
    pub code: String,
    #[serde(rename = "error_description", default)]
    pub description: String,
}

/// Provider error codes the client knows how to name.
///
/// Codes outside the table are preserved in [`ApiErrorKind::Unhandled`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// `invalid_client`
    InvalidClientId,
    /// `invalid_grant`
    InvalidGrant,
    /// Any other code, verbatim.
    Unhandled(String),
}

impl ApiErrorKind {
    /// Looks a provider code up in the table of known codes.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "invalid_client" => Self::InvalidClientId,
            "invalid_grant" => Self::InvalidGrant,
            other => Self::Unhandled(other.to_string()),
        }
    }

    /// Returns the provider code this kind was classified from.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidClientId => "invalid_client",
            Self::InvalidGrant => "invalid_grant",
            Self::Unhandled(code) => code,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidClientId => f.write_str("invalid client id"),
            Self::InvalidGrant => f.write_str("invalid grant"),
            Self::Unhandled(code) => write!(f, "unhandled api error '{code}'"),
        }
    }
}

/// Error type for API calls.
#[derive(Debug, Error)]
pub enum Error {
    /// The call was malformed; nothing was sent.
    #[error("Invalid usage: {0}")]
    InvalidUsage(String),

    /// The request body could not be serialized.
    #[error("Failed to encode {what}: {source}")]
    Encode {
        /// What was being encoded
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// No response was obtained. Never retried.
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    /// The response body did not match the expected shape.
    #[error("Failed to decode {what} (HTTP {status}): {source}")]
    Decode {
        /// What was being decoded
        what: &'static str,
        /// Status of the response
        status: http::StatusCode,
        #[source]
        source: serde_json::Error,
    },

    /// The provider reported a failure.
    #[error("API error ({kind}): {description}")]
    Api {
        kind: ApiErrorKind,
        description: String,
        status: http::StatusCode,
    },
}

impl Error {
    /// Classifies a decoded error document.
    #[must_use]
    pub fn from_response(response: ErrorResponse, status: http::StatusCode) -> Self {
        Self::Api {
            kind: ApiErrorKind::from_code(&response.code),
            description: response.description,
            status,
        }
    }

    /// Returns the provider error kind, if this is an [`Error::Api`].
    #[must_use]
    pub const fn api_kind(&self) -> Option<&ApiErrorKind> {
        match self {
            Self::Api { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn known_codes_map_to_named_kinds() {
        assert_eq!(
            ApiErrorKind::from_code("invalid_client"),
            ApiErrorKind::InvalidClientId
        );
        assert_eq!(
            ApiErrorKind::from_code("invalid_grant"),
            ApiErrorKind::InvalidGrant
        );
    }

    #[test]
    fn unknown_code_is_preserved() {
        let kind = ApiErrorKind::from_code("rate_limited");

        assert_eq!(kind, ApiErrorKind::Unhandled("rate_limited".to_string()));
        assert_eq!(kind.code(), "rate_limited");
        assert!(kind.to_string().contains("rate_limited"));
    }

    #[test]
    fn api_error_display_includes_description() {
        let error = Error::from_response(
            ErrorResponse {
                code: "invalid_grant".to_string(),
                description: "code expired".to_string(),
            },
            http::StatusCode::BAD_REQUEST,
        );

        assert_eq!(error.api_kind(), Some(&ApiErrorKind::InvalidGrant));
        assert_eq!(error.to_string(), "API error (invalid grant): code expired");
    }

    #[test]
    fn error_response_description_is_optional() {
        let response: ErrorResponse = serde_json::from_str(r#"{"error": "wrongpass"}"#).unwrap();

        assert_eq!(response.code, "wrongpass");
        assert!(response.description.is_empty());
    }

    #[test]
    fn transport_error_keeps_source() {
        let error = Error::from(HttpError::Timeout);

        assert!(error.source().is_some());
        assert!(error.api_kind().is_none());
    }
}
