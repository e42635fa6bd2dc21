//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value the selected command needs is not set anywhere.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        field: &'static str,
        hint: &'static str,
    },

    /// Domain or host is not a usable DNS name.
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidHostname {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Webhook bind address does not parse.
    #[error("Invalid bind address '{value}': {source}")]
    InvalidBind {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Webhook path is not absolute.
    #[error("Invalid webhook path '{0}': must start with '/'")]
    InvalidPath(String),
}

/// Well-known field names for `MissingRequired` errors.
pub mod field {
    pub const CLIENT_ID: &str = "client_id";
    pub const API_KEY: &str = "api_key";
    pub const API_SECRET: &str = "api_secret";
    pub const DOMAIN: &str = "domain";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
