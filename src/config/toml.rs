//! TOML configuration file parsing.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional so a file can hold only part of the settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiSection,

    #[serde(default)]
    pub webhook: WebhookSection,
}

/// Provider credentials and endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    pub client_id: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    /// Per-account subdomain, e.g. `acme` for `acme.biapi.pro`
    pub domain: Option<String>,
    /// Provider host (default: `biapi.pro`)
    pub host: Option<String>,
}

/// Webhook receiver settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Socket address to listen on
    pub bind: Option<String>,
    /// Route deliveries are POSTed to
    pub path: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# budins configuration file

[api]
# Client id, API key and secret from the provider console.
# Can also be set with BUDINS_CLIENT_ID, BUDINS_API_KEY and BUDINS_API_SECRET.
# client_id = "12345678"
# api_key = "your-api-key"
# api_secret = "your-api-secret"

# Per-account subdomain (https://<domain>.biapi.pro/2.0), overridable with --domain
# domain = "acme-sandbox"

# Provider host (default: biapi.pro)
# host = "biapi.pro"

[webhook]
# Address the webhook receiver listens on (default: 127.0.0.1:8080)
# bind = "0.0.0.0:8080"

# Route webhook deliveries are POSTed to (default: /webhooks)
# path = "/webhooks"
"#
    .to_string()
}
