//! Validated configuration after merging CLI, TOML and environment.

use std::fmt;
use std::net::SocketAddr;
use std::path::Path;

use crate::api::Credentials;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Everything needed to build an [`ApiClient`](crate::api::ApiClient).
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub credentials: Credentials,
    /// Per-account subdomain
    pub domain: String,
    /// Provider host
    pub host: String,
}

/// Webhook receiver settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookSettings {
    pub bind: SocketAddr,
    pub path: String,
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] in the binary, or
/// [`ValidatedConfig::from_raw`] with an explicit environment lookup.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// API settings; `None` when the command does not call the provider
    /// and they are not fully configured
    pub api: Option<ApiSettings>,

    pub webhook: WebhookSettings,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api = self.api.as_ref().map_or_else(
            || "unconfigured".to_string(),
            |api| {
                format!(
                    "https://{}.{}/{} (client {})",
                    api.domain,
                    api.host,
                    crate::api::API_VERSION,
                    api.credentials.client_id()
                )
            },
        );

        write!(
            f,
            "Config {{ api: {api}, webhook: {}{} }}",
            self.webhook.bind, self.webhook.path
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from its raw sources.
    ///
    /// `env` looks up environment variables; pass `|k| std::env::var(k).ok()`
    /// for the real environment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command calls the API and a credential or the domain is missing
    /// - Domain or host is not a DNS name
    /// - Bind address or webhook path is invalid
    pub fn from_raw<E>(cli: &Cli, toml: Option<&TomlConfig>, env: E) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let api = Self::resolve_api(cli, toml, &env)?;
        if api.is_none() && cli.command.needs_api() {
            return Err(Self::first_missing(toml, &env));
        }

        Ok(Self {
            api,
            webhook: Self::resolve_webhook(cli, toml)?,
            verbose: cli.verbose,
        })
    }

    /// Loads the config file (explicit or default location) and validates
    /// against the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if
    /// validation fails.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = match (&cli.config, defaults::config_path()) {
            (Some(path), _) => Some(TomlConfig::load(path)?),
            (None, Some(path)) if path.is_file() => Some(TomlConfig::load(&path)?),
            _ => None,
        };

        Self::from_raw(cli, toml.as_ref(), |key| std::env::var(key).ok())
    }

    fn resolve_api<E>(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        env: &E,
    ) -> Result<Option<ApiSettings>, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let section = toml.map(|t| &t.api);
        let pick = |from_toml: Option<&Option<String>>, var: &str| lookup(from_toml, var, env);

        let client_id = pick(section.map(|s| &s.client_id), defaults::env::CLIENT_ID);
        let api_key = pick(section.map(|s| &s.api_key), defaults::env::API_KEY);
        let api_secret = pick(section.map(|s| &s.api_secret), defaults::env::API_SECRET);
        let domain = cli
            .domain
            .clone()
            .or_else(|| pick(section.map(|s| &s.domain), defaults::env::DOMAIN));
        let host = section
            .and_then(|s| s.host.clone())
            .unwrap_or_else(|| defaults::HOST.to_string());

        validate_hostname("host", &host)?;
        if let Some(domain) = &domain {
            validate_label(domain)?;
        }

        let (Some(client_id), Some(api_key), Some(api_secret), Some(domain)) =
            (client_id, api_key, api_secret, domain)
        else {
            return Ok(None);
        };

        Ok(Some(ApiSettings {
            credentials: Credentials::new(client_id, api_key, api_secret),
            domain,
            host,
        }))
    }

    fn first_missing<E>(toml: Option<&TomlConfig>, env: &E) -> ConfigError
    where
        E: Fn(&str) -> Option<String>,
    {
        let section = toml.map(|t| &t.api);
        let is_set =
            |from_toml: Option<&Option<String>>, var: &str| lookup(from_toml, var, env).is_some();

        if !is_set(section.map(|s| &s.client_id), defaults::env::CLIENT_ID) {
            return ConfigError::missing(
                field::CLIENT_ID,
                "Set api.client_id in config file or BUDINS_CLIENT_ID",
            );
        }
        if !is_set(section.map(|s| &s.api_key), defaults::env::API_KEY) {
            return ConfigError::missing(
                field::API_KEY,
                "Set api.api_key in config file or BUDINS_API_KEY",
            );
        }
        if !is_set(section.map(|s| &s.api_secret), defaults::env::API_SECRET) {
            return ConfigError::missing(
                field::API_SECRET,
                "Set api.api_secret in config file or BUDINS_API_SECRET",
            );
        }
        ConfigError::missing(
            field::DOMAIN,
            "Use --domain, set api.domain in config file or BUDINS_DOMAIN",
        )
    }

    fn resolve_webhook(cli: &Cli, toml: Option<&TomlConfig>) -> Result<WebhookSettings, ConfigError> {
        let section = toml.map(|t| &t.webhook);

        let bind = match cli
            .bind()
            .map(str::to_string)
            .or_else(|| section.and_then(|s| s.bind.clone()))
        {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidBind { value, source })?,
            None => defaults::webhook_bind(),
        };

        let path = section
            .and_then(|s| s.path.clone())
            .unwrap_or_else(|| defaults::WEBHOOK_PATH.to_string());
        if !path.starts_with('/') {
            return Err(ConfigError::InvalidPath(path));
        }

        Ok(WebhookSettings { bind, path })
    }
}

/// Writes the commented configuration template to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

/// TOML value if non-empty, else the environment variable if non-empty.
fn lookup<E>(from_toml: Option<&Option<String>>, var: &str, env: &E) -> Option<String>
where
    E: Fn(&str) -> Option<String>,
{
    from_toml
        .and_then(Option::clone)
        .filter(|v| !v.is_empty())
        .or_else(|| env(var).filter(|v| !v.is_empty()))
}

/// A single DNS label: the domain is prefixed to the host.
fn validate_label(value: &str) -> Result<(), ConfigError> {
    let invalid = |reason| ConfigError::InvalidHostname {
        field: field::DOMAIN,
        value: value.to_string(),
        reason,
    };

    if value.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if value.len() > 63 {
        return Err(invalid("longer than 63 characters"));
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(invalid("only letters, digits and '-' are allowed"));
    }
    if value.starts_with('-') || value.ends_with('-') {
        return Err(invalid("must not start or end with '-'"));
    }
    Ok(())
}

fn validate_hostname(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let valid = !value.is_empty()
        && value.split('.').all(|label| {
            !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidHostname {
            field,
            value: value.to_string(),
            reason: "expected a dot-separated DNS name",
        })
    }
}
