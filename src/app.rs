//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use budins::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, missing credentials, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - bind failure, API error, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    if let Some(hint) = config_hint(error) {
        eprintln!("\n{hint}");
    }
}

fn config_hint(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::MissingRequired { .. } | ConfigError::FileRead { .. } => {
            Some("Run 'budins init' to generate a configuration template.")
        }
        ConfigError::InvalidHostname { .. } => {
            Some("The domain is the subdomain only, e.g. 'acme' for acme.biapi.pro.")
        }
        _ => None,
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use budins::config::field;

    #[test]
    fn missing_credentials_suggest_init() {
        let error = ConfigError::missing(field::API_SECRET, "set it");

        assert!(config_hint(&error).is_some_and(|h| h.contains("budins init")));
    }

    #[test]
    fn invalid_domain_explains_format() {
        let error = ConfigError::InvalidHostname {
            field: field::DOMAIN,
            value: "acme.biapi.pro".to_string(),
            reason: "only letters, digits and '-' are allowed",
        };

        assert!(config_hint(&error).is_some_and(|h| h.contains("subdomain")));
    }

    #[test]
    fn invalid_path_has_no_hint() {
        assert!(config_hint(&ConfigError::InvalidPath("hooks".to_string())).is_none());
    }
}
