//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

#[test]
fn parse_full_config() {
    let toml = r#"
        [api]
        client_id = "12345678"
        api_key = "key"
        api_secret = "secret"
        domain = "acme"
        host = "biapi-sandbox.pro"

        [webhook]
        bind = "0.0.0.0:8080"
        path = "/hooks"
    "#;

    let config = TomlConfig::parse(toml).unwrap();

    assert_eq!(config.api.client_id.as_deref(), Some("12345678"));
    assert_eq!(config.api.domain.as_deref(), Some("acme"));
    assert_eq!(config.api.host.as_deref(), Some("biapi-sandbox.pro"));
    assert_eq!(config.webhook.bind.as_deref(), Some("0.0.0.0:8080"));
    assert_eq!(config.webhook.path.as_deref(), Some("/hooks"));
}

#[test]
fn parse_empty_config() {
    let config = TomlConfig::parse("").unwrap();

    assert!(config.api.client_id.is_none());
    assert!(config.webhook.bind.is_none());
}

#[test]
fn unknown_field_is_rejected() {
    let result = TomlConfig::parse(
        r#"
        [api]
        secret = "typo"
    "#,
    );

    assert!(result.is_err());
}

#[test]
fn unknown_section_is_rejected() {
    assert!(TomlConfig::parse("[retry]\nmax_attempts = 3").is_err());
}

#[test]
fn default_template_parses() {
    let config = TomlConfig::parse(&default_config_template()).unwrap();

    assert!(config.api.api_secret.is_none());
}

#[test]
fn load_reports_missing_file() {
    let result = TomlConfig::load(std::path::Path::new("/nonexistent/budins.toml"));

    assert!(matches!(
        result,
        Err(super::ConfigError::FileRead { .. })
    ));
}
