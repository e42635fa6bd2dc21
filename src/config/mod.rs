//! Configuration layer for the `budins` binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** (`--domain`, `serve --bind`)
//! 2. **TOML config file**
//! 3. **Environment** (`BUDINS_CLIENT_ID`, `BUDINS_API_KEY`, `BUDINS_API_SECRET`, `BUDINS_DOMAIN`)
//! 4. **Built-in defaults**
//!
//! Secrets have no CLI flags so they never show up in shell history or
//! process listings.
//!
//! # Config File Location
//!
//! `--config` wins. Without it, `<config dir>/budins/budins.toml` is read
//! when it exists and silently skipped otherwise.
//!
//! # API Settings
//!
//! Commands that call the provider (`token`, `me`, `accounts`) need the
//! client id, API key, API secret and domain. `serve` and `init` do not,
//! and load without them.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ApiSettings, ValidatedConfig, WebhookSettings, write_default_config};
