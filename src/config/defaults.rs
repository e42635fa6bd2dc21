//! Default values for configuration options.

use std::net::{Ipv4Addr, SocketAddr};

/// Provider host the domain is prefixed to.
pub const HOST: &str = crate::api::DEFAULT_HOST;

/// Route the webhook receiver listens on.
pub const WEBHOOK_PATH: &str = crate::webhook::DEFAULT_PATH;

/// Port the webhook receiver binds to.
pub const WEBHOOK_PORT: u16 = 8080;

/// Configuration file name, both for `init` and the default location.
pub const CONFIG_FILE: &str = "budins.toml";

/// Environment variable names for API settings.
pub mod env {
    pub const CLIENT_ID: &str = "BUDINS_CLIENT_ID";
    pub const API_KEY: &str = "BUDINS_API_KEY";
    pub const API_SECRET: &str = "BUDINS_API_SECRET";
    pub const DOMAIN: &str = "BUDINS_DOMAIN";
}

/// Default webhook bind address (loopback only).
#[must_use]
pub const fn webhook_bind() -> SocketAddr {
    SocketAddr::new(std::net::IpAddr::V4(Ipv4Addr::LOCALHOST), WEBHOOK_PORT)
}

/// `<config dir>/budins/budins.toml`, if the platform has a config dir.
#[must_use]
pub fn config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|dir| dir.join("budins").join(CONFIG_FILE))
}
