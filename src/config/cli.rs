//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// budins: Budget Insight API client and webhook receiver
///
/// Calls the provider's signed REST API and receives its webhook
/// notifications.
#[derive(Debug, Parser)]
#[command(name = "budins")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Per-account API subdomain (overrides config file)
    #[arg(long, global = true)]
    pub domain: Option<String>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for budins
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "budins.toml")]
        output: PathBuf,
    },

    /// Run the webhook receiver and log every delivery
    Serve {
        /// Socket address to listen on
        #[arg(long)]
        bind: Option<String>,
    },

    /// Exchange a connect-flow code for a permanent user token
    Token {
        /// Code returned to the connect callback
        #[arg(long)]
        code: String,
    },

    /// Show the user owning a token
    Me {
        /// User access token
        #[arg(long, env = "BUDINS_USER_TOKEN", hide_env_values = true)]
        token: String,
    },

    /// List the bank accounts of the user owning a token
    Accounts {
        /// User access token
        #[arg(long, env = "BUDINS_USER_TOKEN", hide_env_values = true)]
        token: String,
    },
}

impl Command {
    /// Returns true if the command calls the provider API.
    #[must_use]
    pub const fn needs_api(&self) -> bool {
        matches!(
            self,
            Self::Token { .. } | Self::Me { .. } | Self::Accounts { .. }
        )
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns the `serve --bind` override, if any.
    #[must_use]
    pub fn bind(&self) -> Option<&str> {
        match &self.command {
            Command::Serve { bind } => bind.as_deref(),
            _ => None,
        }
    }
}
