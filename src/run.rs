//! Application execution logic.
//!
//! `serve` runs the webhook receiver until shutdown; the API commands make
//! one signed call each and print the decoded response as JSON.

use std::net::SocketAddr;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;

use budins::api::ApiClient;
use budins::config::{ApiSettings, Command, ValidatedConfig, WebhookSettings};
use budins::http::ReqwestClient;
use budins::models::UserRef;
use budins::webhook::{WebhookDispatcher, WebhookListeners, router_at};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to bind the webhook receiver.
    #[error("Failed to bind webhook receiver on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The webhook receiver stopped with an I/O error.
    #[error("Webhook receiver failed: {0}")]
    Serve(#[source] std::io::Error),

    /// A provider call failed.
    #[error("API request failed: {0}")]
    Api(#[from] budins::api::Error),

    /// The response could not be rendered as JSON.
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),

    /// An API command ran without API settings.
    #[error("API settings are not configured")]
    MissingApi,
}

/// Executes the selected command.
///
/// # Errors
///
/// Returns an error if:
/// - The webhook receiver cannot bind or stops with an I/O error
/// - A provider call fails
/// - The response cannot be printed
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires a real
/// network and signal handling.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig, command: Command) -> Result<(), RunError> {
    match command {
        Command::Serve { .. } => serve(&config.webhook).await,
        Command::Token { code } => {
            let client = api_client(config.api.as_ref())?;
            let token = client.access_token(&code).await?;
            tracing::info!(token_type = %token.token_type, "Obtained permanent user token");
            print_json(&token)
        }
        Command::Me { token } => {
            let client = api_client(config.api.as_ref())?;
            print_json(&client.user(&token, UserRef::Me).await?)
        }
        Command::Accounts { token } => {
            let client = api_client(config.api.as_ref())?;
            let accounts = client.accounts(&token, UserRef::Me).await?;
            tracing::debug!("Fetched {} account(s)", accounts.accounts.len());
            print_json(&accounts)
        }
        // Handled before the runtime starts
        Command::Init { .. } => Ok(()),
    }
}

/// Builds a signed client against `https://{domain}.{host}/2.0`.
fn api_client(settings: Option<&ApiSettings>) -> Result<ApiClient<ReqwestClient>, RunError> {
    let settings = settings.ok_or(RunError::MissingApi)?;

    Ok(
        ApiClient::new(ReqwestClient::new(), settings.credentials.clone(), &settings.domain)
            .with_host(&settings.domain, &settings.host),
    )
}

fn print_json<T: Serialize>(value: &T) -> Result<(), RunError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Listeners that log every delivery.
fn logging_listeners() -> WebhookListeners {
    WebhookListeners::new()
        .on_account_created(|account, meta| {
            tracing::info!(
                account = account.id,
                user = ?account.user_id,
                meta = ?meta,
                "Account created"
            );
        })
        .on_account_synced(|synced| {
            tracing::info!(
                account = synced.account.id,
                balance = ?synced.account.balance,
                "Account synced"
            );
        })
        .on_account_disabled(|account| {
            tracing::info!(account = account.id, "Account disabled");
        })
        .on_connection_deleted(|connection| {
            tracing::info!(connection = connection.id, "Connection deleted");
        })
        .on_user_created(|user| {
            tracing::info!(user = user.id, "User created");
        })
}

/// Runs the webhook receiver until Ctrl+C or SIGTERM.
///
/// Excluded from coverage - requires a bound socket and signal handling.
#[cfg(not(tarpaulin_include))]
async fn serve(settings: &WebhookSettings) -> Result<(), RunError> {
    let dispatcher = Arc::new(WebhookDispatcher::new(logging_listeners()));
    let app = router_at(&settings.path, dispatcher);

    let listener = TcpListener::bind(settings.bind)
        .await
        .map_err(|source| RunError::Bind {
            addr: settings.bind,
            source,
        })?;

    tracing::info!(
        "Receiving webhooks on http://{}{}",
        settings.bind,
        settings.path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(RunError::Serve)?;

    tracing::info!("Shutdown signal received, stopped");
    Ok(())
}

/// Returns a future that completes when a shutdown signal is received.
///
/// A handler that fails to install never fires.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
