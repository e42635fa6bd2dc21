//! Transport-level failures.

use thiserror::Error;

/// Failure to obtain any HTTP response from the provider.
///
/// A response with a non-2xx status is *not* an `HttpError`; those are
/// classified by the API layer from the response body.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Connection could not be established or was dropped mid-exchange.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The transport's own timeout elapsed.
    #[error("Request timed out")]
    Timeout,

    /// The transport refused to build the request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
