//! Transport layer used by the API client.
//!
//! The client never talks to `reqwest` directly. It hands a fully signed
//! [`HttpRequest`] to an [`HttpClient`] implementation, which keeps the
//! executor testable with a recording spy and leaves pooling and timeouts to
//! the transport.

mod client;
mod error;
mod request;


pub use client::ReqwestClient;
pub use error::HttpError;
pub use request::{HttpClient, HttpRequest, HttpResponse};
