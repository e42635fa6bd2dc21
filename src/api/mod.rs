//! Signed REST client for the provider API.
//!
//! A call goes through one linear path:
//!
//! 1. [`RequestDescriptor`] names the verb, route, query and optional body
//! 2. [`ApiClient::sign`] serializes the body once and signs those exact
//!    bytes into an immutable [`SignedRequest`]
//! 3. the [`HttpClient`](crate::http::HttpClient) sends it
//! 4. the status is classified and the body decoded into the caller's type
//!    or into an [`Error::Api`] carrying an [`ApiErrorKind`]
//!
//! The client holds nothing but credentials and configuration, so one
//! instance can serve concurrent calls.

mod client;
mod credentials;
mod error;
mod resources;
mod signing;

#[cfg(test)]
mod signing_tests;
#[cfg(test)]
mod test_support;

pub use client::{ApiClient, DEFAULT_HOST, API_VERSION};
pub use credentials::Credentials;
pub use error::{ApiErrorKind, Error, ErrorResponse};
pub use resources::route;
pub use signing::{RequestDescriptor, RequestSigner, SignedRequest, header};
