//! HTTP request/response values and the client trait.

use super::HttpError;

/// An outbound request, already signed and ready for the wire.
///
/// The body is kept as raw bytes: these are the exact bytes that were
/// signed, and the transport must send them unchanged.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: http::Method,
    /// Target URL, including the query string
    pub url: url::Url,
    /// Headers to send
    pub headers: http::HeaderMap,
    /// Serialized body, if any
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a request without headers or body.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a header, replacing any previous value under the same name.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Returns the value of a header as a string slice, if present and visible ASCII.
    #[must_use]
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A fully buffered response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Creates a response with no headers for transport doubles.
    ///
    /// A code outside `100..=999` becomes 500.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn from_parts(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let status =
            http::StatusCode::from_u16(status).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, http::HeaderMap::new(), body.into())
    }

    /// Returns true for statuses in `200..300`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as UTF-8 text, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Sends requests to the provider.
///
/// Implemented by [`ReqwestClient`](super::ReqwestClient) in production and
/// by recording doubles in tests. Implementations must not retry: a failed
/// exchange is reported once as an [`HttpError`].
pub trait HttpClient: Send + Sync {
    /// Sends the request and buffers the whole response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no response could be obtained.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}

impl<T: HttpClient> HttpClient for std::sync::Arc<T> {
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send {
        (**self).request(req)
    }
}
