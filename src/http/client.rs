//! Production transport backed by reqwest.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// [`HttpClient`] over a shared `reqwest::Client`.
///
/// The request arrives already signed, so the client only moves it onto
/// the wire. Timeouts, proxies and TLS belong to the wrapped
/// `reqwest::Client`; see [`from_client`](Self::from_client).
///
/// # Example
///
/// ```no_run
/// use budins::http::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://demo.biapi.pro/2.0/banks")?;
/// let response = client.request(HttpRequest::new(http::Method::GET, url)).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a client with reqwest's default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Wraps an existing reqwest client (custom timeouts, proxies, TLS).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    /// Moves the signed method, URL, headers and body bytes into a
    /// `reqwest::Request` as they are; nothing is re-encoded.
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut outbound = reqwest::Request::new(req.method, req.url);
        *outbound.headers_mut() = req.headers;
        *outbound.body_mut() = req.body.map(reqwest::Body::from);

        let response = self.inner.execute(outbound).await.map_err(send_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| {
            tracing::debug!(%status, "Response body interrupted: {e}");
            send_error(e)
        })?;

        Ok(HttpResponse::new(status, headers, body.to_vec()))
    }
}

/// No response is ever retried here, so every reqwest failure ends the call.
fn send_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidRequest(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}
