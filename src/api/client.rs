//! The request executor.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Credentials, Error, ErrorResponse, RequestDescriptor, RequestSigner, SignedRequest};
use crate::http::{HttpClient, HttpResponse};
use crate::time::{Clock, SystemClock};

/// Provider host the per-account domain is prefixed to.
pub const DEFAULT_HOST: &str = "biapi.pro";

/// API version path segment.
pub const API_VERSION: &str = "2.0";

/// Signed client for one set of credentials and one domain.
///
/// Stateless apart from what it is built with, so a single instance can be
/// shared (for example behind an `Arc`) by concurrent tasks.
///
/// # Type Parameters
///
/// - `H`: the transport
/// - `C`: the clock signatures are timestamped with (defaults to [`SystemClock`])
///
/// # Example
///
/// ```
/// use budins::api::{ApiClient, Credentials};
/// use budins::http::ReqwestClient;
///
/// let client = ApiClient::new(
///     ReqwestClient::new(),
///     Credentials::new("client-id", "api-key", "api-secret"),
///     "demo",
/// );
/// assert_eq!(client.base_url(), "https://demo.biapi.pro/2.0");
/// ```
#[derive(Debug)]
pub struct ApiClient<H, C = SystemClock> {
    http: H,
    clock: C,
    credentials: Credentials,
    signer: RequestSigner,
    base_url: String,
}

impl<H> ApiClient<H, SystemClock> {
    /// Creates a client for `https://{domain}.biapi.pro/2.0`.
    #[must_use]
    pub fn new(http: H, credentials: Credentials, domain: &str) -> Self {
        let signer = RequestSigner::new(credentials.api_secret());
        Self {
            http,
            clock: SystemClock,
            credentials,
            signer,
            base_url: base_url(domain, DEFAULT_HOST),
        }
    }
}

impl<H, C> ApiClient<H, C> {
    /// Replaces the clock used to timestamp signatures.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> ApiClient<H, C2> {
        ApiClient {
            http: self.http,
            clock,
            credentials: self.credentials,
            signer: self.signer,
            base_url: self.base_url,
        }
    }

    /// Rebuilds the base URL as `https://{domain}.{host}/2.0`.
    #[must_use]
    pub fn with_host(mut self, domain: &str, host: &str) -> Self {
        self.base_url = base_url(domain, host);
        self
    }

    /// Uses `base_url` verbatim (sandboxes, local doubles). It must include
    /// the version segment and have no trailing slash.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[must_use]
    pub const fn transport(&self) -> &H {
        &self.http
    }
}

impl<H: HttpClient, C: Clock> ApiClient<H, C> {
    /// Signs `request` at the clock's current second.
    ///
    /// # Errors
    ///
    /// See [`SignedRequest::build`].
    pub fn sign<B: Serialize + ?Sized>(
        &self,
        request: RequestDescriptor<'_, B>,
    ) -> Result<SignedRequest, Error> {
        SignedRequest::build(
            request,
            &self.base_url,
            &self.credentials,
            &self.signer,
            self.clock.unix_seconds(),
        )
    }

    /// Executes `request` and decodes the success body into `T`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUsage`] / [`Error::Encode`] before anything is sent
    /// - [`Error::Transport`] when no response arrives
    /// - [`Error::Api`] for a non-2xx status with a provider error document
    /// - [`Error::Decode`] when either body does not match its shape
    pub async fn execute<T, B>(&self, request: RequestDescriptor<'_, B>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(request).await?;

        serde_json::from_slice(&response.body).map_err(|source| Error::Decode {
            what: std::any::type_name::<T>(),
            status: response.status,
            source,
        })
    }

    /// Executes `request`, checking only the status on success.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute), minus success-body decoding.
    pub async fn execute_unit<B>(&self, request: RequestDescriptor<'_, B>) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        self.send(request).await.map(|_| ())
    }

    /// Signs, sends and classifies. Returns the response only when it is 2xx.
    async fn send<B: Serialize + ?Sized>(
        &self,
        request: RequestDescriptor<'_, B>,
    ) -> Result<HttpResponse, Error> {
        let signed = self.sign(request)?;

        tracing::debug!(method = %signed.method(), url = %signed.url(), "Sending API request");
        if let Some(body) = signed.body() {
            tracing::trace!(body = %String::from_utf8_lossy(body), "Request body");
        }

        let response = self.http.request(signed.into_http_request()).await?;

        tracing::debug!(status = %response.status, "API response received");
        tracing::trace!(body = %String::from_utf8_lossy(&response.body), "Response body");

        if response.is_success() {
            return Ok(response);
        }

        let error: ErrorResponse =
            serde_json::from_slice(&response.body).map_err(|source| Error::Decode {
                what: "error response",
                status: response.status,
                source,
            })?;

        tracing::warn!(
            status = %response.status,
            code = %error.code,
            "Provider rejected request: {}",
            error.description
        );

        Err(Error::from_response(error, response.status))
    }
}

fn base_url(domain: &str, host: &str) -> String {
    format!("https://{domain}.{host}/{API_VERSION}")
}
