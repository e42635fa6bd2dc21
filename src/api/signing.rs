//! Request descriptors and HMAC-SHA256 signing.

use hmac::{Hmac, Mac};
use http::{HeaderName, HeaderValue, Method};
use serde::Serialize;
use sha2::Sha256;
use url::Url;

use super::{Credentials, Error};
use crate::http::HttpRequest;

type HmacSha256 = Hmac<Sha256>;

/// Authentication header names.
pub mod header {
    /// API key
    pub const API_KEY: &str = "x-zabo-key";
    /// Hex HMAC-SHA256 signature
    pub const SIGNATURE: &str = "x-zabo-sig";
    /// Unix seconds the signature was computed at
    pub const TIMESTAMP: &str = "x-zabo-timestamp";
}

/// One API call before signing.
///
/// Built fresh per call and consumed by signing. The body is borrowed and
/// serialized exactly once, when the request is signed.
///
/// # Example
///
/// ```
/// use budins::api::RequestDescriptor;
/// use budins::models::UpdateAccount;
///
/// let update = UpdateAccount { display: true, disabled: false };
/// let request = RequestDescriptor::put("/users/me/accounts/17")
///     .with_token("user-token")
///     .with_body(&update);
/// assert_eq!(request.route(), "/users/me/accounts/17");
/// ```
#[derive(Debug)]
pub struct RequestDescriptor<'a, B: ?Sized = ()> {
    method: Method,
    route: String,
    query: Vec<(String, String)>,
    token: Option<String>,
    body: Option<&'a B>,
}

impl RequestDescriptor<'static, ()> {
    /// Creates a body-less request.
    #[must_use]
    pub fn new(method: Method, route: impl Into<String>) -> Self {
        Self {
            method,
            route: route.into(),
            query: Vec::new(),
            token: None,
            body: None,
        }
    }

    #[must_use]
    pub fn get(route: impl Into<String>) -> Self {
        Self::new(Method::GET, route)
    }

    #[must_use]
    pub fn post(route: impl Into<String>) -> Self {
        Self::new(Method::POST, route)
    }

    #[must_use]
    pub fn put(route: impl Into<String>) -> Self {
        Self::new(Method::PUT, route)
    }

    #[must_use]
    pub fn delete(route: impl Into<String>) -> Self {
        Self::new(Method::DELETE, route)
    }
}

impl<'a, B: ?Sized> RequestDescriptor<'a, B> {
    /// Adds a query parameter. Parameters are not part of the signature.
    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Sends the user's access token as `Authorization: Bearer`.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_body<'b, B2: ?Sized>(self, body: &'b B2) -> RequestDescriptor<'b, B2> {
        RequestDescriptor {
            method: self.method,
            route: self.route,
            query: self.query,
            token: self.token,
            body: Some(body),
        }
    }

    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns true if a body is attached.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

/// Returns true for verbs allowed to carry a request body.
fn carries_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT || *method == Method::PATCH
}

/// Computes `hex(HMAC-SHA256(secret, timestamp || url || body))`.
#[derive(Clone)]
pub struct RequestSigner {
    secret: String,
}

impl RequestSigner {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Signs one request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUsage`] if the secret cannot key an HMAC.
    pub fn sign(&self, timestamp: u64, url: &str, body: &[u8]) -> Result<String, Error> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| Error::InvalidUsage(format!("unusable API secret: {e}")))?;

        mac.update(timestamp.to_string().as_bytes());
        mac.update(url.as_bytes());
        mac.update(body);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}

/// A request whose signature covers its exact body bytes.
///
/// There are no setters: the only way to change anything is to build and
/// sign a new request. [`into_http_request`](Self::into_http_request)
/// hands the signed bytes to the transport unchanged.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    method: Method,
    url: Url,
    headers: http::HeaderMap,
    body: Option<Vec<u8>>,
    timestamp: u64,
    signature: String,
}

impl SignedRequest {
    /// Serializes, signs and assembles `request` against `base_url`.
    ///
    /// `base_url` already includes the API version segment, for example
    /// `https://demo.biapi.pro/2.0`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUsage`] when a body is attached to a verb that
    ///   cannot carry one, the route is malformed, or a credential is not
    ///   a valid header value
    /// - [`Error::Encode`] when the body fails to serialize
    pub fn build<B: Serialize + ?Sized>(
        request: RequestDescriptor<'_, B>,
        base_url: &str,
        credentials: &Credentials,
        signer: &RequestSigner,
        timestamp: u64,
    ) -> Result<Self, Error> {
        if !request.route.starts_with('/') {
            return Err(Error::InvalidUsage(format!(
                "route '{}' must start with '/'",
                request.route
            )));
        }

        let mut url = Url::parse(&format!("{base_url}{}", request.route))
            .map_err(|e| Error::InvalidUsage(format!("invalid route '{}': {e}", request.route)))?;

        let body = match request.body {
            Some(_) if !carries_body(&request.method) => {
                return Err(Error::InvalidUsage(format!(
                    "request body can't be sent with {}",
                    request.method
                )));
            }
            Some(body) => Some(serde_json::to_vec(body).map_err(|source| Error::Encode {
                what: "request body",
                source,
            })?),
            None => None,
        };

        let signature = signer.sign(
            timestamp,
            url.as_str(),
            body.as_deref().unwrap_or_default(),
        )?;

        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(
            HeaderName::from_static(header::API_KEY),
            header_value("API key", credentials.api_key())?,
        );
        headers.insert(
            HeaderName::from_static(header::SIGNATURE),
            header_value("signature", &signature)?,
        );
        headers.insert(
            HeaderName::from_static(header::TIMESTAMP),
            HeaderValue::from(timestamp),
        );
        if let Some(token) = &request.token {
            headers.insert(
                http::header::AUTHORIZATION,
                header_value("access token", &format!("Bearer {token}"))?,
            );
        }

        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }

        Ok(Self {
            method: request.method,
            url,
            headers,
            body,
            timestamp,
            signature,
        })
    }

    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Target URL including the query string.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub const fn headers(&self) -> &http::HeaderMap {
        &self.headers
    }

    /// The exact bytes that were signed and will be sent.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        self.timestamp
    }

    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Converts into a transport request without touching the signed bytes.
    #[must_use]
    pub fn into_http_request(self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

fn header_value(what: &str, value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::InvalidUsage(format!("{what} is not a valid header value: {e}")))
}
