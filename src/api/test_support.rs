//! Transport spy shared by the API tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{ApiClient, Credentials};
use crate::http::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::time::FixedClock;

pub const NOW: u64 = 1_620_000_000;

/// Records every request and replays scripted outcomes in order.
#[derive(Debug, Default)]
pub struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            ..Self::default()
        }
    }

    pub fn replying(status: u16, body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse::from_parts(status, body))])
    }

    pub fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.captured_requests().pop().expect("no request was sent")
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("client-id", "api-key", "api-secret")
}

/// Client for domain `demo` with the clock pinned at [`NOW`].
pub fn client(mock: MockClient) -> ApiClient<MockClient, FixedClock> {
    ApiClient::new(mock, credentials(), "demo").with_clock(FixedClock(NOW))
}
