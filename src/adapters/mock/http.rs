//! Mock HTTP client for testing.
//!
//! Responses are keyed by method and exact URL; every request is recorded
//! so tests can assert on how many calls were made and what they carried.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::mutex_ext::MutexExt;
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// `GET` or `POST`
    pub method: String,
    pub url: String,
    pub headers: Headers,
    /// Request body (POST only)
    pub body: Option<String>,
}

impl RecordedRequest {
    /// The body parsed as JSON, if there is one and it parses.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Hand back this response (any status).
    Success(Response),
    /// Fail at the transport level.
    Error(HttpError),
}

impl MockResponse {
    /// A response with `status` and `value` as its JSON body.
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(status, &value))
    }

    /// A response with `status` and an empty body.
    pub fn status(status: u16) -> Self {
        MockResponse::Success(Response::new(status, bytes::Bytes::new()))
    }
}

/// Mock HTTP client for testing.
///
/// Clones share configuration and the request log.
///
/// # Example
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response("GET", "https://api.test/regions", MockResponse::json(200, json!([])));
///
/// let response = client.get("https://api.test/regions", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.request_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<(String, String), MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    delay: Arc<Mutex<Option<Duration>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response for `method` on exactly `url`.
    pub fn set_response(&self, method: &str, url: &str, response: MockResponse) {
        self.responses
            .lock_or_recover()
            .insert((method.to_ascii_uppercase(), url.to_string()), response);
    }

    /// Response for requests without a specific match.
    ///
    /// Without one, unmatched requests fail with a 404.
    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock_or_recover() = Some(response);
    }

    /// Delay every response, to keep requests in flight.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock_or_recover() = Some(delay);
    }

    /// All recorded requests, oldest first.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock_or_recover().clone()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock_or_recover().len()
    }

    /// Recorded requests for one method and URL.
    pub fn requests_to(&self, method: &str, url: &str) -> Vec<RecordedRequest> {
        self.requests
            .lock_or_recover()
            .iter()
            .filter(|r| r.method.eq_ignore_ascii_case(method) && r.url == url)
            .cloned()
            .collect()
    }

    pub fn clear_requests(&self) {
        self.requests.lock_or_recover().clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        self.requests.lock_or_recover().push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    async fn respond(&self, method: &str, url: &str) -> Result<Response, HttpError> {
        let delay = *self.delay.lock_or_recover();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let configured = self
            .responses
            .lock_or_recover()
            .get(&(method.to_string(), url.to_string()))
            .cloned();
        let response = configured.or_else(|| self.default_response.lock_or_recover().clone());

        match response {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Ok(Response::new(404, bytes::Bytes::from("no mock configured"))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.respond("GET", url).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        self.respond("POST", url).await
    }
}
