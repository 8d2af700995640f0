//! HTTP plumbing shared by every PCA API call.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::adapters::ReqwestHttpClient;
use crate::auth::Credential;
use crate::error::{classify_http_error, AuthError, NetworkError};
use crate::models::Payload;
use crate::traits::{Headers, HttpClient, Response};

/// Default base URL of the PCA API.
pub const PCA_API_URL: &str = "https://api.pinoycubers.org";

/// Longest body excerpt kept in error messages.
const MAX_ERROR_BODY: usize = 200;

/// Client for the PCA API.
///
/// Endpoint methods live next to the data they fetch: see [`super::user`],
/// [`super::region_requests`], [`super::regions`] and [`super::login`].
#[derive(Debug, Clone)]
pub struct PcaApiClient<C: HttpClient = ReqwestHttpClient> {
    base_url: String,
    http: C,
}

impl PcaApiClient<ReqwestHttpClient> {
    /// Client against the public API with default HTTP settings.
    pub fn new() -> Self {
        Self::with_http(PCA_API_URL, ReqwestHttpClient::new())
    }
}

impl Default for PcaApiClient<ReqwestHttpClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HttpClient> PcaApiClient<C> {
    /// Client against `base_url` over the given transport.
    pub fn with_http(base_url: impl Into<String>, http: C) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying transport.
    pub fn http(&self) -> &C {
        &self.http
    }

    /// Absolute URL for an API path such as `/user/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn headers(credential: Option<&Credential>, has_body: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if has_body {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(credential) = credential {
            headers.insert("Authorization".to_string(), credential.authorization_header());
        }
        headers
    }

    pub(crate) async fn get(
        &self,
        path: &str,
        credential: Option<&Credential>,
    ) -> Result<Response, NetworkError> {
        let url = self.url(path);
        let response = self
            .http
            .get(&url, &Self::headers(credential, false))
            .await
            .map_err(|e| classify_http_error(e, &url))?;
        debug!(url = %url, status = response.status, "GET");
        Ok(response)
    }

    pub(crate) async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
        credential: Option<&Credential>,
    ) -> Result<Response, NetworkError> {
        let url = self.url(path);
        let response = self
            .http
            .post(&url, &body.to_string(), &Self::headers(credential, true))
            .await
            .map_err(|e| classify_http_error(e, &url))?;
        debug!(url = %url, status = response.status, "POST");
        Ok(response)
    }
}

/// Decode a body that may or may not be wrapped in `{ "data": ... }`.
pub(crate) fn decode<T: DeserializeOwned>(response: &Response) -> Result<T, NetworkError> {
    response
        .json::<Payload<T>>()
        .map(Payload::into_inner)
        .map_err(|e| NetworkError::InvalidResponse {
            message: e.to_string(),
        })
}

/// Reject answers to authenticated reads that mean the credential is no good.
pub(crate) fn ensure_authorized(response: &Response) -> Result<(), AuthError> {
    match response.status {
        401 | 403 => Err(AuthError::Unauthorized {
            status: response.status,
        }),
        _ => Ok(()),
    }
}

/// A non-2xx answer as a [`NetworkError`].
pub(crate) fn status_error(response: &Response) -> NetworkError {
    NetworkError::HttpStatus {
        status: response.status,
        message: body_excerpt(response),
    }
}

/// The start of the response body, for error messages.
pub(crate) fn body_excerpt(response: &Response) -> String {
    let text = String::from_utf8_lossy(&response.body);
    let text = text.trim();
    match text.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
