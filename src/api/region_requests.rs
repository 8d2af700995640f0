//! `/user/region-update-requests/`: read the latest request, file a new one.

use tracing::{info, warn};

use super::client::{body_excerpt, decode, ensure_authorized, status_error, PcaApiClient};
use crate::auth::Credential;
use crate::error::{AuthError, PcaResult, SubmitError};
use crate::models::{RegionChangeRequest, RegionId};
use crate::traits::HttpClient;

pub const REGION_REQUESTS_PATH: &str = "/user/region-update-requests/";

impl<C: HttpClient> PcaApiClient<C> {
    /// The user's most recent region change request, or `None` if they never
    /// filed one.
    ///
    /// The endpoint lists requests newest first; only the head matters.
    pub async fn fetch_latest_request(
        &self,
        credential: &Credential,
    ) -> PcaResult<Option<RegionChangeRequest>> {
        let response = self.get(REGION_REQUESTS_PATH, Some(credential)).await?;
        ensure_authorized(&response)?;
        if !response.is_success() {
            return Err(status_error(&response).into());
        }
        let requests: Vec<RegionChangeRequest> = decode(&response)?;
        Ok(requests.into_iter().next())
    }

    /// File a request to change the user's region to `region`.
    ///
    /// Status mapping: 403 is a moderation denial, 400/409 a same-year
    /// duplicate, 401 a rejected credential; anything else non-2xx is a
    /// network error.
    pub async fn submit_region(&self, credential: &Credential, region: &RegionId) -> PcaResult<()> {
        let body = serde_json::json!({ "region": region });
        let response = self
            .post_json(REGION_REQUESTS_PATH, &body, Some(credential))
            .await?;

        match response.status {
            200..=299 => {
                info!(region = %region, "Region change request submitted");
                Ok(())
            }
            401 => Err(AuthError::Unauthorized { status: 401 }.into()),
            403 => {
                warn!(region = %region, "Region change request denied");
                Err(SubmitError::Denied {
                    message: body_excerpt(&response),
                }
                .into())
            }
            400 | 409 => {
                warn!(region = %region, status = response.status, "Region change request rejected");
                Err(SubmitError::Conflict {
                    status: response.status,
                    message: body_excerpt(&response),
                }
                .into())
            }
            _ => Err(status_error(&response).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::error::{NetworkError, PcaError};
    use crate::models::RequestStatus;

    const URL: &str = "https://api.test/user/region-update-requests/";

    fn setup(method: &str, response: MockResponse) -> (MockHttpClient, PcaApiClient<MockHttpClient>) {
        let http = MockHttpClient::new();
        http.set_response(method, URL, response);
        let client = PcaApiClient::with_http("https://api.test", http.clone());
        (http, client)
    }

    fn credential() -> Credential {
        Credential::parse("abc123").unwrap()
    }

    fn ncr() -> RegionId {
        RegionId::parse("NCR").unwrap()
    }

    #[tokio::test]
    async fn test_latest_request_is_first_element() {
        let (_, client) = setup(
            "GET",
            MockResponse::json(
                200,
                serde_json::json!([
                    { "region": "CAR", "status": "Denied", "created_at": "2024-05-01T00:00:00Z" },
                    { "region": "NCR", "status": "Approved", "created_at": "2023-01-01T00:00:00Z" }
                ]),
            ),
        );

        let latest = client.fetch_latest_request(&credential()).await.unwrap().unwrap();
        assert_eq!(latest.region.as_str(), "CAR");
        assert_eq!(latest.status, RequestStatus::Denied);
    }

    #[tokio::test]
    async fn test_no_requests_is_none() {
        let (_, client) = setup("GET", MockResponse::json(200, serde_json::json!([])));
        assert_eq!(client.fetch_latest_request(&credential()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_latest_request_unauthorized() {
        let (_, client) = setup("GET", MockResponse::status(403));
        let err = client.fetch_latest_request(&credential()).await.unwrap_err();
        assert!(err.requires_reauth());
    }

    #[tokio::test]
    async fn test_submit_posts_region() {
        let (http, client) = setup("POST", MockResponse::status(201));

        client.submit_region(&credential(), &ncr()).await.unwrap();

        let request = &http.requests_to("POST", URL)[0];
        assert_eq!(request.json_body(), Some(serde_json::json!({ "region": "NCR" })));
        assert_eq!(
            request.headers.get("Authorization").map(String::as_str),
            Some("Token abc123")
        );
    }

    #[tokio::test]
    async fn test_submit_status_mapping() {
        let (_, client) = setup("POST", MockResponse::status(403));
        assert!(matches!(
            client.submit_region(&credential(), &ncr()).await,
            Err(PcaError::Submit(SubmitError::Denied { .. }))
        ));

        let (_, client) = setup("POST", MockResponse::status(400));
        assert!(matches!(
            client.submit_region(&credential(), &ncr()).await,
            Err(PcaError::Submit(SubmitError::Conflict { status: 400, .. }))
        ));

        let (_, client) = setup("POST", MockResponse::status(401));
        assert!(matches!(
            client.submit_region(&credential(), &ncr()).await,
            Err(PcaError::Auth(AuthError::Unauthorized { status: 401 }))
        ));

        let (_, client) = setup("POST", MockResponse::status(500));
        assert!(matches!(
            client.submit_region(&credential(), &ncr()).await,
            Err(PcaError::Network(NetworkError::HttpStatus { status: 500, .. }))
        ));
    }
}
