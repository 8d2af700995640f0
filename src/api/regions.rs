//! `GET /regions`: selectable region reference data.

use super::client::{decode, status_error, PcaApiClient};
use crate::error::PcaResult;
use crate::models::Region;
use crate::traits::HttpClient;

pub const REGIONS_PATH: &str = "/regions";

impl<C: HttpClient> PcaApiClient<C> {
    /// List the regions a user can pick from.
    ///
    /// With `national`, the country-wide option is put first; ranking
    /// navigation offers it, the submission form does not.
    pub async fn fetch_regions(&self, national: bool) -> PcaResult<Vec<Region>> {
        let response = self.get(REGIONS_PATH, None).await?;
        if !response.is_success() {
            return Err(status_error(&response).into());
        }
        let regions: Vec<Region> = decode(&response)?;

        if national {
            Ok(std::iter::once(Region::national()).chain(regions).collect())
        } else {
            Ok(regions)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};

    fn client() -> (MockHttpClient, PcaApiClient<MockHttpClient>) {
        let http = MockHttpClient::new();
        http.set_response(
            "GET",
            "https://api.test/regions",
            MockResponse::json(
                200,
                serde_json::json!([
                    { "id": "NCR", "name": "National Capital Region" },
                    { "id": "CAR", "name": "Cordillera Administrative Region" }
                ]),
            ),
        );
        let client = PcaApiClient::with_http("https://api.test", http.clone());
        (http, client)
    }

    #[tokio::test]
    async fn test_fetch_regions_is_anonymous() {
        let (http, client) = client();

        let regions = client.fetch_regions(false).await.unwrap();

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].id.as_str(), "NCR");
        assert!(!http.get_requests()[0].headers.contains_key("Authorization"));
    }

    #[tokio::test]
    async fn test_national_option_comes_first() {
        let (_, client) = client();

        let regions = client.fetch_regions(true).await.unwrap();

        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0], Region::national());
        assert_eq!(regions[0].name, "Philippines");
    }
}
